use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::{BoardCommand, BoardError, Order, OrderStatus, Priority, Station};

pub mod stats;
pub mod view;

pub use stats::{BoardMetrics, ColumnStats};
pub use view::{BoardView, StationCounts};

// ============================================================================
// Order Board - Owned Collection Behind an Explicit Interface
// ============================================================================
//
// The board owns the one order collection. Presentation code never holds a
// mutable reference into it: reads go through views/copies, writes go
// through the three mutation entry points (or `apply` with a BoardCommand).
// All operations are synchronous and run to completion; the periodic
// display tick only affects the `now` the caller passes into derivations.
//
// ============================================================================

/// Note shown when an order is modified after the kitchen started it,
/// dismissable per order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModificationAlert {
    pub order_id: Uuid,
    pub number: String,
    pub noted_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
    alerts: Vec<ModificationAlert>,
}

impl OrderBoard {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            alerts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Read-only view of the collection, in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, order_id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    // ------------------------------------------------------------------------
    // Mutation entry points
    // ------------------------------------------------------------------------

    /// Overwrite an order's status and bump its last-updated timestamp.
    ///
    /// The overwrite is unconditional: backward transitions are accepted,
    /// matching the board's single-operator usage where every press is an
    /// explicit decision.
    pub fn update_status(
        &mut self,
        order_id: Uuid,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<(), BoardError> {
        let order = self.get_mut(order_id)?;
        let previous = order.status;
        order.status = status;
        order.last_updated = now;
        tracing::info!(
            order = %order.number,
            from = ?previous,
            to = ?status,
            "order status updated"
        );
        Ok(())
    }

    pub fn update_priority(
        &mut self,
        order_id: Uuid,
        priority: Priority,
    ) -> Result<(), BoardError> {
        let order = self.get_mut(order_id)?;
        order.priority = priority;
        tracing::info!(order = %order.number, priority = ?priority, "order priority updated");
        Ok(())
    }

    /// Flip one line item's completion flag.
    pub fn toggle_item(&mut self, order_id: Uuid, item_id: Uuid) -> Result<(), BoardError> {
        let order = self.get_mut(order_id)?;
        let number = order.number.clone();
        let item = order
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(BoardError::ItemNotFound { order_id, item_id })?;
        item.completed = !item.completed;
        tracing::debug!(
            order = %number,
            item = %item.name,
            completed = item.completed,
            "line item toggled"
        );
        Ok(())
    }

    /// Dispatch a command to the matching mutation entry point.
    pub fn apply(&mut self, command: BoardCommand, now: DateTime<Utc>) -> Result<(), BoardError> {
        match command {
            BoardCommand::UpdateStatus { order_id, status } => {
                self.update_status(order_id, status, now)
            }
            BoardCommand::UpdatePriority { order_id, priority } => {
                self.update_priority(order_id, priority)
            }
            BoardCommand::ToggleItem { order_id, item_id } => self.toggle_item(order_id, item_id),
        }
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// Partition the collection into the four status buckets, optionally
    /// filtered by station. `None` yields the full collection.
    pub fn view(&self, station: Option<Station>) -> BoardView {
        BoardView::partition(&self.orders, station)
    }

    pub fn station_counts(&self) -> StationCounts {
        StationCounts::count(&self.orders)
    }

    pub fn metrics(&self, now: DateTime<Utc>) -> BoardMetrics {
        BoardMetrics::compute(&self.orders, now)
    }

    // ------------------------------------------------------------------------
    // Modification alerts
    // ------------------------------------------------------------------------

    /// Record that an order was changed outside the kitchen's own actions
    /// (e.g. the customer edited it) so the board can surface an alert.
    pub fn record_modification(
        &mut self,
        order_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), BoardError> {
        let number = self
            .get(order_id)
            .ok_or(BoardError::OrderNotFound(order_id))?
            .number
            .clone();
        tracing::warn!(order = %number, "order modified after submission");
        self.alerts.push(ModificationAlert {
            order_id,
            number,
            noted_at: now,
        });
        Ok(())
    }

    pub fn alerts(&self) -> &[ModificationAlert] {
        &self.alerts
    }

    pub fn dismiss_alert(&mut self, order_id: Uuid) {
        self.alerts.retain(|alert| alert.order_id != order_id);
    }

    fn get_mut(&mut self, order_id: Uuid) -> Result<&mut Order, BoardError> {
        self.orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or(BoardError::OrderNotFound(order_id))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
