use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::order::{Order, OrderStatus, Priority};

// ============================================================================
// Derived Statistics - Column Footers and the Metrics Panel
// ============================================================================

/// Per-column aggregates shown in the column header and footer.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub orders: usize,
    /// Orders that demand attention now: explicit Urgent priority, or
    /// elapsed time at or past the estimate.
    pub urgent: usize,
    /// Mean elapsed minutes across the column, floored; 0 for an empty column.
    pub avg_elapsed_minutes: i64,
    /// Orders flagged High or Urgent.
    pub priority: usize,
    /// Total line items across the column.
    pub items: usize,
}

impl ColumnStats {
    pub fn for_orders(orders: &[Order], now: DateTime<Utc>) -> Self {
        let urgent = orders
            .iter()
            .filter(|order| {
                order.priority == Priority::Urgent
                    || order.elapsed_minutes(now) >= order.estimated_minutes
            })
            .count();

        let avg_elapsed_minutes = if orders.is_empty() {
            0
        } else {
            let total: i64 = orders.iter().map(|order| order.elapsed_minutes(now)).sum();
            total.div_euclid(orders.len() as i64)
        };

        Self {
            orders: orders.len(),
            urgent,
            avg_elapsed_minutes,
            priority: orders
                .iter()
                .filter(|order| matches!(order.priority, Priority::High | Priority::Urgent))
                .count(),
            items: orders.iter().map(|order| order.items.len()).sum(),
        }
    }
}

/// Board-wide figures for the performance panel.
#[derive(Debug, Clone, Serialize)]
pub struct BoardMetrics {
    pub total_orders: usize,
    /// Everything not yet Completed.
    pub active_orders: usize,
    /// Mean elapsed minutes over active orders; 0 when none are active.
    pub average_prep_minutes: f64,
    /// Completed orders as a percentage of the whole collection; 0 when empty.
    pub completion_rate: f64,
}

impl BoardMetrics {
    pub fn compute(orders: &[Order], now: DateTime<Utc>) -> Self {
        let active: Vec<&Order> = orders
            .iter()
            .filter(|order| order.status != OrderStatus::Completed)
            .collect();

        let average_prep_minutes = if active.is_empty() {
            0.0
        } else {
            let total: i64 = active.iter().map(|order| order.elapsed_minutes(now)).sum();
            total as f64 / active.len() as f64
        };

        let completion_rate = if orders.is_empty() {
            0.0
        } else {
            let completed = orders.len() - active.len();
            completed as f64 / orders.len() as f64 * 100.0
        };

        Self {
            total_orders: orders.len(),
            active_orders: active.len(),
            average_prep_minutes,
            completion_rate,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
