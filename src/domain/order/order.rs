use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{DeliveryMethod, LineItem, OrderStatus, Priority, Station, Urgency};

// ============================================================================
// Order Entity - Board Domain Logic
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // Identity
    pub id: Uuid,
    /// Short display number shown on tickets, e.g. "8901".
    pub number: String,

    // Customer-facing details
    pub customer_name: String,
    pub delivery_method: DeliveryMethod,
    /// Set for dine-in orders.
    pub table_number: Option<String>,
    /// Set for delivery orders.
    pub address: Option<String>,

    // Kitchen routing
    pub station: Station,
    pub priority: Priority,
    pub status: OrderStatus,
    pub estimated_minutes: i64,
    pub items: Vec<LineItem>,

    // Audit trail
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Order {
    /// Whole minutes elapsed since the order was placed.
    ///
    /// `now` is always supplied by the caller so the derivation stays
    /// referentially transparent; the one-second display tick in the
    /// presentation layer just calls this again with a fresh clock reading.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_seconds().div_euclid(60)
    }

    pub fn urgency(&self, now: DateTime<Utc>) -> Urgency {
        Urgency::classify(self.priority, self.elapsed_minutes(now), self.estimated_minutes)
    }

    pub fn completed_items(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Fraction of line items marked done, as a percentage.
    /// An order with no items is 0%, never a division by zero.
    pub fn completion_percentage(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.completed_items() as f64 / self.items.len() as f64 * 100.0
    }

}

/// Ticket-style rendering of an elapsed duration: "45m", or "1h 5m" from
/// one hour up.
pub fn format_elapsed(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

// ============================================================================
// Unit Tests
// ============================================================================
