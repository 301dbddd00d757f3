use uuid::Uuid;

use super::value_objects::{OrderStatus, Priority};

// ============================================================================
// Board Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum BoardCommand {
    /// Overwrite an order's status. The board does not guard the transition
    /// direction; the lifecycle ladder is advisory (`OrderStatus::next`).
    UpdateStatus {
        order_id: Uuid,
        status: OrderStatus,
    },
    UpdatePriority {
        order_id: Uuid,
        priority: Priority,
    },
    /// Flip a line item's completion flag. Applying the same toggle twice
    /// restores the original state.
    ToggleItem {
        order_id: Uuid,
        item_id: Uuid,
    },
}
