use uuid::Uuid;

// ============================================================================
// Board Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Item {item_id} not found on order {order_id}")]
    ItemNotFound { order_id: Uuid, item_id: Uuid },
}
