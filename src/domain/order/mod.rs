// ============================================================================
// Order Domain - Kitchen Board Vocabulary
// ============================================================================
//
// This module contains ALL order-specific code:
// - Value objects (LineItem, OrderStatus, Priority, Station, Urgency)
// - The Order entity with its pure derivations (elapsed, urgency, completion)
// - Commands (UpdateStatus, UpdatePriority, ToggleItem)
// - Errors (BoardError enum)
//
// The owning collection lives in `crate::board`.
//
// ============================================================================

pub mod commands;
pub mod errors;
pub mod order;
pub mod value_objects;

// Re-export for convenience
pub use commands::*;
pub use errors::*;
pub use order::*;
pub use value_objects::*;
