// ============================================================================
// Domain Layer
// ============================================================================

pub mod order;
