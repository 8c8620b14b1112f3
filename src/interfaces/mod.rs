// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod shape;

pub use shape::Shape;
