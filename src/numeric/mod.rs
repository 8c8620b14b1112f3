// ============================================================================
// Numeric Module
// Deterministic fixed-point arithmetic for lockstep simulation
// ============================================================================
//
// This module provides:
// - FixedPoint: i64 scaled by 10^6 with arithmetic and transcendental functions
// - NumericError: Error types for every fallible operation
// - ValueCache: Optional bounded cache of shared values
//
// Design principles:
// - No floating-point operations outside the f64 boundary conversions
// - Fallible operations return Result (no panics)
// - Fixed iteration caps and one rounding rule (half away from zero)
// - Compile-time constants and lookup tables

mod cache;
mod constants;
mod errors;
mod fixed_point;
mod transcendental;

pub use cache::{cached, global_cache, ValueCache, NAMED_CONSTANTS};
pub use constants::{DECIMALS, SCALE};
pub use errors::{NumericError, NumericResult};
pub use fixed_point::FixedPoint;
