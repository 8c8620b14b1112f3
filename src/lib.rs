// ============================================================================
// Lockstep Math Library
// Deterministic fixed-point arithmetic and 2D geometry
// ============================================================================

//! # Lockstep Math
//!
//! Fixed-point numbers and 2D geometry that produce bit-identical results on
//! every platform, for lockstep networked simulations.
//!
//! ## Features
//!
//! - **Scaled-integer core**: `FixedPoint` stores `value × 10^6` in an i64
//! - **Own transcendental algorithms**: sqrt, sin/cos/tan, asin/acos/atan/atan2,
//!   ln, exp and pow with fixed iteration caps; no host float math
//! - **Explicit errors** for every undefined operation
//! - **2D geometry**: vectors, affine matrices, rectangles, circles, polygons
//! - **Bounded value cache** for sharing frequently built values
//!
//! ## Example
//!
//! ```rust
//! use lockstep_math::prelude::*;
//!
//! let speed: FixedPoint = "3.5".parse().unwrap();
//! let heading = FixedPoint::QUARTER_PI;
//!
//! let velocity = Vec2::from_angle(heading).scale(speed);
//! let position = Vec2::ZERO + velocity;
//!
//! // Same inputs, same raw bits, on every machine
//! assert_eq!(position, Vec2::from_angle(heading).scale(speed));
//! assert!(FixedPoint::ONE.divide(FixedPoint::ZERO).is_err());
//! ```

pub mod config;
pub mod geometry;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::CacheConfig;
    pub use crate::geometry::{
        closest_point_on_segment, point_segment_distance, segments_intersect, Circle, Mat3,
        Polygon, Rect, Vec2,
    };
    pub use crate::interfaces::Shape;
    pub use crate::numeric::{cached, FixedPoint, NumericError, NumericResult, ValueCache};
}

/// Install a `tracing` subscriber printing to stdout at `level`.
///
/// Returns `false` when a global subscriber was already installed.
#[cfg(feature = "logging")]
pub fn init_logging(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .is_ok()
}
