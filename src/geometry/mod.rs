// ============================================================================
// Geometry Module
// 2D vectors, affine matrices, shapes and polygon utilities
// ============================================================================
//
// Everything here is composed from the public FixedPoint API, so it inherits
// the same determinism guarantees. Policies for degenerate input (zero-length
// vectors, zero-area polygons, singular matrices) are decided at this layer.

mod matrix;
mod polygon;
mod shapes;
mod vector;

pub use matrix::Mat3;
pub use polygon::{
    closest_point_on_segment, point_segment_distance, segments_intersect, Polygon, Vertices,
};
pub use shapes::{Circle, Rect};
pub use vector::Vec2;
