// ============================================================================
// Shape Interface
// Common contract for closed 2D shapes built on fixed-point coordinates
// ============================================================================

use crate::geometry::{Rect, Vec2};
use crate::numeric::FixedPoint;

/// Closed 2D region with fixed-point geometry.
/// Implementations: Rect, Circle, Polygon
pub trait Shape: Send + Sync {
    /// Enclosed area (always non-negative)
    fn area(&self) -> FixedPoint;

    /// Smallest axis-aligned rectangle containing the shape
    fn bounds(&self) -> Rect;

    /// Whether `point` lies inside or on the boundary
    fn contains_point(&self, point: Vec2) -> bool;

    /// Get the shape name for logging
    fn name(&self) -> &str;

    /// Broad-phase check: do the bounding rectangles overlap?
    fn bounds_overlap(&self, other: &dyn Shape) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}
