// ============================================================================
// Shapes
// Axis-aligned rectangles and circles
// ============================================================================

use super::vector::Vec2;
use crate::interfaces::Shape;
use crate::numeric::FixedPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle stored as its minimum and maximum corners.
///
/// Edges are inclusive: a point on the border is contained, and rectangles
/// that share an edge intersect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create from any two opposite corners.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        let half = Vec2::new(half_extents.x.abs(), half_extents.y.abs());
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> FixedPoint {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> FixedPoint {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        self.min.lerp(self.max, FixedPoint::HALF)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Overlapping region, or `None` when the rectangles are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        Some(Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow by `margin` on every side (shrinks for negative margins).
    pub fn expand(&self, margin: FixedPoint) -> Rect {
        let delta = Vec2::new(margin, margin);
        Rect::new(self.min - delta, self.max + delta)
    }

    /// Point inside the rectangle closest to `point`.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }
}

impl Shape for Rect {
    fn area(&self) -> FixedPoint {
        self.width() * self.height()
    }

    fn bounds(&self) -> Rect {
        *self
    }

    fn contains_point(&self, point: Vec2) -> bool {
        self.contains(point)
    }

    fn name(&self) -> &str {
        "Rect"
    }
}

// ============================================================================
// Circle
// ============================================================================

/// Circle with fixed-point center and radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center: Vec2,
    pub radius: FixedPoint,
}

impl Circle {
    /// Negative radii are stored as their absolute value.
    pub fn new(center: Vec2, radius: FixedPoint) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }

    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        self.contains(rect.clamp_point(self.center))
    }

    pub fn circumference(&self) -> FixedPoint {
        FixedPoint::TWO_PI * self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> FixedPoint {
        FixedPoint::PI * self.radius * self.radius
    }

    fn bounds(&self) -> Rect {
        Rect::from_center(self.center, Vec2::new(self.radius, self.radius))
    }

    fn contains_point(&self, point: Vec2) -> bool {
        self.contains(point)
    }

    fn name(&self) -> &str {
        "Circle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(v: f64) -> FixedPoint {
        FixedPoint::from_f64(v).unwrap()
    }

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(fp(x), fp(y))
    }

    #[test]
    fn test_rect_normalizes_corners() {
        let r = Rect::new(v(4.0, 1.0), v(0.0, 3.0));
        assert_eq!(r.min, v(0.0, 1.0));
        assert_eq!(r.max, v(4.0, 3.0));
        assert_eq!(r.width(), fp(4.0));
        assert_eq!(r.height(), fp(2.0));
        assert_eq!(r.center(), v(2.0, 2.0));
        assert_eq!(r.area(), fp(8.0));
    }

    #[test]
    fn test_rect_from_center() {
        let r = Rect::from_center(v(1.0, 1.0), v(-2.0, 0.5));
        assert_eq!(r.min, v(-1.0, 0.5));
        assert_eq!(r.max, v(3.0, 1.5));
        assert_eq!(r.size(), v(4.0, 1.0));
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let r = Rect::new(v(0.0, 0.0), v(2.0, 2.0));
        assert!(r.contains(v(1.0, 1.0)));
        assert!(r.contains(v(2.0, 0.0)));
        assert!(!r.contains(v(2.000001, 1.0)));
    }

    #[test]
    fn test_rect_intersection_and_union() {
        let a = Rect::new(v(0.0, 0.0), v(4.0, 4.0));
        let b = Rect::new(v(2.0, 3.0), v(6.0, 8.0));
        let c = Rect::new(v(10.0, 10.0), v(11.0, 11.0));

        assert!(a.intersects(&b));
        assert_eq!(
            a.intersection(&b),
            Some(Rect::new(v(2.0, 3.0), v(4.0, 4.0)))
        );
        assert!(!a.intersects(&c));
        assert_eq!(a.intersection(&c), None);
        assert_eq!(a.union(&c), Rect::new(v(0.0, 0.0), v(11.0, 11.0)));
    }

    #[test]
    fn test_rect_expand() {
        let r = Rect::new(v(0.0, 0.0), v(2.0, 2.0)).expand(fp(0.5));
        assert_eq!(r, Rect::new(v(-0.5, -0.5), v(2.5, 2.5)));
    }

    #[test]
    fn test_circle_contains() {
        let c = Circle::new(v(0.0, 0.0), fp(-5.0));
        assert_eq!(c.radius, fp(5.0));
        assert!(c.contains(v(3.0, 4.0)));
        assert!(!c.contains(v(3.0, 4.1)));
    }

    #[test]
    fn test_circle_intersections() {
        let a = Circle::new(v(0.0, 0.0), fp(1.0));
        let b = Circle::new(v(2.0, 0.0), fp(1.0));
        let c = Circle::new(v(2.1, 0.0), fp(1.0));
        assert!(a.intersects_circle(&b));
        assert!(!a.intersects_circle(&c));

        let near = Rect::new(v(0.5, 0.5), v(3.0, 3.0));
        let far = Rect::new(v(0.8, 0.8), v(3.0, 3.0));
        assert!(a.intersects_rect(&near));
        assert!(!a.intersects_rect(&far));
    }

    #[test]
    fn test_circle_shape_impl() {
        let c = Circle::new(v(1.0, 1.0), fp(2.0));
        assert_eq!(c.bounds(), Rect::new(v(-1.0, -1.0), v(3.0, 3.0)));
        assert_eq!(c.area(), FixedPoint::PI * fp(4.0));
        assert_eq!(c.circumference(), FixedPoint::TWO_PI * fp(2.0));
        assert_eq!(c.name(), "Circle");
        assert!(c.bounds_overlap(&Rect::new(v(2.5, 2.5), v(4.0, 4.0))));
    }
}
