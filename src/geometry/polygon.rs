// ============================================================================
// Polygon Utilities
// Simple polygons and segment queries over fixed-point coordinates
// ============================================================================

use super::shapes::Rect;
use super::vector::Vec2;
use crate::interfaces::Shape;
use crate::numeric::{FixedPoint, NumericError, NumericResult};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex storage; most gameplay polygons fit inline without allocating.
pub type Vertices = SmallVec<[Vec2; 8]>;

/// Simple polygon given by its vertices in order (either winding).
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vertices,
}

impl Polygon {
    pub fn new(vertices: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area: positive for counter-clockwise winding.
    pub fn signed_area(&self) -> FixedPoint {
        if self.vertices.len() < 3 {
            return FixedPoint::ZERO;
        }
        let mut twice = FixedPoint::ZERO;
        for (a, b) in self.edges() {
            twice.add_in_place(a.cross(b));
        }
        twice.multiply(FixedPoint::HALF)
    }

    /// Area centroid.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for degenerate polygons with zero area.
    pub fn centroid(&self) -> NumericResult<Vec2> {
        let area = self.signed_area();
        if area.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let mut sum = Vec2::ZERO;
        for (a, b) in self.edges() {
            sum.add_in_place((a + b).scale(a.cross(b)));
        }
        let denom = area.mul_int(6);
        Ok(Vec2::new(sum.x.divide(denom)?, sum.y.divide(denom)?))
    }

    pub fn perimeter(&self) -> FixedPoint {
        if self.vertices.len() < 2 {
            return FixedPoint::ZERO;
        }
        let mut total = FixedPoint::ZERO;
        for (a, b) in self.edges() {
            total.add_in_place(a.distance(b));
        }
        total
    }

    /// Crossing-number test. Points exactly on an edge count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if orientation(a, b, point) == 0 && within_segment_box(a, b, point) {
                return true;
            }
            if (a.y > point.y) != (b.y > point.y) {
                // a.y != b.y here, so the division cannot fail
                let t = (point.y - a.y).divide(b.y - a.y);
                if let Ok(t) = t {
                    let crossing_x = a.x + (b.x - a.x) * t;
                    if point.x < crossing_x {
                        inside = !inside;
                    }
                }
            }
        }
        inside
    }

    /// Every turn goes the same way (collinear runs allowed) and the edges
    /// wind around exactly once, which rules out self-intersecting stars.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut sign = 0i64;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let turn = orientation(a, b, c);
            if turn == 0 {
                continue;
            }
            if sign == 0 {
                sign = turn;
            } else if sign != turn {
                return false;
            }
        }

        // One revolution flips each direction component's sign at most twice
        sign != 0 && self.direction_flips(|d| d.x) <= 2 && self.direction_flips(|d| d.y) <= 2
    }

    /// Sign changes of one edge-direction component around the loop,
    /// skipping edges where that component is zero.
    fn direction_flips(&self, component: impl Fn(Vec2) -> FixedPoint) -> usize {
        let signs: SmallVec<[i64; 8]> = self
            .edges()
            .map(|(a, b)| component(b - a).signum().to_integer())
            .filter(|&s| s != 0)
            .collect();
        let m = signs.len();
        (0..m).filter(|&i| signs[i] != signs[(i + 1) % m]).count()
    }
}

impl Shape for Polygon {
    fn area(&self) -> FixedPoint {
        self.signed_area().abs()
    }

    fn bounds(&self) -> Rect {
        let mut iter = self.vertices.iter();
        let Some(&first) = iter.next() else {
            return Rect::default();
        };
        iter.fold(Rect::new(first, first), |acc, &p| Rect {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    fn contains_point(&self, point: Vec2) -> bool {
        self.contains(point)
    }

    fn name(&self) -> &str {
        "Polygon"
    }
}

// ============================================================================
// Segment Helpers
// ============================================================================

/// Sign of the turn `a -> b -> c`: 1 counter-clockwise, -1 clockwise, 0 collinear.
///
/// Evaluated on raw integers in i128, so tiny offsets are never rounded away.
fn orientation(a: Vec2, b: Vec2, c: Vec2) -> i64 {
    let ab_x = (b.x - a.x).raw() as i128;
    let ab_y = (b.y - a.y).raw() as i128;
    let ac_x = (c.x - a.x).raw() as i128;
    let ac_y = (c.y - a.y).raw() as i128;
    (ab_x * ac_y - ab_y * ac_x).signum() as i64
}

/// `p` lies within the bounding box of segment `a-b` (used for collinear cases).
fn within_segment_box(a: Vec2, b: Vec2, p: Vec2) -> bool {
    Rect::new(a, b).contains(p)
}

/// Whether segments `a1-a2` and `b1-b2` touch or cross.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == 0 && within_segment_box(a1, a2, b1))
        || (o2 == 0 && within_segment_box(a1, a2, b2))
        || (o3 == 0 && within_segment_box(b1, b2, a1))
        || (o4 == 0 && within_segment_box(b1, b2, a2))
}

/// Point on segment `a-b` closest to `p`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let t = match (p - a).dot(ab).divide(ab.length_squared()) {
        Ok(t) => t.clamp(FixedPoint::ZERO, FixedPoint::ONE),
        // Degenerate segment: both ends are the same point
        Err(_) => return a,
    };
    a + ab.scale(t)
}

/// Distance from `p` to segment `a-b`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> FixedPoint {
    p.distance(closest_point_on_segment(p, a, b))
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

    fn square() -> Polygon {
        Polygon::new([v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)])
    }

    #[test]
    fn test_area_and_winding() {
        let ccw = square();
        assert_eq!(ccw.signed_area(), fp(16.0));
        let cw = Polygon::new(ccw.vertices().iter().rev().copied());
        assert_eq!(cw.signed_area(), fp(-16.0));
        assert_eq!(cw.area(), fp(16.0));

        let triangle = Polygon::new([v(0.0, 0.0), v(3.0, 0.0), v(0.0, 3.0)]);
        assert_eq!(triangle.area(), fp(4.5));
    }

    #[test]
    fn test_centroid() {
        assert_eq!(square().centroid().unwrap(), v(2.0, 2.0));
        let triangle = Polygon::new([v(0.0, 0.0), v(3.0, 0.0), v(0.0, 3.0)]);
        assert_eq!(triangle.centroid().unwrap(), v(1.0, 1.0));

        let line = Polygon::new([v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)]);
        assert_eq!(line.centroid(), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_perimeter_and_bounds() {
        assert_eq!(square().perimeter(), fp(16.0));
        assert_eq!(square().bounds(), Rect::new(v(0.0, 0.0), v(4.0, 4.0)));
        assert_eq!(Polygon::default().bounds(), Rect::default());
        assert!(Polygon::default().is_empty());
    }

    #[test]
    fn test_contains() {
        let poly = square();
        assert!(poly.contains(v(2.0, 2.0)));
        assert!(poly.contains(v(4.0, 2.0)));
        assert!(poly.contains(v(0.0, 0.0)));
        assert!(!poly.contains(v(5.0, 2.0)));
        assert!(!poly.contains(v(-0.1, 2.0)));

        // Concave "L" shape
        let l_shape = Polygon::new([
            v(0.0, 0.0),
            v(4.0, 0.0),
            v(4.0, 1.0),
            v(1.0, 1.0),
            v(1.0, 4.0),
            v(0.0, 4.0),
        ]);
        assert!(l_shape.contains(v(0.5, 3.0)));
        assert!(l_shape.contains(v(3.0, 0.5)));
        assert!(!l_shape.contains(v(3.0, 3.0)));
        assert!(l_shape.contains_point(v(0.5, 0.5)));
    }

    #[test]
    fn test_contains_near_edge() {
        let poly = square();
        assert!(!poly.contains(v(4.0005, 2.0)));
        assert!(!poly.contains(v(4.000001, 2.0)));
        assert!(!poly.contains(v(2.0, -0.000001)));
        assert!(poly.contains(v(3.999999, 2.0)));
        assert!(poly.contains(v(4.0, 4.0)));

        let diagonal = Polygon::new([v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)]);
        assert!(diagonal.contains(v(2.0, 2.0)));
        assert!(!diagonal.contains(v(2.000001, 2.0)));
    }

    #[test]
    fn test_is_convex() {
        assert!(square().is_convex());
        let arrow = Polygon::new([v(0.0, 0.0), v(4.0, 2.0), v(0.0, 4.0), v(1.0, 2.0)]);
        assert!(!arrow.is_convex());
        let with_collinear = Polygon::new([v(0.0, 0.0), v(2.0, 0.0), v(4.0, 0.0), v(2.0, 3.0)]);
        assert!(with_collinear.is_convex());
    }

    #[test]
    fn test_star_is_not_convex() {
        let pentagram = Polygon::new([
            v(0.0, 10.0),
            v(6.0, -8.0),
            v(-10.0, 3.0),
            v(10.0, 3.0),
            v(-6.0, -8.0),
        ]);
        assert!(!pentagram.is_convex());

        let hexagon = Polygon::new((0..6).map(|k| {
            Vec2::from_angle(FixedPoint::TWO_PI.mul_int(k).div_int(6).unwrap()).scale(fp(10.0))
        }));
        assert!(hexagon.is_convex());
        let reversed = Polygon::new(hexagon.vertices().iter().rev().copied());
        assert!(reversed.is_convex());
    }

    #[test]
    fn test_segments_intersect() {
        assert!(segments_intersect(v(0.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0)));
        assert!(!segments_intersect(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)));
        // Touching at an endpoint
        assert!(segments_intersect(v(0.0, 0.0), v(1.0, 1.0), v(1.0, 1.0), v(2.0, 0.0)));
        // Collinear, overlapping and disjoint
        assert!(segments_intersect(v(0.0, 0.0), v(2.0, 0.0), v(1.0, 0.0), v(3.0, 0.0)));
        assert!(!segments_intersect(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)));
    }

    #[test]
    fn test_closest_point_on_segment() {
        let a = v(0.0, 0.0);
        let b = v(4.0, 0.0);
        assert_eq!(closest_point_on_segment(v(1.0, 3.0), a, b), v(1.0, 0.0));
        assert_eq!(closest_point_on_segment(v(-2.0, 1.0), a, b), a);
        assert_eq!(closest_point_on_segment(v(9.0, -1.0), a, b), b);
        assert_eq!(closest_point_on_segment(v(9.0, -1.0), a, a), a);
        assert_eq!(point_segment_distance(v(2.0, -3.0), a, b), fp(3.0));
    }
}
