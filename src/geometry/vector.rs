// ============================================================================
// 2D Vector
// Fixed-point vector math for positions, velocities and directions
// ============================================================================

use crate::numeric::{FixedPoint, NumericError, NumericResult};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D vector with fixed-point components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: FixedPoint,
    pub y: FixedPoint,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO);
    pub const UNIT_X: Self = Self::new(FixedPoint::ONE, FixedPoint::ZERO);
    pub const UNIT_Y: Self = Self::new(FixedPoint::ZERO, FixedPoint::ONE);

    #[inline]
    pub const fn new(x: FixedPoint, y: FixedPoint) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn from_i32(x: i32, y: i32) -> Self {
        Self::new(FixedPoint::from_i32(x), FixedPoint::from_i32(y))
    }

    /// Unit vector pointing at `angle` radians from the +x axis.
    pub fn from_angle(angle: FixedPoint) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn scale(self, factor: FixedPoint) -> Self {
        Self::new(self.x.multiply(factor), self.y.multiply(factor))
    }

    #[inline]
    pub fn dot(self, other: Self) -> FixedPoint {
        self.x.multiply(other.x).add(self.y.multiply(other.y))
    }

    /// z component of the 3D cross product; positive when `other` is
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> FixedPoint {
        self.x.multiply(other.y).subtract(self.y.multiply(other.x))
    }

    #[inline]
    pub fn length_squared(self) -> FixedPoint {
        self.dot(self)
    }

    pub fn length(self) -> FixedPoint {
        // length_squared is a sum of squares, never negative
        self.length_squared().sqrt().unwrap_or(FixedPoint::ZERO)
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> FixedPoint {
        (other - self).length_squared()
    }

    pub fn distance(self, other: Self) -> FixedPoint {
        (other - self).length()
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for the zero vector.
    pub fn try_normalize(self) -> NumericResult<Self> {
        let length = self.length();
        if length.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::new(self.x.divide(length)?, self.y.divide(length)?))
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: FixedPoint) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x.multiply(cos).subtract(self.y.multiply(sin)),
            self.x.multiply(sin).add(self.y.multiply(cos)),
        )
    }

    /// Angle from the +x axis in `(-π, π]`; zero for the zero vector.
    pub fn angle(self) -> FixedPoint {
        self.y.atan2(self.x).unwrap_or(FixedPoint::ZERO)
    }

    /// Linear interpolation, `self + (other - self) · t`.
    pub fn lerp(self, other: Self, t: FixedPoint) -> Self {
        self + (other - self).scale(t)
    }

    /// Rotated 90° counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(self.y.negate(), self.x)
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Shorten to `max_length` if longer; direction is kept.
    pub fn clamp_length(self, max_length: FixedPoint) -> Self {
        if self.length_squared() <= max_length.multiply(max_length) {
            self
        } else {
            self.normalize().scale(max_length)
        }
    }

    #[inline]
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        self.x.add_in_place(rhs.x);
        self.y.add_in_place(rhs.y);
        self
    }

    #[inline]
    pub fn scale_in_place(&mut self, factor: FixedPoint) -> &mut Self {
        self.x.multiply_in_place(factor);
        self.y.multiply_in_place(factor);
        self
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<FixedPoint> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: FixedPoint) -> Self::Output {
        self.scale(rhs)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(rhs);
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
