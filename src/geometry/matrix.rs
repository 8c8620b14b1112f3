// ============================================================================
// 2D Affine Matrix
// 3x3 row-major matrix for translation, rotation and scale in the plane
// ============================================================================

use super::vector::Vec2;
use crate::numeric::{FixedPoint, NumericError, NumericResult};
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major 3x3 matrix acting on homogeneous 2D coordinates `[x, y, 1]`.
///
/// Composition follows the usual convention: `a * b` applies `b` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat3 {
    pub rows: [[FixedPoint; 3]; 3],
}

const O: FixedPoint = FixedPoint::ZERO;
const I: FixedPoint = FixedPoint::ONE;

impl Mat3 {
    pub const IDENTITY: Self = Self::from_rows([[I, O, O], [O, I, O], [O, O, I]]);

    #[inline]
    pub const fn from_rows(rows: [[FixedPoint; 3]; 3]) -> Self {
        Self { rows }
    }

    pub fn translation(offset: Vec2) -> Self {
        Self::from_rows([[I, O, offset.x], [O, I, offset.y], [O, O, I]])
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: FixedPoint) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([[cos, -sin, O], [sin, cos, O], [O, O, I]])
    }

    pub fn scale(factors: Vec2) -> Self {
        Self::from_rows([[factors.x, O, O], [O, factors.y, O], [O, O, I]])
    }

    /// Entry at `row`, `col`, or `None` when either index is past 2.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<FixedPoint> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Matrix product `self × rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[O; 3]; 3];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                let mut sum = O;
                for k in 0..3 {
                    sum.add_in_place(self.rows[r][k].multiply(rhs.rows[k][c]));
                }
                *cell = sum;
            }
        }
        Self::from_rows(out)
    }

    /// Apply to a point (translation included).
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let m = &self.rows;
        Vec2::new(
            m[0][0] * point.x + m[0][1] * point.y + m[0][2],
            m[1][0] * point.x + m[1][1] * point.y + m[1][2],
        )
    }

    /// Apply to a direction (translation ignored).
    pub fn transform_vector(&self, vector: Vec2) -> Vec2 {
        let m = &self.rows;
        Vec2::new(
            m[0][0] * vector.x + m[0][1] * vector.y,
            m[1][0] * vector.x + m[1][1] * vector.y,
        )
    }

    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn determinant(&self) -> FixedPoint {
        let m = &self.rows;
        m[0][0] * self.minor(0, 0) - m[0][1] * self.minor(0, 1) + m[0][2] * self.minor(0, 2)
    }

    /// Inverse via the adjugate.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the matrix is singular.
    pub fn inverse(&self) -> NumericResult<Self> {
        let det = self.determinant();
        if det.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let mut out = [[O; 3]; 3];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                // adjugate is the transposed cofactor matrix
                let minor = self.minor(c, r);
                let cofactor = if (r + c) % 2 == 0 { minor } else { -minor };
                *cell = cofactor.divide(det)?;
            }
        }
        Ok(Self::from_rows(out))
    }

    /// Determinant of the 2x2 matrix left after removing `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> FixedPoint {
        let mut cells = [O; 4];
        let mut n = 0;
        for r in (0..3).filter(|&r| r != row) {
            for c in (0..3).filter(|&c| c != col) {
                cells[n] = self.rows[r][c];
                n += 1;
            }
        }
        cells[0] * cells[3] - cells[1] * cells[2]
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec2> for Mat3 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        self.transform_point(rhs)
    }
}
