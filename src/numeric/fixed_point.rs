// ============================================================================
// Fixed-Point Number
// Deterministic scaled-integer arithmetic with six fractional digits
// ============================================================================

use super::constants::{DECIMALS, SCALE};
use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Deterministic fixed-point number.
///
/// Internally stores `value × 10^6` as an i64. Every operation is integer
/// arithmetic on that raw value, so identical inputs give bit-identical
/// outputs on every platform. The only floating-point paths are the
/// boundary conversions [`FixedPoint::from_f64`] and [`FixedPoint::to_f64`].
///
/// # Value Range
/// - Minimum: -9,223,372,036,854.775808
/// - Maximum: +9,223,372,036,854.775807
/// - Precision: 0.000001
///
/// # Overflow
/// The plain operations (`add`, `multiply`, operators, ...) widen to i128
/// where needed and saturate at the i64 bounds. The `checked_*` family
/// reports `Overflow`/`Underflow` instead.
///
/// # Example
/// ```
/// use lockstep_math::numeric::FixedPoint;
///
/// let speed: FixedPoint = "2.5".parse().unwrap();
/// let time = FixedPoint::from_integer(4).unwrap();
/// assert_eq!(speed.multiply(time), FixedPoint::from_integer(10).unwrap());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct FixedPoint(i64);

// ============================================================================
// Raw Integer Helpers
// ============================================================================

/// Integer division rounding half away from zero. `den` must be non-zero.
#[inline]
pub(crate) fn round_div(num: i128, den: i128) -> i128 {
    let quotient = num / den;
    let remainder = num % den;
    if 2 * remainder.abs() >= den.abs() {
        if (num < 0) != (den < 0) {
            quotient - 1
        } else {
            quotient + 1
        }
    } else {
        quotient
    }
}

/// Clamp an i128 intermediate into the i64 range.
#[inline]
pub(crate) fn saturate(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

/// Narrow an i128 intermediate, reporting which bound was crossed.
#[inline]
fn narrow(value: i128) -> NumericResult<i64> {
    if value > i64::MAX as i128 {
        Err(NumericError::Overflow)
    } else if value < i64::MIN as i128 {
        Err(NumericError::Underflow)
    } else {
        Ok(value as i64)
    }
}

#[inline]
fn mul_raw(a: i64, b: i64) -> i128 {
    round_div(a as i128 * b as i128, SCALE as i128)
}

#[inline]
fn div_raw(a: i64, b: i64) -> i128 {
    round_div(a as i128 * SCALE as i128, b as i128)
}

impl FixedPoint {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// No scaling or rounding is applied. This is the extension point for
    /// building higher-level types without floating-point round-trips.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a small integer. Infallible because every i32 fits.
    #[inline]
    pub const fn from_i32(value: i32) -> Self {
        Self(value as i64 * SCALE)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value.checked_mul(SCALE).map(Self).ok_or(if value < 0 {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })
    }

    /// Create from a floating-point value: `raw = round(v × SCALE)`.
    ///
    /// Intended for loading data and literals, not for simulation math.
    ///
    /// # Errors
    /// - `NonFinite` for NaN or infinity
    /// - `Overflow`/`Underflow` when the scaled value leaves the i64 range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        let scaled = (value * SCALE as f64).round();
        if scaled >= i64::MAX as f64 {
            Err(NumericError::Overflow)
        } else if scaled < i64::MIN as f64 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(scaled as i64))
        }
    }

    /// Convert from rust_decimal::Decimal, rounding half away from zero to
    /// six fractional digits.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value is too large to represent.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let out_of_range = if d.is_sign_negative() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        };
        let rounded = d.round_dp_with_strategy(DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::from(SCALE))
            .and_then(|scaled| scaled.to_i64())
            .map(Self)
            .ok_or(out_of_range)
    }

    // ========================================================================
    // Accessors & Conversion
    // ========================================================================

    /// Get the raw internal value (scaled by 10^6).
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Convert to f64. Output and debugging only.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Convert to rust_decimal::Decimal (exact).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, DECIMALS)
    }

    /// Integer part, truncated toward zero.
    #[inline]
    pub const fn to_integer(self) -> i64 {
        self.0 / SCALE
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// True when there is no fractional part.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.0 % SCALE == 0
    }

    /// -1, 0 or 1 as a fixed-point value.
    #[inline]
    pub const fn signum(self) -> Self {
        Self::from_i32(self.0.signum() as i32)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Addition, saturating at the representable bounds.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtraction, saturating at the representable bounds.
    #[inline]
    pub fn subtract(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Multiplication: `round(a.raw × b.raw / SCALE)`.
    ///
    /// The product is formed in i128 and divided once, with a single
    /// rounding at the end. Saturates at the representable bounds.
    #[inline]
    pub fn multiply(self, rhs: Self) -> Self {
        Self(saturate(mul_raw(self.0, rhs.0)))
    }

    /// Division: `round(a.raw × SCALE / b.raw)`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero.
    #[inline]
    pub fn divide(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self(saturate(div_raw(self.0, rhs.0))))
    }

    /// Multiply by an integer (no rescaling needed).
    #[inline]
    pub fn mul_int(self, rhs: i64) -> Self {
        Self(self.0.saturating_mul(rhs))
    }

    /// Divide by an integer, rounding half away from zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero.
    #[inline]
    pub fn div_int(self, rhs: i64) -> NumericResult<Self> {
        if rhs == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self(saturate(round_div(self.0 as i128, rhs as i128))))
    }

    /// Negation (saturating: `-MIN` is `MAX`).
    ///
    /// `MIN` is therefore the one value where `x + (-x)` is not zero: it
    /// gives `-EPSILON`. Every other raw value has an exact inverse.
    #[inline]
    pub fn negate(self) -> Self {
        Self(self.0.saturating_neg())
    }

    /// Absolute value (saturating: `abs(MIN)` is `MAX`).
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// True mathematical modulo: `a - b × floor(a / b)`.
    ///
    /// The result carries the sign of the divisor, so `-7 mod 3 = 2` and
    /// `7 mod -3 = -2`. Computed exactly on the raw integers.
    ///
    /// # Errors
    /// Returns `ModuloByZero` when `rhs` is zero.
    pub fn modulo(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::ModuloByZero);
        }
        let mut remainder = self.0.wrapping_rem(rhs.0);
        if remainder != 0 && (remainder < 0) != (rhs.0 < 0) {
            remainder += rhs.0;
        }
        Ok(Self(remainder))
    }

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked multiplication, same rounding as [`FixedPoint::multiply`].
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        narrow(mul_raw(self.0, rhs.0)).map(Self)
    }

    /// Checked division, same rounding as [`FixedPoint::divide`].
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        narrow(div_raw(self.0, rhs.0)).map(Self)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Largest integer value not greater than `self`.
    #[inline]
    pub fn floor(self) -> Self {
        Self(self.0.div_euclid(SCALE).saturating_mul(SCALE))
    }

    /// Smallest integer value not less than `self`.
    #[inline]
    pub fn ceil(self) -> Self {
        let floored = self.0.div_euclid(SCALE);
        if self.0.rem_euclid(SCALE) == 0 {
            self
        } else {
            Self((floored + 1).saturating_mul(SCALE))
        }
    }

    /// Nearest integer value, ties away from zero.
    #[inline]
    pub fn round(self) -> Self {
        let units = round_div(self.0 as i128, SCALE as i128);
        Self(saturate(units * SCALE as i128))
    }

    /// Integer part as a fixed-point value, truncated toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        Self((self.0 / SCALE) * SCALE)
    }

    /// Fractional part `x - floor(x)`, always in `[0, 1)`.
    #[inline]
    pub fn frac(self) -> Self {
        Self(self.0.rem_euclid(SCALE))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Restrict `self` to `[lo, hi]`. Never fails.
    ///
    /// `lo > hi` is not validated: the result is then always `hi`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// `|self - other| <= tolerance`.
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: Self) -> bool {
        self.subtract(other).abs() <= tolerance
    }

    // ========================================================================
    // In-Place Operations
    // ========================================================================
    //
    // Mutating counterparts of the value-returning operations. Each returns
    // the receiver so calls can be chained in hot loops.

    #[inline]
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        self.0 = self.0.saturating_add(rhs.0);
        self
    }

    #[inline]
    pub fn subtract_in_place(&mut self, rhs: Self) -> &mut Self {
        self.0 = self.0.saturating_sub(rhs.0);
        self
    }

    #[inline]
    pub fn multiply_in_place(&mut self, rhs: Self) -> &mut Self {
        self.0 = saturate(mul_raw(self.0, rhs.0));
        self
    }

    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero; the receiver is untouched.
    #[inline]
    pub fn divide_in_place(&mut self, rhs: Self) -> NumericResult<&mut Self> {
        *self = self.divide(rhs)?;
        Ok(self)
    }

    #[inline]
    pub fn negate_in_place(&mut self) -> &mut Self {
        self.0 = self.0.saturating_neg();
        self
    }

    #[inline]
    pub fn abs_in_place(&mut self) -> &mut Self {
        self.0 = self.0.saturating_abs();
        self
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Neg for FixedPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for FixedPoint {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for FixedPoint {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl AddAssign for FixedPoint {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(rhs);
    }
}

impl SubAssign for FixedPoint {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(rhs);
    }
}

impl MulAssign for FixedPoint {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_in_place(rhs);
    }
}

impl From<i32> for FixedPoint {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint({}, raw={})", self, self.0)
    }
}

impl fmt::Display for FixedPoint {
    /// Exact decimal rendering with trailing zeros trimmed ("1.5", "-0.25", "2").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let int_part = magnitude / SCALE as u64;
        let frac_part = magnitude % SCALE as u64;

        if frac_part == 0 {
            return write!(f, "{}{}", sign, int_part);
        }

        let digits = format!("{:0>width$}", frac_part, width = DECIMALS as usize);
        write!(f, "{}{}.{}", sign, int_part, digits.trim_end_matches('0'))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for FixedPoint {
    type Err = NumericError;

    /// Parse a decimal string, rounding half away from zero to six digits.
    ///
    /// Accepts plain ("-12.5") and scientific ("1.5e-3") notation. Parsing
    /// is exact, so the result does not depend on host float behavior.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::ParseError);
        }

        let decimal = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| NumericError::ParseError)?;

        Self::from_decimal(decimal)
    }
}

impl TryFrom<f64> for FixedPoint {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
