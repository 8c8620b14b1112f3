// ============================================================================
// Transcendental Functions
// Square root, trigonometry, logarithm, exponential and power
// ============================================================================
//
// Every algorithm here runs on raw integers with a hard iteration cap and an
// explicit rounding rule (half away from zero, see `round_div`). No host
// floating-point function is ever consulted, so results are bit-identical
// across platforms and toolchains.

use super::constants::{FACTORIALS, SCALE, SIN_TABLE};
use super::errors::{NumericError, NumericResult};
use super::fixed_point::{round_div, saturate, FixedPoint};

/// Newton iterations allowed for `sqrt`.
const SQRT_MAX_ITERATIONS: usize = 20;

/// Newton iterations allowed for `asin`.
const ASIN_MAX_ITERATIONS: usize = 10;

/// Iteration stops once a step is this many raw units or fewer.
const CONVERGENCE_RAW: i64 = 1;

/// Highest odd power in the sine series.
const SIN_SERIES_MAX_POWER: usize = 11;

/// Odd terms summed by the `ln` series (powers 1, 3, ..., 19).
const LN_SERIES_TERMS: i128 = 10;

/// Terms summed by the `exp` series (including the leading 1).
const EXP_SERIES_TERMS: i64 = 20;

/// `tan` fails when `|cos(x)|` is below this many raw units.
const TAN_COS_THRESHOLD_RAW: i64 = 10;

/// ln(2) scaled by 10^15, for the `k·ln 2` term of range-reduced `ln`.
const LN_2_E15: i128 = 693_147_180_559_945;

/// e^n for n in 0..=29, raw. e^30 no longer fits.
const EXP_INTEGER_TABLE: [i64; 30] = [
    1_000_000,
    2_718_282,
    7_389_056,
    20_085_537,
    54_598_150,
    148_413_159,
    403_428_793,
    1_096_633_158,
    2_980_957_987,
    8_103_083_928,
    22_026_465_795,
    59_874_141_715,
    162_754_791_419,
    442_413_392_009,
    1_202_604_284_165,
    3_269_017_372_472,
    8_886_110_520_508,
    24_154_952_753_575,
    65_659_969_137_331,
    178_482_300_963_187,
    485_165_195_409_790,
    1_318_815_734_483_215,
    3_584_912_846_131_592,
    9_744_803_446_248_903,
    26_489_122_129_843_472,
    72_004_899_337_385_873,
    195_729_609_428_838_764,
    532_048_240_601_798_617,
    1_446_257_064_291_475_174,
    3_931_334_297_144_042_074,
];

impl FixedPoint {
    // ========================================================================
    // Square Root
    // ========================================================================

    /// Square root by Newton–Raphson: `x' = (x + a/x) / 2`.
    ///
    /// Starts from `a/2` when `a > 1`, else from 1. Runs at most 20 rounds
    /// and stops as soon as a round moves the estimate by at most one raw
    /// unit. Accuracy degrades for very large inputs (roughly above 10^9)
    /// because the cap is hit before convergence.
    ///
    /// # Errors
    /// Returns `NegativeSqrt` for negative input.
    pub fn sqrt(self) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::NegativeSqrt);
        }
        if self.is_zero() || self == Self::ONE {
            return Ok(self);
        }

        let mut estimate = if self > Self::ONE {
            self.halve()
        } else {
            Self::ONE
        };

        for _ in 0..SQRT_MAX_ITERATIONS {
            let next = estimate.add(self.divide(estimate)?).halve();
            let step = next.raw().abs_diff(estimate.raw());
            estimate = next;
            if step <= CONVERGENCE_RAW as u64 {
                return Ok(estimate);
            }
        }

        tracing::trace!(input = %self, result = %estimate, "sqrt reached iteration cap");
        Ok(estimate)
    }

    #[inline]
    fn halve(self) -> Self {
        Self::from_raw(saturate(round_div(self.raw() as i128, 2)))
    }

    // ========================================================================
    // Trigonometry
    // ========================================================================

    /// Reduce an angle into `(-π, π]`.
    ///
    /// Exact on raw integers: the same result as repeatedly adding or
    /// subtracting `TWO_PI`, in constant time.
    pub fn normalize_angle(self) -> Self {
        let two_pi = Self::TWO_PI.raw();
        let mut reduced = self.raw().rem_euclid(two_pi);
        if reduced > Self::PI.raw() {
            reduced -= two_pi;
        }
        Self::from_raw(reduced)
    }

    /// Sine.
    ///
    /// The angle is normalized, negative angles use `sin(-x) = -sin(x)` and
    /// angles past π/2 use `sin(π - x) = sin(x)`, leaving `[0, π/2]`. Landmark
    /// angles come from a table; everything else from the odd Taylor series
    /// up to `x¹¹/11!`.
    pub fn sin(self) -> Self {
        let angle = self.normalize_angle();
        if angle.is_negative() {
            Self::from_raw(-sin_first_half_turn(-angle.raw()))
        } else {
            Self::from_raw(sin_first_half_turn(angle.raw()))
        }
    }

    /// Cosine, via `cos(x) = sin(x + π/2)`.
    pub fn cos(self) -> Self {
        self.add(Self::HALF_PI).sin()
    }

    /// `(sin(x), cos(x))`
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Tangent, `sin(x) / cos(x)`.
    ///
    /// # Errors
    /// Returns `UndefinedTangent` when `|cos(x)|` is too small to divide by,
    /// which covers the asymptotes and their immediate neighborhood.
    pub fn tan(self) -> NumericResult<Self> {
        let (sin, cos) = self.sin_cos();
        if cos.abs().raw() < TAN_COS_THRESHOLD_RAW {
            return Err(NumericError::UndefinedTangent);
        }
        sin.divide(cos)
    }

    /// Arcsine in `[-π/2, π/2]`.
    ///
    /// Solves `sin(y) = x` by Newton's method from `y = x`, at most 10
    /// iterations, stopping once a step is at most one raw unit.
    ///
    /// # Errors
    /// Returns `DomainError` when `|x| > 1`.
    pub fn asin(self) -> NumericResult<Self> {
        if self.abs() > Self::ONE {
            return Err(NumericError::DomainError);
        }
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        if self == Self::ONE {
            return Ok(Self::HALF_PI);
        }
        if self == -Self::ONE {
            return Ok(-Self::HALF_PI);
        }

        let mut angle = self;
        for _ in 0..ASIN_MAX_ITERATIONS {
            let (sin, cos) = angle.sin_cos();
            if cos.is_zero() {
                break;
            }
            let step = sin.subtract(self).divide(cos)?;
            angle = angle.subtract(step).clamp(-Self::HALF_PI, Self::HALF_PI);
            if step.abs().raw() <= CONVERGENCE_RAW {
                return Ok(angle);
            }
        }

        tracing::trace!(input = %self, result = %angle, "asin reached iteration cap");
        Ok(angle)
    }

    /// Arccosine in `[0, π]`, via `π/2 - asin(x)`.
    ///
    /// # Errors
    /// Returns `DomainError` when `|x| > 1`.
    pub fn acos(self) -> NumericResult<Self> {
        Ok(Self::HALF_PI.subtract(self.asin()?))
    }

    /// Arctangent in `(-π/2, π/2)`, via `asin(x / sqrt(1 + x²))`.
    ///
    /// For `|x| > 1` the identity `atan(x) = ±π/2 - atan(1/x)` is applied
    /// first, so `asin` only sees ratios up to `1/√2` and stays clear of its
    /// steep region near ±1.
    pub fn atan(self) -> NumericResult<Self> {
        if self.abs() > Self::ONE {
            let inner = Self::ONE.divide(self)?.atan()?;
            let quarter_turn = if self.is_negative() {
                -Self::HALF_PI
            } else {
                Self::HALF_PI
            };
            return Ok(quarter_turn.subtract(inner));
        }

        let hypot = Self::ONE.add(self.multiply(self)).sqrt()?;
        self.divide(hypot)?.asin()
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the y coordinate),
    /// in `(-π, π]`.
    ///
    /// # Errors
    /// Returns `UndefinedAtan2` when both arguments are zero.
    pub fn atan2(self, x: Self) -> NumericResult<Self> {
        let y = self;
        if x.is_zero() {
            return if y.is_positive() {
                Ok(Self::HALF_PI)
            } else if y.is_negative() {
                Ok(-Self::HALF_PI)
            } else {
                Err(NumericError::UndefinedAtan2)
            };
        }

        let base = y.divide(x)?.atan()?;
        if x.is_positive() {
            Ok(base)
        } else if y.is_negative() {
            Ok(base.subtract(Self::PI))
        } else {
            Ok(base.add(Self::PI))
        }
    }

    /// Degrees to radians, `x · π / 180` with a single rounding.
    pub fn to_radians(self) -> Self {
        let num = self.raw() as i128 * Self::PI.raw() as i128;
        Self::from_raw(saturate(round_div(num, 180 * SCALE as i128)))
    }

    /// Radians to degrees, `x · 180 / π` with a single rounding.
    pub fn to_degrees(self) -> Self {
        let num = self.raw() as i128 * 180 * SCALE as i128;
        Self::from_raw(saturate(round_div(num, Self::PI.raw() as i128)))
    }

    // ========================================================================
    // Logarithm, Exponential, Power
    // ========================================================================

    /// Natural logarithm.
    ///
    /// Writes `x = m · 2^k` with `m` in `[1, 2)` and evaluates
    /// `k·ln 2 + 2·(r + r³/3 + ... + r¹⁹/19)` with `r = (m - 1)/(m + 1)`.
    /// The ratio is formed directly from `x` and `2^k`, so the reduction
    /// itself loses nothing.
    ///
    /// # Errors
    /// Returns `DomainError` for `x <= 0`.
    pub fn ln(self) -> NumericResult<Self> {
        if !self.is_positive() {
            return Err(NumericError::DomainError);
        }
        if self == Self::ONE {
            return Ok(Self::ZERO);
        }

        // Invariant after both loops: unit <= value < 2·unit
        let mut value = self.raw() as i128;
        let mut unit = SCALE as i128;
        let mut exponent: i128 = 0;
        while value >= 2 * unit {
            unit *= 2;
            exponent += 1;
        }
        while value < unit {
            value *= 2;
            exponent -= 1;
        }

        let ratio = Self::from_raw(saturate(round_div(
            (value - unit) * SCALE as i128,
            value + unit,
        )));
        let ratio_sq = ratio.multiply(ratio);

        let mut power = ratio;
        let mut series: i128 = 0;
        for i in 0..LN_SERIES_TERMS {
            series += round_div(power.raw() as i128, 2 * i + 1);
            power = power.multiply(ratio_sq);
        }

        let scaled_ln2 = round_div(exponent * LN_2_E15, 1_000_000_000);
        Ok(Self::from_raw(saturate(2 * series + scaled_ln2)))
    }

    /// Exponential function. Saturates at `MAX` for large inputs.
    ///
    /// Splits `x = n + f` with `n = floor(x)`; `e^n` comes from an exact
    /// table and `e^f` from the Taylor series `1 + f + f²/2! + ...` over 20
    /// terms, each built from the previous as `term · f / i`.
    pub fn exp(self) -> Self {
        let whole = self.floor().to_integer();
        let fraction = self.frac();
        let table_len = EXP_INTEGER_TABLE.len() as i64;

        let integer_part = if whole >= table_len {
            return Self::MAX;
        } else if whole >= 0 {
            Self::from_raw(EXP_INTEGER_TABLE[whole as usize])
        } else if whole > -table_len {
            let denom = EXP_INTEGER_TABLE[whole.unsigned_abs() as usize] as i128;
            Self::from_raw(saturate(round_div(SCALE as i128 * SCALE as i128, denom)))
        } else {
            return Self::ZERO;
        };

        let mut term = Self::ONE;
        let mut sum = Self::ONE;
        for i in 1..EXP_SERIES_TERMS {
            let next = round_div(term.multiply(fraction).raw() as i128, i as i128);
            term = Self::from_raw(saturate(next));
            sum = sum.add(term);
        }

        integer_part.multiply(sum)
    }

    /// `self` raised to `exponent`.
    ///
    /// Integer exponents use exponentiation by squaring (then a reciprocal
    /// for negative exponents); fractional exponents use
    /// `exp(ln(self) · exponent)`.
    ///
    /// # Errors
    /// - `DomainError` for a fractional exponent with `self <= 0`
    /// - `DivisionByZero` for zero raised to a negative integer
    pub fn pow(self, exponent: Self) -> NumericResult<Self> {
        if exponent.is_zero() {
            return Ok(Self::ONE);
        }
        if exponent == Self::ONE {
            return Ok(self);
        }
        if exponent.is_integer() {
            return self.pow_integer(exponent.to_integer());
        }
        Ok(self.ln()?.multiply(exponent).exp())
    }

    /// `self` raised to an integer power, by squaring.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for zero raised to a negative power.
    pub fn powi(self, exponent: i32) -> NumericResult<Self> {
        self.pow_integer(exponent as i64)
    }

    fn pow_integer(self, exponent: i64) -> NumericResult<Self> {
        let mut remaining = exponent.unsigned_abs();
        let mut base = self;
        let mut result = Self::ONE;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.multiply(base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.multiply(base);
            }
        }

        if exponent < 0 {
            Self::ONE.divide(result)
        } else {
            Ok(result)
        }
    }
}

/// Sine of a raw angle in `[0, π]`, returned raw.
fn sin_first_half_turn(angle: i64) -> i64 {
    let folded = if angle > FixedPoint::HALF_PI.raw() {
        FixedPoint::PI.raw() - angle
    } else {
        angle
    };

    if let Some(&(_, exact)) = SIN_TABLE.iter().find(|(landmark, _)| *landmark == folded) {
        return exact;
    }

    let x = FixedPoint::from_raw(folded);
    let x_sq = x.multiply(x);
    let mut power = x;
    let mut sum = x.raw() as i128;
    let mut sign: i128 = -1;
    for n in (3..=SIN_SERIES_MAX_POWER).step_by(2) {
        power = power.multiply(x_sq);
        sum += sign * round_div(power.raw() as i128, FACTORIALS[n] as i128);
        sign = -sign;
    }

    saturate(sum).clamp(0, SCALE)
}
