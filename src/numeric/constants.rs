// ============================================================================
// Numeric Constants
// Compile-time constant values and lookup tables for the fixed-point core
// ============================================================================
//
// Everything here is `const` data: baked into the binary, never mutated and
// safe to read from any thread without synchronization.

use super::fixed_point::FixedPoint;

/// Number of fractional decimal digits.
pub const DECIMALS: u32 = 6;

/// Scale factor between logical values and raw integers (10^DECIMALS).
pub const SCALE: i64 = 1_000_000;

/// Half scale, used by round-half-away-from-zero.
pub(crate) const HALF_SCALE: i64 = SCALE / 2;

impl FixedPoint {
    /// Zero value
    pub const ZERO: Self = Self::from_raw(0);

    /// One (1.0)
    pub const ONE: Self = Self::from_raw(SCALE);

    /// Two (2.0)
    pub const TWO: Self = Self::from_raw(2 * SCALE);

    /// One half (0.5)
    pub const HALF: Self = Self::from_raw(HALF_SCALE);

    /// Smallest positive increment (0.000001)
    pub const EPSILON: Self = Self::from_raw(1);

    /// Maximum representable value
    pub const MAX: Self = Self::from_raw(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self::from_raw(i64::MIN);

    /// π (3.141593)
    pub const PI: Self = Self::from_raw(3_141_593);

    /// Euler's number e (2.718282)
    pub const E: Self = Self::from_raw(2_718_282);

    /// π/2 (1.570796)
    pub const HALF_PI: Self = Self::from_raw(1_570_796);

    /// π/4 (0.785398)
    pub const QUARTER_PI: Self = Self::from_raw(785_398);

    /// 2π (6.283185)
    pub const TWO_PI: Self = Self::from_raw(6_283_185);

    /// Degrees to radians factor π/180 (0.017453)
    pub const DEG_TO_RAD: Self = Self::from_raw(17_453);

    /// Radians to degrees factor 180/π (57.295780)
    pub const RAD_TO_DEG: Self = Self::from_raw(57_295_780);

    /// Natural log of 2 (0.693147)
    pub const LN_2: Self = Self::from_raw(693_147);
}

/// Compute n! at compile time
const fn factorial(n: usize) -> i64 {
    let mut result: i64 = 1;
    let mut i = 2;
    while i <= n {
        result *= i as i64;
        i += 1;
    }
    result
}

const fn factorial_table() -> [i64; 21] {
    let mut table = [0i64; 21];
    let mut i = 0;
    while i < 21 {
        table[i] = factorial(i);
        i += 1;
    }
    table
}

/// n! for n in 0..=20 (20! is the largest factorial that fits in i64).
pub(crate) const FACTORIALS: [i64; 21] = factorial_table();

/// Exact sine values at landmark angles, as (angle raw, sine raw).
///
/// Consulted after range reduction so the series never runs at these points.
pub(crate) const SIN_TABLE: [(i64, i64); 4] = [
    (0, 0),
    (FixedPoint::QUARTER_PI.raw(), 707_107),
    (FixedPoint::HALF_PI.raw(), SCALE),
    (FixedPoint::PI.raw(), 0),
];
