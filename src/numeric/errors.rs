// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic and transcendental functions
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point operations.
///
/// Every variant is a terminal failure for the call that produced it. Nothing
/// in the numeric core retries or recovers silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Attempted modulo by zero
    ModuloByZero,
    /// Square root of a negative value
    NegativeSqrt,
    /// Argument outside the function's domain (asin/acos, ln, fractional pow)
    DomainError,
    /// Tangent evaluated at (or too close to) an odd multiple of π/2
    UndefinedTangent,
    /// atan2 with both arguments zero
    UndefinedAtan2,
    /// Input string is not a valid decimal
    ParseError,
    /// Result exceeded i64::MAX
    Overflow,
    /// Result below i64::MIN
    Underflow,
    /// Floating-point input was NaN or infinite
    NonFinite,
    /// Configuration value rejected by validation
    InvalidConfig,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ModuloByZero => write!(f, "modulo by zero"),
            NumericError::NegativeSqrt => {
                write!(f, "square root of a negative value")
            },
            NumericError::DomainError => {
                write!(f, "domain error: argument outside the function's domain")
            },
            NumericError::UndefinedTangent => {
                write!(f, "tangent undefined at odd multiples of pi/2")
            },
            NumericError::UndefinedAtan2 => write!(f, "atan2 undefined for (0, 0)"),
            NumericError::ParseError => write!(f, "parse error: not a valid decimal"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::NonFinite => write!(f, "non-finite floating-point input"),
            NumericError::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
