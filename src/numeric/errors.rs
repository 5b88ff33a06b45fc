// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision fixed-point operations
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing, combining or converting
/// fixed-point decimals.
///
/// All variants are local and recoverable by the caller. `MalformedInput` and
/// `InvalidScale` usually come from user input and deserve a validation
/// message; `DivisionByZero` and `ScaleMismatch` point at a call site that
/// should have checked its operands first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Negative scale passed to construction, rescale, division or formatting
    InvalidScale,
    /// Input string is not an optionally-signed decimal literal
    MalformedInput,
    /// Attempted division by a zero-valued operand
    DivisionByZero,
    /// Operands carry different scales under the strict-match policy
    ScaleMismatch,
    /// Value does not fit the bounded target representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidScale => write!(f, "invalid scale: must not be negative"),
            NumericError::MalformedInput => {
                write!(f, "malformed input: expected an optionally signed decimal")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ScaleMismatch => write!(f, "scale mismatch between operands"),
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
