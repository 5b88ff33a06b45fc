// ============================================================================
// Quote Errors
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised while building a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The quote configuration failed validation
    InvalidConfig(String),
    /// The underlying decimal arithmetic failed
    Numeric(NumericError),
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::InvalidConfig(reason) => write!(f, "invalid quote config: {}", reason),
            QuoteError::Numeric(err) => write!(f, "quote arithmetic failed: {}", err),
        }
    }
}

impl std::error::Error for QuoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuoteError::InvalidConfig(_) => None,
            QuoteError::Numeric(err) => Some(err),
        }
    }
}

impl From<NumericError> for QuoteError {
    fn from(err: NumericError) -> Self {
        QuoteError::Numeric(err)
    }
}

/// Result type alias for quote calculations
pub type QuoteResult<T> = Result<T, QuoteError>;
