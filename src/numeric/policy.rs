// ============================================================================
// Scale Policies
// Compile-time choice of how binary operators reconcile operand scales
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// Decides the scale at which two operands are combined.
///
/// A policy is a zero-sized marker chosen through the type parameter of
/// [`FixedDecimal`](super::FixedDecimal), so one call site can never mix
/// both behaviours.
pub trait ScalePolicy: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Short name used in `Debug` output.
    const NAME: &'static str;

    /// Scale at which add, subtract and compare operate.
    fn common_scale(lhs: u32, rhs: u32) -> NumericResult<u32>;

    /// Scale of a product. The exact product lives at `lhs + rhs` and is
    /// rounded down to this scale when it is smaller.
    fn product_scale(lhs: u32, rhs: u32) -> NumericResult<u32>;
}

/// Auto-promote policy.
///
/// Add, subtract and compare widen both operands to the larger scale, which
/// never rounds and never fails. Multiplication keeps the combined scale
/// `lhs + rhs`, so no precision is dropped until the caller rescales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AutoPromote;

impl ScalePolicy for AutoPromote {
    const NAME: &'static str = "auto";

    #[inline]
    fn common_scale(lhs: u32, rhs: u32) -> NumericResult<u32> {
        Ok(lhs.max(rhs))
    }

    #[inline]
    fn product_scale(lhs: u32, rhs: u32) -> NumericResult<u32> {
        lhs.checked_add(rhs).ok_or(NumericError::Overflow)
    }
}

/// Strict-match policy.
///
/// Operands must already share a scale; anything else is `ScaleMismatch`.
/// Products are rounded back to that shared scale so chained operations keep
/// a stable output scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrictMatch;

impl ScalePolicy for StrictMatch {
    const NAME: &'static str = "strict";

    #[inline]
    fn common_scale(lhs: u32, rhs: u32) -> NumericResult<u32> {
        if lhs == rhs {
            Ok(lhs)
        } else {
            Err(NumericError::ScaleMismatch)
        }
    }

    #[inline]
    fn product_scale(lhs: u32, rhs: u32) -> NumericResult<u32> {
        Self::common_scale(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_promote_scales() {
        assert_eq!(AutoPromote::common_scale(2, 5), Ok(5));
        assert_eq!(AutoPromote::common_scale(7, 0), Ok(7));
        assert_eq!(AutoPromote::product_scale(2, 5), Ok(7));
        assert_eq!(
            AutoPromote::product_scale(u32::MAX, 1),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_strict_match_scales() {
        assert_eq!(StrictMatch::common_scale(18, 18), Ok(18));
        assert_eq!(
            StrictMatch::common_scale(18, 6),
            Err(NumericError::ScaleMismatch)
        );
        assert_eq!(StrictMatch::product_scale(2, 2), Ok(2));
        assert_eq!(
            StrictMatch::product_scale(2, 3),
            Err(NumericError::ScaleMismatch)
        );
    }
}
