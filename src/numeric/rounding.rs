// ============================================================================
// Rounding
// The single rescale primitive shared by every operator
// ============================================================================

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Compute 10^exp as an arbitrary-precision integer.
#[inline]
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// Integer division rounding half away from zero.
///
/// The quotient is truncated toward zero first; the exact remainder then
/// decides whether one unit is added away from zero (`|r| * 2 >= |d|`).
/// `denominator` must be non-zero.
pub(crate) fn div_round_half_away(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }

    let twice_remainder: BigInt = remainder.abs() << 1u32;
    if twice_remainder < denominator.abs() {
        return quotient;
    }

    if numerator.is_negative() != denominator.is_negative() {
        quotient - BigInt::one()
    } else {
        quotient + BigInt::one()
    }
}

/// Integer division truncating toward zero.
#[inline]
pub(crate) fn div_truncate(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    numerator / denominator
}

/// Express `magnitude` (at scale `from`) at scale `to`.
///
/// Widening multiplies and is exact. Narrowing rounds half away from zero.
pub(crate) fn rescale_magnitude(magnitude: &BigInt, from: u32, to: u32) -> BigInt {
    match to.cmp(&from) {
        std::cmp::Ordering::Equal => magnitude.clone(),
        std::cmp::Ordering::Greater => magnitude * pow10(to - from),
        std::cmp::Ordering::Less => div_round_half_away(magnitude, &pow10(from - to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), big(1));
        assert_eq!(pow10(3), big(1000));
        assert_eq!(pow10(18), big(1_000_000_000_000_000_000));
    }

    #[test]
    fn test_round_half_away_positive() {
        assert_eq!(div_round_half_away(&big(5), &big(2)), big(3));
        assert_eq!(div_round_half_away(&big(7), &big(3)), big(2));
        assert_eq!(div_round_half_away(&big(8), &big(3)), big(3));
        assert_eq!(div_round_half_away(&big(6), &big(3)), big(2));
    }

    #[test]
    fn test_round_half_away_negative() {
        assert_eq!(div_round_half_away(&big(-5), &big(2)), big(-3));
        assert_eq!(div_round_half_away(&big(5), &big(-2)), big(-3));
        assert_eq!(div_round_half_away(&big(-5), &big(-2)), big(3));
        assert_eq!(div_round_half_away(&big(-7), &big(3)), big(-2));
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(div_truncate(&big(19), &big(10)), big(1));
        assert_eq!(div_truncate(&big(-19), &big(10)), big(-1));
    }

    #[test]
    fn test_rescale_widen_is_exact() {
        assert_eq!(rescale_magnitude(&big(12), 1, 3), big(1200));
        assert_eq!(rescale_magnitude(&big(-12), 0, 2), big(-1200));
    }

    #[test]
    fn test_rescale_narrow_rounds() {
        // 1.239 -> 1.24
        assert_eq!(rescale_magnitude(&big(1239), 3, 2), big(124));
        // 1.234 -> 1.23
        assert_eq!(rescale_magnitude(&big(1234), 3, 2), big(123));
        // 1.235 -> 1.24, -1.235 -> -1.24
        assert_eq!(rescale_magnitude(&big(1235), 3, 2), big(124));
        assert_eq!(rescale_magnitude(&big(-1235), 3, 2), big(-124));
        // 0.0004 -> 0.000
        assert_eq!(rescale_magnitude(&big(4), 4, 3), big(0));
    }

    #[test]
    fn test_rescale_same_scale() {
        assert_eq!(rescale_magnitude(&big(42), 5, 5), big(42));
    }
}
