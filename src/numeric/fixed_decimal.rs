// ============================================================================
// Fixed-Point Decimal
// Arbitrary-precision fixed-point arithmetic with a compile-time scale policy
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::policy::{AutoPromote, ScalePolicy, StrictMatch};
use super::rounding::{div_round_half_away, div_truncate, pow10, rescale_magnitude};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Fixed-point decimal backed by an arbitrary-precision integer.
///
/// Stores `magnitude` and `scale`; the denoted value is
/// `magnitude / 10^scale`. Distinct pairs may denote the same value
/// (`(120, 2)` and `(12, 1)` are both `1.2`), so equality and ordering always
/// rescale before comparing.
///
/// # Type Parameter
/// - `P`: the [`ScalePolicy`] used by add, subtract, multiply and compare.
///   Defaults to [`AutoPromote`].
///
/// # Rounding
/// Every narrowing rescale rounds half away from zero. The one exception is
/// [`FixedDecimal::parse`], which truncates excess input digits.
///
/// # Example
/// ```
/// use exact_decimal::numeric::Amount;
///
/// let a = Amount::parse("100.5", 2)?;
/// let b = Amount::parse("0.250", 2)?;
/// assert_eq!((a + b).to_string(), "100.75");
///
/// let third = Amount::from_raw(1, 0)?.checked_div(&Amount::from_raw(3, 0)?, 4)?;
/// assert_eq!(third.to_string(), "0.3333");
/// # Ok::<(), exact_decimal::numeric::NumericError>(())
/// ```
#[derive(Clone)]
pub struct FixedDecimal<P: ScalePolicy = AutoPromote> {
    magnitude: BigInt,
    scale: u32,
    policy: PhantomData<P>,
}

/// Decimal using the auto-promote policy.
pub type Amount = FixedDecimal<AutoPromote>;

/// Decimal using the strict-match policy.
pub type StrictAmount = FixedDecimal<StrictMatch>;

/// Validate a caller-supplied scale.
#[inline]
fn checked_scale(scale: i32) -> NumericResult<u32> {
    u32::try_from(scale).map_err(|_| NumericError::InvalidScale)
}

impl<P: ScalePolicy> FixedDecimal<P> {
    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    fn from_parts(magnitude: BigInt, scale: u32) -> Self {
        Self {
            magnitude,
            scale,
            policy: PhantomData,
        }
    }

    /// Wrap a raw integer amount at a known scale.
    ///
    /// This is how an on-chain balance with `decimals` places is brought in.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `scale` is negative.
    pub fn from_raw(magnitude: impl Into<BigInt>, scale: i32) -> NumericResult<Self> {
        Ok(Self::from_parts(magnitude.into(), checked_scale(scale)?))
    }

    /// Create a whole number at scale 0.
    pub fn from_integer(value: i64) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }

    /// Zero at scale 0.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// 100 at scale 0, for percentage maths.
    pub fn one_hundred() -> Self {
        Self::from_integer(100)
    }

    /// 10,000 at scale 0, for basis-point maths.
    pub fn ten_thousand() -> Self {
        Self::from_integer(10_000)
    }

    /// Parse a decimal string at the requested scale.
    ///
    /// Accepts an optional sign, integer digits and an optional `.` followed
    /// by fractional digits. Fractional digits beyond `scale` are
    /// **truncated**, not rounded: `parse("1.239", 2)` is `1.23`. This is
    /// deliberately different from [`FixedDecimal::rescale`], which rounds.
    ///
    /// # Errors
    /// - `InvalidScale` if `scale` is negative
    /// - `MalformedInput` for empty strings, letters, whitespace or multiple
    ///   decimal points
    pub fn parse(text: &str, scale: i32) -> NumericResult<Self> {
        let scale = checked_scale(scale)?;
        let literal = Literal::split(text)?;
        let kept = &literal.fraction[..literal.fraction.len().min(scale as usize)];
        Ok(Self::from_parts(literal.magnitude(kept, scale)?, scale))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The integer numerator.
    #[inline]
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    /// Number of implied decimal places.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    /// Absolute value at the same scale.
    pub fn abs(&self) -> Self {
        Self::from_parts(self.magnitude.abs(), self.scale)
    }

    /// Reinterpret the value under another scale policy.
    pub fn with_policy<Q: ScalePolicy>(self) -> FixedDecimal<Q> {
        FixedDecimal::from_parts(self.magnitude, self.scale)
    }

    // ========================================================================
    // Rescaling
    // ========================================================================

    /// Magnitude expressed at `scale`, borrowing when no work is needed.
    fn magnitude_at(&self, scale: u32) -> Cow<'_, BigInt> {
        if scale == self.scale {
            Cow::Borrowed(&self.magnitude)
        } else {
            Cow::Owned(rescale_magnitude(&self.magnitude, self.scale, scale))
        }
    }

    /// Convert to `target_scale`, rounding half away from zero when narrowing.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `target_scale` is negative.
    pub fn rescale(&self, target_scale: i32) -> NumericResult<Self> {
        let target = checked_scale(target_scale)?;
        Ok(Self::from_parts(
            self.magnitude_at(target).into_owned(),
            target,
        ))
    }

    /// Convert to `target_scale`, discarding excess digits when narrowing.
    ///
    /// Uses the same truncation policy as [`FixedDecimal::parse`].
    ///
    /// # Errors
    /// Returns `InvalidScale` if `target_scale` is negative.
    pub fn truncate(&self, target_scale: i32) -> NumericResult<Self> {
        let target = checked_scale(target_scale)?;
        let magnitude = if target < self.scale {
            div_truncate(&self.magnitude, &pow10(self.scale - target))
        } else {
            self.magnitude_at(target).into_owned()
        };
        Ok(Self::from_parts(magnitude, target))
    }

    /// Raw integer amount at `decimals` places, rounding when narrowing.
    ///
    /// The inverse of [`FixedDecimal::from_raw`]; used to hand amounts back to
    /// on-chain collaborators.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `decimals` is negative.
    pub fn to_raw(&self, decimals: i32) -> NumericResult<BigInt> {
        let target = checked_scale(decimals)?;
        Ok(self.magnitude_at(target).into_owned())
    }

    /// Drop trailing fractional zeros: `(1200, 3)` becomes `(12, 1)`.
    pub fn normalize(&self) -> Self {
        if self.magnitude.is_zero() {
            return Self::zero();
        }

        let ten = BigInt::from(10u8);
        let mut magnitude = self.magnitude.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (quotient, remainder) = magnitude.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            magnitude = quotient;
            scale -= 1;
        }
        Self::from_parts(magnitude, scale)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Addition at the policy's common scale.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` under [`StrictMatch`] when scales differ.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        let scale = P::common_scale(self.scale, rhs.scale)?;
        let sum = &*self.magnitude_at(scale) + &*rhs.magnitude_at(scale);
        Ok(Self::from_parts(sum, scale))
    }

    /// Subtraction at the policy's common scale.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` under [`StrictMatch`] when scales differ.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        let scale = P::common_scale(self.scale, rhs.scale)?;
        let difference = &*self.magnitude_at(scale) - &*rhs.magnitude_at(scale);
        Ok(Self::from_parts(difference, scale))
    }

    /// Multiplication.
    ///
    /// The product is exact at `lhs.scale + rhs.scale`. [`AutoPromote`]
    /// keeps that scale; [`StrictMatch`] rounds it back to the shared
    /// operand scale.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` under [`StrictMatch`] when scales differ.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let scale = P::product_scale(self.scale, rhs.scale)?;
        let exact_scale = self
            .scale
            .checked_add(rhs.scale)
            .ok_or(NumericError::Overflow)?;
        let product = &self.magnitude * &rhs.magnitude;
        Ok(Self::from_parts(
            rescale_magnitude(&product, exact_scale, scale),
            scale,
        ))
    }

    /// Division to an explicit output scale, rounding half away from zero.
    ///
    /// There is deliberately no default scale: quotients are rarely exact,
    /// so the caller states how many places the result should carry.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `InvalidScale` if `target_scale` is negative
    pub fn checked_div(&self, rhs: &Self, target_scale: i32) -> NumericResult<Self> {
        if rhs.magnitude.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let target = checked_scale(target_scale)?;

        // (a / 10^sa) / (b / 10^sb) at 10^t == a * 10^(sb + t) / (b * 10^sa)
        let numerator_shift = rhs
            .scale
            .checked_add(target)
            .ok_or(NumericError::Overflow)?;
        let numerator = &self.magnitude * pow10(numerator_shift);
        let denominator = &rhs.magnitude * pow10(self.scale);

        Ok(Self::from_parts(
            div_round_half_away(&numerator, &denominator),
            target,
        ))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Ordering after widening both operands to the larger scale.
    fn cmp_promoted(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.magnitude_at(scale).cmp(&other.magnitude_at(scale))
    }

    /// Compare two values.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` under [`StrictMatch`] when scales differ.
    pub fn compare(&self, other: &Self) -> NumericResult<Ordering> {
        P::common_scale(self.scale, other.scale)?;
        Ok(self.cmp_promoted(other))
    }

    /// `self < other`
    pub fn checked_lt(&self, other: &Self) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`
    pub fn checked_lte(&self, other: &Self) -> NumericResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// `self > other`
    pub fn checked_gt(&self, other: &Self) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self >= other`
    pub fn checked_gte(&self, other: &Self) -> NumericResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Value equality.
    pub fn checked_eq(&self, other: &Self) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// The smaller input, returned unchanged at its original scale.
    /// Ties return `other`.
    pub fn checked_min(&self, other: &Self) -> NumericResult<Self> {
        if self.checked_lt(other)? {
            Ok(self.clone())
        } else {
            Ok(other.clone())
        }
    }

    /// The larger input, returned unchanged at its original scale.
    /// Ties return `other`.
    pub fn checked_max(&self, other: &Self) -> NumericResult<Self> {
        if self.checked_gt(other)? {
            Ok(self.clone())
        } else {
            Ok(other.clone())
        }
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render as a decimal string.
    ///
    /// Without `display_decimals` the value is shown at its own scale with
    /// every stored digit. With it, the value is first rescaled (rounding
    /// half away from zero) and then rendered.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `display_decimals` is negative.
    pub fn to_decimal_string(&self, display_decimals: Option<i32>) -> NumericResult<String> {
        match display_decimals {
            None => Ok(render(&self.magnitude, self.scale)),
            Some(decimals) => {
                let target = checked_scale(decimals)?;
                Ok(render(&self.magnitude_at(target), target))
            },
        }
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert from rust_decimal::Decimal. Exact: mantissa and scale are kept.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::from_parts(BigInt::from(d.mantissa()), d.scale())
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude needs more than 96 bits or the
    /// scale exceeds 28.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let mantissa = self.magnitude.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// A syntactically valid decimal literal split into its parts.
struct Literal<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> Literal<'a> {
    fn split(text: &'a str) -> NumericResult<Self> {
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
        {
            return Err(NumericError::MalformedInput);
        }

        Ok(Self {
            negative,
            integer,
            fraction,
        })
    }

    /// `integer * 10^scale + kept * 10^(scale - kept.len())`, signed.
    fn magnitude(&self, kept: &str, scale: u32) -> NumericResult<BigInt> {
        let padding = scale - kept.len() as u32;
        let integer = parse_digits(self.integer)? * pow10(scale);
        let fraction = parse_digits(kept)? * pow10(padding);
        let magnitude = integer + fraction;
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

fn parse_digits(digits: &str) -> NumericResult<BigInt> {
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::MalformedInput)
}

impl<P: ScalePolicy> FromStr for FixedDecimal<P> {
    type Err = NumericError;

    /// Parse at the scale implied by the fractional digits, losing nothing.
    ///
    /// # Examples
    /// - "123" -> scale 0
    /// - "123.4500" -> scale 4
    /// - "-0.001" -> scale 3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = Literal::split(s)?;
        let scale = u32::try_from(literal.fraction.len()).map_err(|_| NumericError::MalformedInput)?;
        Ok(Self::from_parts(literal.magnitude(literal.fraction, scale)?, scale))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// Render `magnitude / 10^scale` with exactly `scale` fractional digits.
pub(crate) fn render(magnitude: &BigInt, scale: u32) -> String {
    let digits = magnitude.magnitude().to_string();
    let scale = scale as usize;

    let mut out = String::with_capacity(digits.len() + scale + 3);
    if magnitude.is_negative() {
        out.push('-');
    }

    if scale == 0 {
        out.push_str(&digits);
    } else if digits.len() <= scale {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(scale - digits.len()));
        out.push_str(&digits);
    } else {
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

impl<P: ScalePolicy> fmt::Display for FixedDecimal<P> {
    /// Honours `{:.N}` by rounding half away from zero to `N` places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = match f.precision() {
            Some(precision) => {
                let target = u32::try_from(precision).map_err(|_| fmt::Error)?;
                render(&self.magnitude_at(target), target)
            },
            None => render(&self.magnitude, self.scale),
        };
        f.write_str(&rendered)
    }
}

impl<P: ScalePolicy> fmt::Debug for FixedDecimal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedDecimal<{}>({}, raw={}, scale={})",
            P::NAME,
            self,
            self.magnitude,
            self.scale
        )
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<P: ScalePolicy> Default for FixedDecimal<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

// Under StrictMatch, values with different scales are never equal and have
// no ordering, mirroring `compare`.
impl<P: ScalePolicy> PartialEq for FixedDecimal<P> {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl<P: ScalePolicy> Eq for FixedDecimal<P> {}

impl<P: ScalePolicy> PartialOrd for FixedDecimal<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Ord for FixedDecimal<AutoPromote> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_promoted(other)
    }
}

impl<P: ScalePolicy> Hash for FixedDecimal<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.magnitude.hash(state);
        normalized.scale.hash(state);
    }
}

impl<P: ScalePolicy> Neg for FixedDecimal<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_parts(-self.magnitude, self.scale)
    }
}

impl<P: ScalePolicy> Neg for &FixedDecimal<P> {
    type Output = FixedDecimal<P>;

    #[inline]
    fn neg(self) -> Self::Output {
        FixedDecimal::from_parts(-&self.magnitude, self.scale)
    }
}

// Operators exist only where they cannot fail: auto-promoting add/sub.
impl Add for &Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        Amount::from_parts(&*self.magnitude_at(scale) + &*rhs.magnitude_at(scale), scale)
    }
}

impl Add for Amount {
    type Output = Amount;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        Amount::from_parts(&*self.magnitude_at(scale) - &*rhs.magnitude_at(scale), scale)
    }
}

impl Sub for Amount {
    type Output = Amount;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, x| &acc + x)
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
impl<P: ScalePolicy> Serialize for FixedDecimal<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - decimal string at its own scale
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - (magnitude, scale)
            (&self.magnitude, self.scale).serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, P: ScalePolicy> Deserialize<'de> for FixedDecimal<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_str(&s).map_err(de::Error::custom)
        } else {
            let (magnitude, scale) = <(BigInt, u32)>::deserialize(deserializer)?;
            Ok(Self::from_parts(magnitude, scale))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
