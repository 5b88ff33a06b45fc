// ============================================================================
// Display Module
// Human-facing rendering of fixed-point decimals
// ============================================================================
//
// Rounds with the numeric core's integer rescale, then decorates the digits
// (grouping, trimming, decimal point). Nothing here converts through floats.

use crate::domain::config::DisplayConfig;
use crate::numeric::{FixedDecimal, NumericError, NumericResult, ScalePolicy};

/// Renders decimals according to a validated [`DisplayConfig`].
///
/// # Example
/// ```
/// use exact_decimal::display::DecimalFormatter;
/// use exact_decimal::domain::DisplayConfig;
/// use exact_decimal::numeric::Amount;
///
/// let formatter = DecimalFormatter::new(DisplayConfig::balance()).unwrap();
/// let balance = Amount::from_raw(1_234_567_891_000_000_000_000i128, 18).unwrap();
/// assert_eq!(formatter.format(&balance).unwrap(), "1,234.5679");
/// ```
#[derive(Debug, Clone)]
pub struct DecimalFormatter {
    config: DisplayConfig,
    display_decimals: Option<i32>,
}

impl DecimalFormatter {
    /// Creates a formatter from configuration
    ///
    /// # Returns
    /// * `Result<DecimalFormatter, String>` - Formatter or validation error
    pub fn new(config: DisplayConfig) -> Result<Self, String> {
        config.validate()?;

        let display_decimals = match config.display_decimals {
            Some(decimals) => Some(
                i32::try_from(decimals).map_err(|_| "Display decimals out of range".to_string())?,
            ),
            None => None,
        };

        Ok(Self {
            config,
            display_decimals,
        })
    }

    /// The configuration this formatter was built from
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Render a value.
    ///
    /// # Errors
    /// Propagates rescale errors from the numeric core.
    pub fn format<P: ScalePolicy>(&self, value: &FixedDecimal<P>) -> NumericResult<String> {
        let plain = value.to_decimal_string(self.display_decimals)?;
        let rendered = self.decorate(&plain)?;
        tracing::trace!(plain = %plain, rendered = %rendered, "formatted decimal");
        Ok(rendered)
    }

    fn decorate(&self, plain: &str) -> NumericResult<String> {
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if integer.is_empty() {
            return Err(NumericError::MalformedInput);
        }

        let fraction = if self.config.trim_trailing_zeros {
            fraction.trim_end_matches('0')
        } else {
            fraction
        };

        let mut out = String::with_capacity(plain.len() + integer.len() / 3 + 1);
        out.push_str(sign);
        push_grouped(&mut out, integer, self.config.group_separator);
        if !fraction.is_empty() {
            out.push(self.config.decimal_point);
            out.push_str(fraction);
        }
        Ok(out)
    }
}

/// Append `digits`, inserting `separator` every three digits from the right.
fn push_grouped(out: &mut String, digits: &str, separator: Option<char>) {
    let Some(separator) = separator else {
        out.push_str(digits);
        return;
    };

    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Amount, StrictAmount};

    fn amount(text: &str) -> Amount {
        text.parse().unwrap()
    }

    #[test]
    fn test_full_precision_matches_core() {
        let formatter = DecimalFormatter::new(DisplayConfig::full_precision()).unwrap();
        let x = amount("-1234.5000");
        assert_eq!(formatter.format(&x).unwrap(), x.to_string());
    }

    #[test]
    fn test_balance_preset() {
        let formatter = DecimalFormatter::new(DisplayConfig::balance()).unwrap();
        assert_eq!(formatter.format(&amount("1234567.123456")).unwrap(), "1,234,567.1235");
        assert_eq!(formatter.format(&amount("100.5")).unwrap(), "100.5");
        assert_eq!(formatter.format(&amount("12.00001")).unwrap(), "12");
        assert_eq!(formatter.format(&amount("-999.99999")).unwrap(), "-1,000");
        assert_eq!(formatter.format(&Amount::zero()).unwrap(), "0");
    }

    #[test]
    fn test_notification_preset() {
        let formatter = DecimalFormatter::new(DisplayConfig::notification()).unwrap();
        assert_eq!(formatter.format(&amount("1234.5")).unwrap(), "1,234.50");
        assert_eq!(formatter.format(&amount("0.005")).unwrap(), "0.01");
        assert_eq!(formatter.format(&amount("-0.004")).unwrap(), "0.00");
    }

    #[test]
    fn test_custom_separators() {
        let config = DisplayConfig::new()
            .with_display_decimals(2)
            .with_group_separator('.')
            .with_decimal_point(',');
        let formatter = DecimalFormatter::new(config).unwrap();
        assert_eq!(formatter.format(&amount("9876543.219")).unwrap(), "9.876.543,22");
    }

    #[test]
    fn test_grouping_boundaries() {
        let mut out = String::new();
        push_grouped(&mut out, "123", Some(','));
        assert_eq!(out, "123");

        out.clear();
        push_grouped(&mut out, "1234", Some(','));
        assert_eq!(out, "1,234");

        out.clear();
        push_grouped(&mut out, "123456", Some(' '));
        assert_eq!(out, "123 456");
    }

    #[test]
    fn test_strict_values_format() {
        let formatter = DecimalFormatter::new(DisplayConfig::notification()).unwrap();
        let x = StrictAmount::parse("42.125", 3).unwrap();
        assert_eq!(formatter.format(&x).unwrap(), "42.13");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = DisplayConfig::new().with_group_separator('.');
        assert!(DecimalFormatter::new(config).is_err());

        let config = DisplayConfig::new().with_display_decimals(u32::MAX);
        assert!(DecimalFormatter::new(config).is_err());
    }
}
