// ============================================================================
// Display and Quote Configuration
// Settings consumed by the formatting and quoting layers
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One hundred percent in basis points
pub const MAX_BASIS_POINTS: u32 = 10_000;

// ============================================================================
// Display Configuration
// ============================================================================

/// How a decimal is rendered for people (balances, notifications).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Places to round to before rendering.
    /// None renders every stored digit at the value's own scale
    pub display_decimals: Option<u32>,

    /// Strip trailing fractional zeros (and a dangling decimal point)
    pub trim_trailing_zeros: bool,

    /// Separator inserted every three integer digits, e.g. `,` -> 1,234,567
    pub group_separator: Option<char>,

    /// Character between integer and fractional digits
    pub decimal_point: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::full_precision()
    }
}

impl DisplayConfig {
    /// Create a new configuration rendering every stored digit
    pub fn new() -> Self {
        Self {
            display_decimals: None,
            trim_trailing_zeros: false,
            group_separator: None,
            decimal_point: '.',
        }
    }

    /// Builder method: Round to a fixed number of places
    pub fn with_display_decimals(mut self, decimals: u32) -> Self {
        self.display_decimals = Some(decimals);
        self
    }

    /// Builder method: Trim trailing fractional zeros
    pub fn with_trimmed_zeros(mut self) -> Self {
        self.trim_trailing_zeros = true;
        self
    }

    /// Builder method: Group integer digits
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = Some(separator);
        self
    }

    /// Builder method: Set the decimal point character
    pub fn with_decimal_point(mut self, point: char) -> Self {
        self.decimal_point = point;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_point.is_ascii_digit() || self.decimal_point == '-' {
            return Err("Decimal point cannot be a digit or sign".to_string());
        }

        if let Some(separator) = self.group_separator {
            if separator.is_ascii_digit() || separator == '-' {
                return Err("Group separator cannot be a digit or sign".to_string());
            }
            if separator == self.decimal_point {
                return Err("Group separator must differ from the decimal point".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Display Configurations
// ============================================================================

impl DisplayConfig {
    /// Every stored digit, no grouping. Lossless and re-parseable.
    pub fn full_precision() -> Self {
        Self::new()
    }

    /// Wallet balance style
    /// - 4 decimal places, trailing zeros trimmed
    /// - Comma grouping: 1,234.5678
    pub fn balance() -> Self {
        Self::new()
            .with_display_decimals(4)
            .with_trimmed_zeros()
            .with_group_separator(',')
    }

    /// Notification / report style
    /// - 2 decimal places, always shown
    /// - Comma grouping: 1,234.50
    pub fn notification() -> Self {
        Self::new()
            .with_display_decimals(2)
            .with_group_separator(',')
    }
}

// ============================================================================
// Quote Configuration
// ============================================================================

/// Parameters shared by swap and price quote calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteConfig {
    /// Accepted slippage in basis points (100 = 1%)
    pub slippage_bps: u32,

    /// Decimal places carried by computed prices
    pub price_scale: u32,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            slippage_bps: 100,
            price_scale: 18,
        }
    }
}

impl QuoteConfig {
    /// Create a new configuration
    pub fn new(slippage_bps: u32, price_scale: u32) -> Self {
        Self {
            slippage_bps,
            price_scale,
        }
    }

    /// Builder method: Set slippage tolerance in basis points
    pub fn with_slippage_bps(mut self, bps: u32) -> Self {
        self.slippage_bps = bps;
        self
    }

    /// Builder method: Set price scale
    pub fn with_price_scale(mut self, scale: u32) -> Self {
        self.price_scale = scale;
        self
    }

    /// Tight tolerance for deep, stable pools
    /// - 10 bps slippage
    pub fn tight() -> Self {
        Self::default().with_slippage_bps(10)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.slippage_bps > MAX_BASIS_POINTS {
            return Err("Slippage cannot exceed 10000 basis points".to_string());
        }

        if i32::try_from(self.price_scale).is_err() {
            return Err("Price scale is out of range".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_builder_pattern() {
        let config = DisplayConfig::new()
            .with_display_decimals(6)
            .with_group_separator('.')
            .with_decimal_point(',');

        assert_eq!(config.display_decimals, Some(6));
        assert_eq!(config.group_separator, Some('.'));
        assert_eq!(config.decimal_point, ',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display_validation() {
        let same = DisplayConfig::new().with_group_separator('.');
        assert!(same.validate().is_err());

        let digit = DisplayConfig::new().with_decimal_point('0');
        assert!(digit.validate().is_err());

        let sign = DisplayConfig::new().with_group_separator('-');
        assert!(sign.validate().is_err());
    }

    #[test]
    fn test_display_presets() {
        assert_eq!(DisplayConfig::default(), DisplayConfig::full_precision());

        let balance = DisplayConfig::balance();
        assert_eq!(balance.display_decimals, Some(4));
        assert!(balance.trim_trailing_zeros);

        let notification = DisplayConfig::notification();
        assert_eq!(notification.display_decimals, Some(2));
        assert!(!notification.trim_trailing_zeros);
        assert!(notification.validate().is_ok());
    }

    #[test]
    fn test_quote_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.slippage_bps, 100);
        assert_eq!(config.price_scale, 18);
        assert!(config.validate().is_ok());

        assert_eq!(QuoteConfig::tight().slippage_bps, 10);
        assert_eq!(QuoteConfig::new(50, 6).with_price_scale(8).price_scale, 8);
    }

    #[test]
    fn test_quote_validation() {
        assert!(QuoteConfig::default()
            .with_slippage_bps(10_001)
            .validate()
            .is_err());
        assert!(QuoteConfig::default()
            .with_slippage_bps(MAX_BASIS_POINTS)
            .validate()
            .is_ok());
        assert!(QuoteConfig::default()
            .with_price_scale(u32::MAX)
            .validate()
            .is_err());
    }
}
