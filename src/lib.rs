// ============================================================================
// Exact Decimal Library
// Arbitrary-precision fixed-point decimals for token amounts and prices
// ============================================================================

//! # Exact Decimal
//!
//! Fixed-point decimals backed by an arbitrary-precision integer and a scale
//! (number of implied decimal places). Nothing converts through floating
//! point.
//!
//! ## Features
//!
//! - **Exact arithmetic** on `BigInt` magnitudes of any size
//! - **Selectable scale policy**: auto-promote or strict-match, chosen by type
//! - **Round half away from zero** for every narrowing rescale and division
//! - **Truncating parse** of user input, kept distinct from arithmetic rounding
//! - **Display and quote helpers** for balances, slippage and price targets
//!
//! ## Example
//!
//! ```rust
//! use exact_decimal::prelude::*;
//!
//! // Wrap an on-chain balance with 18 decimals
//! let balance = Amount::from_raw(2_500_000_000_000_000_000u128, 18).unwrap();
//!
//! // Parse user input, truncating beyond the token's decimals
//! let spend = Amount::parse("1.25", 18).unwrap();
//! let remaining = balance.checked_sub(&spend).unwrap();
//! assert_eq!(remaining.to_decimal_string(Some(2)).unwrap(), "1.25");
//!
//! // Division always names its output scale
//! let price = spot_price(&Amount::from_integer(1000), &spend, &QuoteConfig::default()).unwrap();
//! assert_eq!(price.to_decimal_string(Some(0)).unwrap(), "800");
//! ```

pub mod display;
pub mod domain;
pub mod numeric;
pub mod quote;

// Re-exports for convenience
pub mod prelude {
    pub use crate::display::DecimalFormatter;
    pub use crate::domain::{DisplayConfig, QuoteConfig};
    pub use crate::numeric::{
        Amount, AutoPromote, FixedDecimal, NumericError, NumericResult, ScalePolicy,
        StrictAmount, StrictMatch,
    };
    pub use crate::quote::{
        bps_difference, max_amount_in, spot_price, swap_limit, target_price_down,
        target_price_up, QuoteError, QuoteResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_swap_quote() {
        // Sell 1.5 of an 18-decimal token for a 6-decimal stable
        let sell = Amount::parse("1.5", 18).unwrap();
        let pool_sell_balance = Amount::from_raw(400_000_000_000_000_000_000u128, 18).unwrap();
        let pool_buy_balance = Amount::from_raw(1_000_000_000_000u64, 6).unwrap();

        let config = QuoteConfig::default().with_price_scale(6);
        let price = spot_price(&pool_buy_balance, &pool_sell_balance, &config).unwrap();
        assert_eq!(price.to_string(), "2500.000000");

        let estimate = sell.checked_mul(&price).unwrap().rescale(6).unwrap();
        assert_eq!(estimate.to_string(), "3750.000000");

        let limit = swap_limit(&estimate, &config).unwrap();
        assert_eq!(limit.to_string(), "3712.500000");
        assert_eq!(
            limit.to_raw(6).unwrap(),
            num_bigint::BigInt::from(3_712_500_000u64)
        );

        let formatter = DecimalFormatter::new(DisplayConfig::notification()).unwrap();
        assert_eq!(formatter.format(&limit).unwrap(), "3,712.50");
    }

    #[test]
    fn test_strict_pipeline_forces_explicit_rescale() {
        let price = StrictAmount::parse("17.30", 2).unwrap();
        let qty = StrictAmount::parse("4.365", 3).unwrap();

        assert_eq!(price.checked_mul(&qty).unwrap_err(), NumericError::ScaleMismatch);

        let qty = qty.rescale(2).unwrap();
        assert_eq!(qty.to_string(), "4.37");
        let total = price.checked_mul(&qty).unwrap();
        // 17.30 * 4.37 = 75.601 -> 75.60
        assert_eq!(total.to_string(), "75.60");
    }

    #[test]
    fn test_user_input_to_raw_amount() {
        // A 6-decimal token; extra digits typed by the user are dropped
        let typed = Amount::parse("12.3456789", 6).unwrap();
        assert_eq!(typed.to_raw(6).unwrap(), num_bigint::BigInt::from(12_345_678));

        let balance = Amount::from_raw(12_000_000, 6).unwrap();
        let spend = typed.checked_min(&balance).unwrap();
        assert_eq!(spend.to_string(), "12.000000");
    }
}
