// ============================================================================
// Price Helpers
// Spot prices and basis-point price targets
// ============================================================================

use super::errors::{QuoteError, QuoteResult};
use crate::domain::config::QuoteConfig;
use crate::numeric::{Amount, NumericError, NumericResult};

/// Price of one base unit in quote units, at `config.price_scale`.
///
/// # Errors
/// - `InvalidConfig` if the configuration fails validation
/// - `Numeric(DivisionByZero)` if `base_amount` is zero
pub fn spot_price(
    quote_amount: &Amount,
    base_amount: &Amount,
    config: &QuoteConfig,
) -> QuoteResult<Amount> {
    config.validate().map_err(QuoteError::InvalidConfig)?;
    let scale = i32::try_from(config.price_scale).map_err(|_| NumericError::InvalidScale)?;
    let price = quote_amount.checked_div(base_amount, scale)?;
    tracing::debug!(
        quote_amount = %quote_amount,
        base_amount = %base_amount,
        price = %price,
        "computed spot price"
    );
    Ok(price)
}

/// `bps / 10000` exactly: four more places than `bps` carries.
fn bps_fraction(bps: &Amount) -> NumericResult<Amount> {
    let scale = bps
        .scale()
        .checked_add(4)
        .and_then(|s| i32::try_from(s).ok())
        .ok_or(NumericError::InvalidScale)?;
    bps.checked_div(&Amount::ten_thousand(), scale)
}

fn current_scale(current: &Amount) -> NumericResult<i32> {
    i32::try_from(current.scale()).map_err(|_| NumericError::InvalidScale)
}

/// `current + current * bps / 10000`, rounded to `current`'s scale.
pub fn target_price_up(current: &Amount, bps: &Amount) -> NumericResult<Amount> {
    let delta = current.checked_mul(&bps_fraction(bps)?)?;
    let target = current.checked_add(&delta)?.rescale(current_scale(current)?)?;
    tracing::debug!(current = %current, bps = %bps, target = %target, "target price up");
    Ok(target)
}

/// `current - current * bps / 10000`, rounded to `current`'s scale.
pub fn target_price_down(current: &Amount, bps: &Amount) -> NumericResult<Amount> {
    let delta = current.checked_mul(&bps_fraction(bps)?)?;
    let target = current.checked_sub(&delta)?.rescale(current_scale(current)?)?;
    tracing::debug!(current = %current, bps = %bps, target = %target, "target price down");
    Ok(target)
}

/// Distance of `price` from `reference` in basis points,
/// `|price - reference| / reference * 10000`, at `reference`'s scale.
///
/// # Errors
/// Returns `DivisionByZero` if `reference` is zero.
pub fn bps_difference(price: &Amount, reference: &Amount) -> NumericResult<Amount> {
    let distance = price.checked_sub(reference)?.abs();
    let bps = distance
        .checked_mul(&Amount::ten_thousand())?
        .checked_div(reference, current_scale(reference)?)?
        .abs();
    tracing::debug!(price = %price, reference = %reference, bps = %bps, "price difference");
    Ok(bps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(text: &str) -> Amount {
        text.parse().unwrap()
    }

    #[test]
    fn test_spot_price() {
        let config = QuoteConfig::default().with_price_scale(6);
        let price = spot_price(&amount("1000"), &amount("3"), &config).unwrap();
        assert_eq!(price.to_string(), "333.333333");

        let err = spot_price(&amount("1"), &Amount::zero(), &config).unwrap_err();
        assert_eq!(err, QuoteError::Numeric(NumericError::DivisionByZero));

        let wide = QuoteConfig::default().with_slippage_bps(10_001);
        let err = spot_price(&amount("1"), &amount("1"), &wide).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidConfig(_)));
    }

    #[test]
    fn test_target_price_up() {
        // 1.0200 + 50 bps = 1.0251
        let target = target_price_up(&amount("1.0200"), &amount("50")).unwrap();
        assert_eq!(target.to_string(), "1.0251");
    }

    #[test]
    fn test_target_price_down() {
        // 1.02 - 2.5 bps = 1.019745 -> 1.02 at 2 dp
        let target = target_price_down(&amount("1.02"), &amount("2.5")).unwrap();
        assert_eq!(target.to_string(), "1.02");

        // 1.020000 - 2.5 bps = 1.019745
        let precise = target_price_down(&amount("1.020000"), &amount("2.5")).unwrap();
        assert_eq!(precise.to_string(), "1.019745");
    }

    #[test]
    fn test_bps_difference() {
        let bps = bps_difference(&amount("1.03"), &amount("1.00")).unwrap();
        assert_eq!(bps, Amount::from_integer(300));

        let below = bps_difference(&amount("0.97"), &amount("1.00")).unwrap();
        assert_eq!(below, Amount::from_integer(300));

        let err = bps_difference(&amount("1"), &amount("0.0")).unwrap_err();
        assert_eq!(err, NumericError::DivisionByZero);
    }
}
