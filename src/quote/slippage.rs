// ============================================================================
// Slippage Limits
// Bounds applied to swap quotes before they are submitted
// ============================================================================

use super::errors::{QuoteError, QuoteResult};
use crate::domain::config::{QuoteConfig, MAX_BASIS_POINTS};
use crate::numeric::{Amount, NumericError, NumericResult};

/// Fractional digits of one basis point (1 / 10^4)
const BPS_SCALE: u32 = 4;

/// `value * (10000 + delta_bps) / 10000`, truncated back to `value`'s scale.
fn scale_by_bps(value: &Amount, delta_bps: i64) -> NumericResult<Amount> {
    let factor = Amount::from_integer(i64::from(MAX_BASIS_POINTS) + delta_bps);
    let exact_scale = value
        .scale()
        .checked_add(BPS_SCALE)
        .and_then(|s| i32::try_from(s).ok())
        .ok_or(NumericError::InvalidScale)?;
    let output_scale = i32::try_from(value.scale()).map_err(|_| NumericError::InvalidScale)?;

    // Dividing by 10^4 is exact at scale + 4; truncate so the bound never
    // moves past the caller's tolerance.
    value
        .checked_mul(&factor)?
        .checked_div(&Amount::ten_thousand(), exact_scale)?
        .truncate(output_scale)
}

/// Minimum acceptable output for a sell quote.
///
/// `estimate * (10000 - slippage_bps) / 10000` at the estimate's scale,
/// truncated toward zero.
///
/// # Errors
/// Returns `InvalidConfig` if the configuration fails validation.
pub fn swap_limit(estimate: &Amount, config: &QuoteConfig) -> QuoteResult<Amount> {
    config.validate().map_err(QuoteError::InvalidConfig)?;
    let limit = scale_by_bps(estimate, -i64::from(config.slippage_bps))?;
    tracing::debug!(
        estimate = %estimate,
        limit = %limit,
        slippage_bps = config.slippage_bps,
        "computed swap limit"
    );
    Ok(limit)
}

/// Maximum acceptable input for an exact-output quote.
///
/// `estimate * (10000 + slippage_bps) / 10000` at the estimate's scale,
/// truncated toward zero.
///
/// # Errors
/// Returns `InvalidConfig` if the configuration fails validation.
pub fn max_amount_in(estimate: &Amount, config: &QuoteConfig) -> QuoteResult<Amount> {
    config.validate().map_err(QuoteError::InvalidConfig)?;
    let limit = scale_by_bps(estimate, i64::from(config.slippage_bps))?;
    tracing::debug!(
        estimate = %estimate,
        limit = %limit,
        slippage_bps = config.slippage_bps,
        "computed max amount in"
    );
    Ok(limit)
}
