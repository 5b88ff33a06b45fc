// ============================================================================
// Quote Module
// Call-site pricing helpers built on the numeric core
// ============================================================================
//
// Swap quotes, slippage bounds and basis-point price targets. These helpers
// work on auto-promoting amounts and log what they compute; the numeric core
// underneath stays silent.

mod errors;
mod pricing;
mod slippage;

pub use errors::{QuoteError, QuoteResult};
pub use pricing::{bps_difference, spot_price, target_price_down, target_price_up};
pub use slippage::{max_amount_in, swap_limit};
