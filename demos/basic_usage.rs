// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_decimal::prelude::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Exact Decimal Example ===\n");

    // On-chain balances arrive as raw integers plus the token's decimals
    let token_balance = Amount::from_raw(1_234_567_891_234_567_891_234u128, 18)?;
    let stable_balance = Amount::from_raw(987_654_321_000u64, 6)?;

    let balance_fmt = DecimalFormatter::new(DisplayConfig::balance())?;
    println!("Pool balances:");
    println!("  TOKEN  {}", balance_fmt.format(&token_balance)?);
    println!("  STABLE {}", balance_fmt.format(&stable_balance)?);

    // User input is truncated to the token's decimals, never rounded
    let typed = "12.3456789";
    let sell = Amount::parse(typed, 6)?;
    println!("\nUser typed {} -> parsed at 6 dp: {}", typed, sell);

    // Quote with 1% slippage
    let config = QuoteConfig::default();
    let price = spot_price(&stable_balance, &token_balance, &config)?;
    let estimate = sell.checked_mul(&price)?.rescale(6)?;
    let limit = swap_limit(&estimate, &config)?;

    let notify_fmt = DecimalFormatter::new(DisplayConfig::notification())?;
    println!("\n=== Quote ===");
    println!("  Price:    {:.6}", price);
    println!("  Estimate: {}", notify_fmt.format(&estimate)?);
    println!("  Min out:  {}", notify_fmt.format(&limit)?);
    println!("  Raw min:  {}", limit.to_raw(6)?);

    // Price targets in basis points
    let up = target_price_up(&price.rescale(6)?, &Amount::from_integer(50))?;
    let down = target_price_down(&price.rescale(6)?, &Amount::from_integer(50))?;
    println!("\n=== Targets (+/- 50 bps) ===");
    println!("  Up:   {}", up);
    println!("  Down: {}", down);

    // Strict policy refuses to mix scales
    let a = StrictAmount::parse("1.00", 2)?;
    let b = StrictAmount::parse("1.000", 3)?;
    println!("\nStrict 1.00 + 1.000 -> {:?}", a.checked_add(&b));

    Ok(())
}
