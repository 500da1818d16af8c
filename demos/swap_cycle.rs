//! Constant-product kernel walkthrough.
//!
//! Plays the exchange's role around the pure kernel: holds reserves and
//! the share supply as local state, quotes swaps and liquidity changes,
//! and applies the results with checked arithmetic.
//!
//! # Run
//!
//! ```bash
//! cargo run --example swap_cycle
//! ```

use xyk_math::prelude::*;

fn main() -> Result<()> {
    println!("=== Constant Product Kernel (x · y = k) ===\n");

    // ── 1. Seed an empty pool ───────────────────────────────────────────
    let mut reserve_x = Amount::new(1_000_000);
    let mut reserve_y = Amount::new(4_000_000);
    let mut lp_supply = calculate_initial_lp(reserve_x, reserve_y);

    println!("Seeded pool:");
    println!("  Reserve X:   {reserve_x}");
    println!("  Reserve Y:   {reserve_y}");
    println!("  LP minted:   {lp_supply} (geometric mean of the deposit)");

    // ── 2. Quote and apply a swap at 0.30% ──────────────────────────────
    let fee = BasisPoints::new(30);
    let amount_in = Amount::new(10_000);
    let amount_out = calculate_swap_output(amount_in, reserve_x, reserve_y, fee)?;
    let fee_portion = fee.apply(amount_in, Rounding::Up)?;

    reserve_x = reserve_x.safe_add(&amount_in)?;
    reserve_y = reserve_y.safe_sub(&amount_out)?;

    println!("\n--- Swap: {amount_in} X in ({fee} fee) ---");
    println!("  Amount out:  {amount_out} Y");
    println!("  Fee portion: {fee_portion} X (stays in the pool)");
    println!("  Reserves:    {reserve_x} / {reserve_y}");

    // ── 3. Exact-out: how much X buys exactly 20 000 Y? ─────────────────
    let want = Amount::new(20_000);
    let needed = calculate_swap_input(want, reserve_x, reserve_y, fee)?;
    println!("\n--- Exact-out quote ---");
    println!("  Buying {want} Y costs {needed} X");

    // ── 4. Proportional deposit ─────────────────────────────────────────
    let (add_x, add_y) = (Amount::new(100_000), Amount::new(400_000));
    let minted = calculate_subsequent_lp(add_x, add_y, reserve_x, reserve_y, lp_supply)?;

    reserve_x = reserve_x.safe_add(&add_x)?;
    reserve_y = reserve_y.safe_add(&add_y)?;
    lp_supply = lp_supply.safe_add(&minted)?;

    println!("\n--- Add Liquidity ---");
    println!("  Deposited:   {add_x} X + {add_y} Y");
    println!("  LP minted:   {minted}");
    println!("  LP supply:   {lp_supply}");

    // ── 5. Burn a quarter of the supply ─────────────────────────────────
    let burn = Liquidity::new(lp_supply.get() / 4);
    let (out_x, out_y) = calculate_remove_liquidity(burn, lp_supply, reserve_x, reserve_y)?;

    reserve_x = reserve_x.safe_sub(&out_x)?;
    reserve_y = reserve_y.safe_sub(&out_y)?;
    lp_supply = lp_supply.safe_sub(&burn)?;

    println!("\n--- Remove Liquidity ---");
    println!("  Burned:      {burn} LP units");
    println!("  Returned:    {out_x} X + {out_y} Y");
    println!("  Reserves:    {reserve_x} / {reserve_y}");
    println!("  LP supply:   {lp_supply}");

    println!("\n(fee denominator: {})", fee_denominator());
    println!("=== Done ===");
    Ok(())
}
