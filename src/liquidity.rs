//! LP share issuance and removal.
//!
//! Deposits mint shares, withdrawals burn them; these functions compute
//! how many. The caller owns the reserve and share-supply state and
//! applies the results itself.
//!
//! # Issuance
//!
//! - **First deposit** into an empty pool: `isqrt(x) × isqrt(y)`, the
//!   geometric mean of the deposited amounts — there is nothing yet to
//!   be proportional to.
//! - **Every later deposit**: shares proportional to the *smaller* of
//!   the two contribution ratios, `min(Δx/Rx, Δy/Ry) × supply`. Taking
//!   the minimum never rewards a depositor for over-supplying one side
//!   relative to the pool's current price.

use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{div_round, isqrt};

/// Computes the LP shares minted by the very first deposit into an
/// empty pool.
///
/// Returns `isqrt(amount_x) × isqrt(amount_y)`. The roots are floored
/// *per operand* — this under-issues slightly relative to
/// `isqrt(x · y)` for non-perfect squares, and that behaviour is part
/// of the contract: changing it would change what early depositors
/// receive.
///
/// Total: each root fits in 32 bits, so the product always fits the
/// native width. A deposit too small on either side mints zero shares;
/// rejecting that is the caller's policy decision.
///
/// # Examples
///
/// ```
/// use xyk_math::domain::Amount;
/// use xyk_math::liquidity::calculate_initial_lp;
///
/// let minted = calculate_initial_lp(Amount::new(4), Amount::new(9));
/// assert_eq!(minted.get(), 6);
/// ```
#[must_use]
pub const fn calculate_initial_lp(amount_x: Amount, amount_y: Amount) -> Liquidity {
    Liquidity::new(isqrt(amount_x.get()) * isqrt(amount_y.get()))
}

/// Computes the LP shares minted by a deposit into a funded pool.
///
/// The smaller contribution ratio is found by comparing the
/// cross-products `amount_x × reserve_y` and `reserve_x × amount_y` in
/// the widened domain — no division happens before the comparison, so
/// rounding can never flip which side wins. Shares are then
/// `⌊amount × lp_supply / reserve⌋` for the winning side; when the
/// ratios are exactly equal both sides give the same result.
///
/// # Errors
///
/// - [`AmmError::ReservesEmpty`] if either reserve is zero.
/// - [`AmmError::ZeroAmount`] if either deposited amount is zero.
/// - [`AmmError::Overflow`] if the minted shares exceed the native
///   width (deposit ratio far above 1 against a large supply).
pub fn calculate_subsequent_lp(
    amount_x: Amount,
    amount_y: Amount,
    reserve_x: Amount,
    reserve_y: Amount,
    lp_supply: Liquidity,
) -> Result<Liquidity> {
    if reserve_x.is_zero() || reserve_y.is_zero() {
        return Err(AmmError::ReservesEmpty("deposit requires funded reserves"));
    }
    if amount_x.is_zero() || amount_y.is_zero() {
        return Err(AmmError::ZeroAmount("deposit requires both tokens"));
    }

    let cross_x = amount_x.widen() * reserve_y.widen();
    let cross_y = reserve_x.widen() * amount_y.widen();

    let minted = if cross_x <= cross_y {
        div_round(
            amount_x.widen() * lp_supply.widen(),
            reserve_x.widen(),
            Rounding::Down,
        )
    } else {
        div_round(
            amount_y.widen() * lp_supply.widen(),
            reserve_y.widen(),
            Rounding::Down,
        )
    }
    .ok_or(AmmError::DivisionByZero)?;

    let minted = u64::try_from(minted)
        .map_err(|_| AmmError::Overflow("minted shares exceed the native width"))?;

    Ok(Liquidity::new(minted))
}

/// Computes the payout of both reserve assets for burning `lp_amount`
/// shares.
///
/// Each payout is `⌊lp_amount × reserve / lp_supply⌋`, computed
/// independently per side in the widened domain. Floor division leaves
/// the rounding dust in the pool.
///
/// A zero `lp_supply` is rejected rather than dividing by zero; the
/// issuance functions check their divisors and this one follows suit.
/// `lp_amount ≤ lp_supply` is not enforced — a burn request above the
/// outstanding supply is the caller's bookkeeping error and surfaces
/// here only if a payout overflows the native width.
///
/// # Errors
///
/// - [`AmmError::ReservesEmpty`] if `lp_supply` is zero.
/// - [`AmmError::Overflow`] if a payout exceeds the native width.
pub fn calculate_remove_liquidity(
    lp_amount: Liquidity,
    lp_supply: Liquidity,
    reserve_x: Amount,
    reserve_y: Amount,
) -> Result<(Amount, Amount)> {
    if lp_supply.is_zero() {
        return Err(AmmError::ReservesEmpty("no outstanding shares to redeem"));
    }

    let payout_x = div_round(
        lp_amount.widen() * reserve_x.widen(),
        lp_supply.widen(),
        Rounding::Down,
    )
    .ok_or(AmmError::DivisionByZero)?;

    let payout_y = div_round(
        lp_amount.widen() * reserve_y.widen(),
        lp_supply.widen(),
        Rounding::Down,
    )
    .ok_or(AmmError::DivisionByZero)?;

    let payout_x = u64::try_from(payout_x)
        .map_err(|_| AmmError::Overflow("payout exceeds the native width"))?;
    let payout_y = u64::try_from(payout_y)
        .map_err(|_| AmmError::Overflow("payout exceeds the native width"))?;

    Ok((Amount::new(payout_x), Amount::new(payout_y)))
}
