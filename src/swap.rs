//! Swap pricing on the constant-product curve.
//!
//! Prices are quoted from a snapshot of the reserves passed by the
//! caller; nothing here mutates state. Fees are deducted from the input
//! side **before** the `x · y = k` invariant is applied, and every
//! division rounds against the trader so rounding can never leak value
//! out of the pool.
//!
//! # Exact-in pricing (A → B)
//!
//! ```text
//! numerator   = amount_in × (DENOM − fee_bps) × reserve_out
//! denominator = reserve_in × DENOM + amount_in × (DENOM − fee_bps)
//! amount_out  = ⌊numerator / denominator⌋
//! ```
//!
//! After the caller applies `reserve_in += amount_in` and
//! `reserve_out -= amount_out`, the invariant satisfies
//! `k_after ≥ k_before` because the fee component stays in the pool.

use crate::domain::{Amount, BasisPoints, Rounding};
use crate::error::{AmmError, Result};
use crate::math::div_round;

/// Denominator for basis-point fee rates (10 000 = 100%).
pub const FEE_DENOMINATOR: u64 = 10_000;

/// Returns the basis-point fee denominator.
///
/// Exposed for callers that need the constant symbolically rather than
/// as a hardcoded literal.
#[must_use]
pub const fn fee_denominator() -> u64 {
    FEE_DENOMINATOR
}

/// Computes the output amount for an exact-in swap.
///
/// The fee is charged on the input: only `amount_in × (DENOM − fee_bps)`
/// takes part in the pricing, while the full `amount_in` enters the
/// reserves when the caller applies the result. Floor division rounds
/// the output in the pool's favour.
///
/// The result is strictly below `reserve_out` whenever `reserve_in > 0`
/// (the curve asymptotes toward a full drain but never reaches it), so
/// no output bound is enforced here; verifying `amount_out` against the
/// live reserve before applying it remains the caller's responsibility.
///
/// # Preconditions
///
/// `fee_bps ≤ 10_000` is trusted and not re-validated; a violating rate
/// surfaces as [`AmmError::Overflow`] from the checked fee complement.
///
/// # Errors
///
/// - [`AmmError::ReservesEmpty`] if either reserve is zero.
/// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
/// - [`AmmError::Overflow`] if the widened numerator overflows
///   (both `amount_in` and `reserve_out` near the native maximum).
///
/// # Examples
///
/// ```
/// use xyk_math::domain::{Amount, BasisPoints};
/// use xyk_math::swap::calculate_swap_output;
///
/// // 100 in against 1000/1000 reserves at 30 bp:
/// // ⌊100·9970·1000 / (1000·10000 + 100·9970)⌋ = ⌊997000000 / 10997000⌋ = 90
/// let out = calculate_swap_output(
///     Amount::new(100),
///     Amount::new(1_000),
///     Amount::new(1_000),
///     BasisPoints::new(30),
/// )
/// .expect("valid swap");
/// assert_eq!(out, Amount::new(90));
/// ```
pub fn calculate_swap_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_bps: BasisPoints,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::ReservesEmpty("swap requires funded reserves"));
    }
    if amount_in.is_zero() {
        return Err(AmmError::ZeroAmount("swap input must be positive"));
    }

    let kept = fee_bps
        .complement()
        .ok_or(AmmError::Overflow("fee rate exceeds the denominator"))?;

    // amount_in × (DENOM − fee): both factors are below 2^64, so the
    // widened product cannot wrap.
    let discounted_in = amount_in.widen() * u128::from(kept.get());

    let numerator = discounted_in
        .checked_mul(reserve_out.widen())
        .ok_or(AmmError::Overflow("swap numerator overflow"))?;

    let denominator = (reserve_in.widen() * u128::from(FEE_DENOMINATOR))
        .checked_add(discounted_in)
        .ok_or(AmmError::Overflow("swap denominator overflow"))?;

    // denominator ≥ reserve_in × DENOM > 0 after the precondition checks.
    let amount_out =
        div_round(numerator, denominator, Rounding::Down).ok_or(AmmError::DivisionByZero)?;

    let amount_out = u64::try_from(amount_out)
        .map_err(|_| AmmError::Overflow("swap output exceeds the native width"))?;

    Ok(Amount::new(amount_out))
}

/// Computes the smallest input that buys at least `amount_out` —
/// the ceiling inverse of [`calculate_swap_output`].
///
/// The net requirement `⌈reserve_in × amount_out / (reserve_out −
/// amount_out)⌉` is grossed back up through the fee with a second
/// ceiling division, so the quoted input always covers the requested
/// output.
///
/// # Errors
///
/// - [`AmmError::ReservesEmpty`] if either reserve is zero.
/// - [`AmmError::ZeroAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out ≥ reserve_out`.
/// - [`AmmError::DivisionByZero`] if the fee complement is zero — a
///   100% fee makes any exact-out quote impossible.
/// - [`AmmError::Overflow`] if the grossed-up input does not fit the
///   native width.
pub fn calculate_swap_input(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_bps: BasisPoints,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::ReservesEmpty("swap requires funded reserves"));
    }
    if amount_out.is_zero() {
        return Err(AmmError::ZeroAmount("requested output must be positive"));
    }
    if amount_out.get() >= reserve_out.get() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let kept = fee_bps
        .complement()
        .ok_or(AmmError::Overflow("fee rate exceeds the denominator"))?;

    // reserve_out − amount_out > 0 by the bound check above.
    let remaining_out = reserve_out.widen() - amount_out.widen();

    // reserve_in × amount_out: widened factors, cannot wrap.
    let net_in = div_round(
        reserve_in.widen() * amount_out.widen(),
        remaining_out,
        Rounding::Up,
    )
    .ok_or(AmmError::DivisionByZero)?;

    let scaled = net_in
        .checked_mul(u128::from(FEE_DENOMINATOR))
        .ok_or(AmmError::Overflow("swap input scaling overflow"))?;

    let amount_in =
        div_round(scaled, u128::from(kept.get()), Rounding::Up).ok_or(AmmError::DivisionByZero)?;

    let amount_in = u64::try_from(amount_in)
        .map_err(|_| AmmError::Overflow("swap input exceeds the native width"))?;

    Ok(Amount::new(amount_in))
}
