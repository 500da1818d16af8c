//! Property-based tests using `proptest` for kernel invariant validation.
//!
//! Covered properties:
//!
//! 1. **Square root** — perfect-square round-trip, monotonicity, and
//!    `r² ≤ n < (r+1)²` bracketing at both widths.
//! 2. **Swap pricing** — output monotone in the input, always strictly
//!    below the output reserve, and round-trips lose value.
//! 3. **Exact-out inverse** — the quoted input always covers the
//!    requested output.
//! 4. **Issuance** — equal-ratio deposits agree across both branches.
//! 5. **Removal** — remove→redeposit never mints more shares than were
//!    burned; removing the whole supply pays out the reserves exactly.

use proptest::prelude::*;

use crate::domain::{Amount, BasisPoints, Liquidity};
use crate::liquidity::{calculate_remove_liquidity, calculate_subsequent_lp};
use crate::math::{isqrt, isqrt_wide};
use crate::swap::{calculate_swap_input, calculate_swap_output};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [1, 10^12] — comfortably inside the widened domain.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000_000
}

/// Trade amounts in [1, 10^12].
fn amount_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000_000
}

/// Outstanding share supplies in [1, 10^12].
fn supply_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000_000
}

/// Fee rates strictly below 100% (monotonicity needs `fee < DENOM`).
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=9_999
}

// ---------------------------------------------------------------------------
// Square root
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sqrt_perfect_square_roundtrip(k in 0u64..=u32::MAX as u64) {
        prop_assert_eq!(isqrt(k * k), k);
    }

    #[test]
    fn prop_sqrt_monotone(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(isqrt(lo) <= isqrt(hi));
    }

    #[test]
    fn prop_sqrt_brackets_input(n in any::<u64>()) {
        let r = u128::from(isqrt(n));
        prop_assert!(r * r <= u128::from(n));
        prop_assert!((r + 1) * (r + 1) > u128::from(n));
    }

    #[test]
    fn prop_sqrt_wide_brackets_input(n in any::<u128>()) {
        let r = isqrt_wide(n);
        // r ≤ 2^64 − 1, so r² always fits in u128.
        prop_assert!(r * r <= n);
        let above = r + 1;
        match above.checked_mul(above) {
            Some(sq) => prop_assert!(sq > n),
            // (r+1)² overflowing u128 is itself proof that (r+1)² > n.
            None => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Swap pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_output_monotone_in_input(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        a in amount_strategy(),
        bump in 1u64..=1_000_000,
        fee in fee_strategy(),
    ) {
        let quote = |amount: u64| {
            calculate_swap_output(
                Amount::new(amount),
                Amount::new(r_in),
                Amount::new(r_out),
                BasisPoints::new(fee),
            )
        };
        let Ok(smaller) = quote(a) else {
            return Ok(());
        };
        let Ok(larger) = quote(a + bump) else {
            return Ok(());
        };
        prop_assert!(
            smaller <= larger,
            "output shrank: {} in → {}, {} in → {}",
            a, smaller, a + bump, larger
        );
    }

    #[test]
    fn prop_swap_output_strictly_below_reserve(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        a in amount_strategy(),
        fee in fee_strategy(),
    ) {
        let Ok(out) = calculate_swap_output(
            Amount::new(a),
            Amount::new(r_in),
            Amount::new(r_out),
            BasisPoints::new(fee),
        ) else {
            return Ok(());
        };
        prop_assert!(
            out.get() < r_out,
            "swap drained the reserve: out={} reserve={}",
            out, r_out
        );
    }

    #[test]
    fn prop_swap_round_trip_loses_value(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        a in amount_strategy(),
        fee in fee_strategy(),
    ) {
        let fee = BasisPoints::new(fee);

        // A → B against the initial reserves.
        let Ok(received) = calculate_swap_output(
            Amount::new(a),
            Amount::new(r_in),
            Amount::new(r_out),
            fee,
        ) else {
            return Ok(());
        };
        if received.is_zero() {
            return Ok(());
        }

        // B → A against the post-trade reserves.
        let Ok(returned) = calculate_swap_output(
            received,
            Amount::new(r_out - received.get()),
            Amount::new(r_in + a),
            fee,
        ) else {
            return Ok(());
        };
        prop_assert!(
            returned.get() <= a,
            "round-trip created value: {} in, {} back",
            a, returned
        );
    }

    #[test]
    fn prop_swap_input_covers_requested_output(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        want in amount_strategy(),
        fee in fee_strategy(),
    ) {
        if want >= r_out {
            return Ok(());
        }
        let fee = BasisPoints::new(fee);
        let Ok(needed) = calculate_swap_input(
            Amount::new(want),
            Amount::new(r_in),
            Amount::new(r_out),
            fee,
        ) else {
            return Ok(());
        };
        let Ok(got) = calculate_swap_output(
            needed,
            Amount::new(r_in),
            Amount::new(r_out),
            fee,
        ) else {
            return Ok(());
        };
        prop_assert!(
            got.get() >= want,
            "quoted input {} bought {} < requested {}",
            needed, got, want
        );
    }
}

// ---------------------------------------------------------------------------
// Issuance and removal
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_equal_ratio_deposit_agrees_across_branches(
        r_x in 1u64..=1_000_000_000,
        r_y in 1u64..=1_000_000_000,
        multiplier in 1u64..=1_000,
        supply in supply_strategy(),
    ) {
        // amount/reserve is exactly `multiplier` on both sides.
        let a_x = r_x * multiplier;
        let a_y = r_y * multiplier;

        let Ok(minted) = calculate_subsequent_lp(
            Amount::new(a_x),
            Amount::new(a_y),
            Amount::new(r_x),
            Amount::new(r_y),
            Liquidity::new(supply),
        ) else {
            return Ok(());
        };

        let x_branch = u128::from(a_x) * u128::from(supply) / u128::from(r_x);
        let y_branch = u128::from(a_y) * u128::from(supply) / u128::from(r_y);
        prop_assert_eq!(x_branch, y_branch);
        prop_assert_eq!(u128::from(minted.get()), x_branch);
    }

    #[test]
    fn prop_remove_then_redeposit_never_mints_more(
        r_x in 1_000u64..=1_000_000_000_000,
        r_y in 1_000u64..=1_000_000_000_000,
        supply in 2u64..=1_000_000_000_000,
        burn_fraction in 1u64..=99,
    ) {
        // Burn a strict fraction so the pool stays funded afterwards.
        let lp_amount = supply * burn_fraction / 100;
        if lp_amount == 0 {
            return Ok(());
        }

        let Ok((out_x, out_y)) = calculate_remove_liquidity(
            Liquidity::new(lp_amount),
            Liquidity::new(supply),
            Amount::new(r_x),
            Amount::new(r_y),
        ) else {
            return Ok(());
        };
        if out_x.is_zero() || out_y.is_zero() {
            return Ok(());
        }

        let Ok(re_minted) = calculate_subsequent_lp(
            out_x,
            out_y,
            Amount::new(r_x - out_x.get()),
            Amount::new(r_y - out_y.get()),
            Liquidity::new(supply - lp_amount),
        ) else {
            return Ok(());
        };
        prop_assert!(
            re_minted.get() <= lp_amount,
            "redeposit minted {} > burned {}",
            re_minted, lp_amount
        );
    }

    #[test]
    fn prop_full_removal_pays_reserves_exactly(
        r_x in reserve_strategy(),
        r_y in reserve_strategy(),
        supply in supply_strategy(),
    ) {
        let Ok((out_x, out_y)) = calculate_remove_liquidity(
            Liquidity::new(supply),
            Liquidity::new(supply),
            Amount::new(r_x),
            Amount::new(r_y),
        ) else {
            return Ok(());
        };
        prop_assert_eq!(out_x.get(), r_x);
        prop_assert_eq!(out_y.get(), r_y);
    }
}
