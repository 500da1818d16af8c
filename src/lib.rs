//! # xyk-math
//!
//! Pure integer math kernel for constant-product (`x · y = k`) automated
//! market makers: swap pricing, LP share issuance, and removal payouts.
//!
//! Every function is side-effect-free and deterministic. The kernel
//! reads reserve and share-supply values passed by the caller and
//! returns a computed result or a precondition error; the exchange that
//! owns the state applies the result itself. All monetary quantities
//! are native-width (`u64`) unsigned integers; every multiplicative
//! step runs in the widened `u128` domain and narrows back only at the
//! end, with floor division rounding against the requester throughout.
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_math::domain::{Amount, BasisPoints, Liquidity};
//! use xyk_math::liquidity::{calculate_initial_lp, calculate_remove_liquidity};
//! use xyk_math::swap::calculate_swap_output;
//!
//! // Seed an empty pool: the first deposit mints the geometric mean.
//! let minted = calculate_initial_lp(Amount::new(1_000_000), Amount::new(1_000_000));
//! assert_eq!(minted, Liquidity::new(1_000_000));
//!
//! // Quote a swap against the funded reserves at a 0.30% fee.
//! let out = calculate_swap_output(
//!     Amount::new(10_000),
//!     Amount::new(1_000_000),
//!     Amount::new(1_000_000),
//!     BasisPoints::new(30),
//! )
//! .expect("funded reserves and positive input");
//! assert!(out.get() > 0 && out.get() < 1_000_000);
//!
//! // Burn half the shares for half of each reserve.
//! let (out_x, out_y) = calculate_remove_liquidity(
//!     Liquidity::new(500_000),
//!     minted,
//!     Amount::new(1_000_000),
//!     Amount::new(1_000_000),
//! )
//! .expect("non-zero supply");
//! assert_eq!((out_x.get(), out_y.get()), (500_000, 500_000));
//! ```
//!
//! # Concurrency
//!
//! No function reads or writes anything beyond its own stack frame, so
//! all of them are safely callable from arbitrarily many threads with no
//! synchronization. Serializing access to the actual reserve/supply
//! state — and calling with a consistent snapshot of it — is the
//! caller's job.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`BasisPoints`](domain::BasisPoints), [`Rounding`](domain::Rounding) |
//! | [`swap`] | Exact-in and exact-out swap pricing, fee denominator constant |
//! | [`liquidity`] | LP share issuance (initial and proportional) and removal payouts |
//! | [`math`] | Integer square roots, scalar min/max, rounding division, [`CheckedArithmetic`](math::CheckedArithmetic) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and operations |

pub mod domain;
pub mod error;
pub mod liquidity;
pub mod math;
pub mod prelude;
pub mod swap;

#[cfg(test)]
mod proptest_properties;
