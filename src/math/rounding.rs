//! Rounding division in the widened domain.
//!
//! [`div_round`] performs `u128` division with an explicit [`Rounding`]
//! direction. It is the final narrowing step of every multiplicative
//! kernel computation: widen, multiply, then divide with the direction
//! the operation's contract demands.
//!
//! # Convention
//!
//! Always round against the requester:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Required swap input | [`Rounding::Up`] |
//! | Minted shares | [`Rounding::Down`] |
//! | Removal payout | [`Rounding::Down`] |

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use xyk_math::domain::Rounding;
/// use xyk_math::math::div_round;
///
/// assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
/// assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
/// assert_eq!(div_round(10, 0, Rounding::Down), None);
/// ```
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            if numerator % denominator != 0 {
                // A non-zero remainder implies quotient < u128::MAX.
                Some(quotient + 1)
            } else {
                Some(quotient)
            }
        }
    }
}
