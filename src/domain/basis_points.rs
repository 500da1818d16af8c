//! Basis-point representation for fee rates.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A fee rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be constructed, but values above 10 000 are
/// nonsensical as percentages and make [`complement`](Self::complement)
/// return `None`. Swap pricing treats `fee ≤ 10 000` as a caller
/// obligation; use [`is_valid_percent`](Self::is_valid_percent) to check.
///
/// # Examples
///
/// ```
/// use xyk_math::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30);
/// assert!(fee.is_valid_percent());
/// assert_eq!(fee.complement(), Some(BasisPoints::new(9_970)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range
    /// (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `10_000 − self`, the portion of an amount a fee at this
    /// rate leaves untouched.
    ///
    /// Returns `None` if the rate exceeds 100%, so a nonsensical fee
    /// surfaces as an explicit failure instead of a wrapping subtraction.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match MAX_BPS.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Converts to a floating-point percentage (30 bp → 0.30).
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Computes `amount × (self / 10_000)` with explicit rounding — the
    /// fee portion of `amount` at this rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result does not fit the
    /// native width (only possible for rates above 100%).
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        // Widened product is at most 2^64 × 2^32, comfortably inside u128.
        let product = amount.widen() * self.0 as u128;
        let divisor = MAX_BPS as u128;

        let quotient = product / divisor;
        let portion = match rounding {
            Rounding::Down => quotient,
            Rounding::Up => {
                if product % divisor != 0 {
                    quotient + 1
                } else {
                    quotient
                }
            }
        };

        if portion > u64::MAX as u128 {
            return Err(AmmError::Overflow("fee portion exceeds the native width"));
        }
        Ok(Amount::new(portion as u64))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
