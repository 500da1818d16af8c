//! Unified error types for the xyk-math kernel.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers. A precondition violation never aborts the process: the
//! caller receives an `Err` and decides whether to propagate or recover.
//!
//! Variants carry a `&'static str` context payload where the same kind can
//! arise at more than one call site.

use thiserror::Error;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Unified error enum for all kernel operations.
///
/// # Examples
///
/// ```
/// use xyk_math::domain::{Amount, BasisPoints};
/// use xyk_math::error::AmmError;
/// use xyk_math::swap::calculate_swap_output;
///
/// let err = calculate_swap_output(
///     Amount::ZERO,
///     Amount::new(1_000),
///     Amount::new(1_000),
///     BasisPoints::new(30),
/// );
/// assert!(matches!(err, Err(AmmError::ZeroAmount(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// An amount argument that must be strictly positive was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// A reserve or share-supply argument that must be strictly positive
    /// was zero.
    #[error("empty reserves: {0}")]
    ReservesEmpty(&'static str),

    /// The requested output cannot be served from the available reserve.
    #[error("insufficient liquidity for requested output")]
    InsufficientLiquidity,

    /// A checked multiplication, addition, or narrowing conversion
    /// exceeded the representable range.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// A checked subtraction would fall below zero.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// A checked division met a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
