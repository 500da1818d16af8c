//! Convenience re-exports for common types and operations.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use xyk_math::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{Amount, BasisPoints, Liquidity, Rounding};

// Re-export error types
pub use crate::error::{AmmError, Result};

// Re-export kernel operations
pub use crate::liquidity::{
    calculate_initial_lp, calculate_remove_liquidity, calculate_subsequent_lp,
};
pub use crate::swap::{calculate_swap_input, calculate_swap_output, fee_denominator};

// Re-export caller-side arithmetic
pub use crate::math::CheckedArithmetic;
