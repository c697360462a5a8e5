// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact fixed-width integer arithmetic.
//!
//! Search balances and answers are carried in [`Int96`], a 96-bit
//! two's-complement integer: wide enough for every value a base-16,
//! 17-digit search can produce, narrow enough to stay a cheap `Copy` value.
//!
//! Overflow is neither detected nor signalled - the type wraps exactly like
//! a hardware integer would. The search keeps all true values well inside
//! the representable range (see [`crate::constants::MAX_BASE`]); the only
//! recoverable condition is a value that does not fit when narrowing to
//! i64, which the hot path treats as an ordinary branch, not an error.

mod int96;

pub use int96::Int96;

use thiserror::Error;

/// A value did not fit when narrowing [`Int96`] to a native integer.
///
/// This is an expected outcome on the search hot path (the caller falls
/// back to wide arithmetic), distinct from contract violations such as a
/// non-positive divisor, which panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value does not fit in 64 bits")]
pub struct NarrowingError;

/// Failure to parse an [`Int96`] from a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntError {
    /// The input had no digits.
    #[error("empty digit string")]
    Empty,

    /// A character was not a digit of the requested radix.
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// The radix was outside the supported range 2..=36.
    #[error("unsupported radix {0}")]
    InvalidRadix(u32),
}
