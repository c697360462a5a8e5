// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for Münchausen (self-power) numbers.
//!
//! A Münchausen number in base `b` is a number whose digits `x1..xN` satisfy
//! `x1..xN = x1^x1 + ... + xN^xN`, with the convention that `0^0`
//! contributes 0. The classic base-10 examples are `1` and `3435`
//! (`3^3 + 4^4 + 3^3 + 5^5 = 3435`).
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO data (immutable)
//!
//! Precomputed per-base data that never changes during search:
//! - [`memo::PowerTables`] - positional weights `base^p` and digit
//!   self-powers `d^d`, stored as 96-bit integers since they exceed the
//!   native range for the larger bases
//! - [`memo::PruneLevel`] - one level per digit count, holding the balance
//!   delta of each digit, the achievable min/max balance, and the set of
//!   balance residues reachable by any suffix of that length
//!
//! ## Tier 2: Search (pure)
//!
//! The search itself carries no mutable state at all. Each recursive call is
//! a pure function of `(positions remaining, leading-digit flag, balance)`
//! plus a shared reference to the MEMO data, returning an immutable sorted
//! answer array. This is what makes the parallel decomposition trivial: top
//! levels of the recursion fan out one rayon task per digit choice and the
//! results are merged exactly like the sequential union step.
//!
//! # Search algorithm
//!
//! Digits are assigned from the most significant position down. The running
//! "balance" is the value the remaining positions must still contribute for
//! the self-power equation to close. A branch dies immediately when the
//! balance falls outside the achievable range for the remaining positions,
//! or when its residue modulo a fixed composite is unreachable by any
//! suffix. Leaves (zero positions left, balance exactly zero) yield one
//! answer each, built up by position-weighted digit contributions as the
//! recursion unwinds.
//!
//! # Exact arithmetic
//!
//! Intermediate balances and final answers can exceed 64 bits (base 16 goes
//! up to 17 digits), so everything is carried in [`numeric::Int96`], a
//! 96-bit two's-complement integer. A narrow i64 fast path runs the
//! identical algorithm whenever the balance is safely small; the choice is
//! never observable in the results.

pub mod constants;
pub mod context;
pub mod memo;
pub mod numeric;
pub mod results;
pub mod search;

// Re-export commonly used types
pub use context::SearchContext;
pub use numeric::Int96;
pub use results::merge;
