// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-base power tables.
//!
//! Both tables hold [`Int96`] values because they outgrow i64 for the
//! larger bases: base 16 runs to 17 digit positions, so the top positional
//! weight is `16^17 ≈ 2.9 * 10^20`.

use crate::constants::max_digits;
use crate::numeric::Int96;

/// Positional weights and digit self-powers for one base.
///
/// Built once by [`crate::context::SearchContext::new`] and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct PowerTables {
    base: usize,
    /// `positional[p] = base^p`, for `p in 0..=max_digits(base)`.
    positional: Vec<Int96>,
    /// `self_powers[d] = d^d`, for `d in 0..base`, with `0^0 = 0`.
    self_powers: Vec<Int96>,
}

impl PowerTables {
    /// Compute the tables for a base.
    pub fn new(base: usize) -> Self {
        let positional = (0..=max_digits(base))
            .map(|p| int96_pow(base as i64, p))
            .collect();
        let self_powers = (0..base).map(|d| digit_self_power(d as i64)).collect();
        Self {
            base,
            positional,
            self_powers,
        }
    }

    /// The base these tables were built for.
    pub fn base(&self) -> usize {
        self.base
    }

    /// `base^position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > max_digits(base)`.
    pub fn positional(&self, position: usize) -> Int96 {
        self.positional[position]
    }

    /// `digit^digit`, with the `0^0 = 0` convention.
    ///
    /// # Panics
    ///
    /// Panics if `digit >= base`.
    pub fn self_power(&self, digit: usize) -> Int96 {
        self.self_powers[digit]
    }
}

/// `base^exp` by repeated multiplication.
fn int96_pow(base: i64, exp: usize) -> Int96 {
    let mut r = Int96::ONE;
    for _ in 0..exp {
        r = r * base;
    }
    r
}

/// `d^d` for a digit; zero contributes zero to the self-power sum.
fn digit_self_power(d: i64) -> Int96 {
    if d == 0 {
        Int96::ZERO
    } else {
        int96_pow(d, d as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_weights() {
        let t = PowerTables::new(10);
        assert_eq!(t.positional(0), Int96::ONE);
        assert_eq!(t.positional(1), Int96::from(10));
        assert_eq!(t.positional(9), Int96::from(1_000_000_000));
        assert_eq!(t.positional(11).to_string(), "100000000000");
    }

    #[test]
    fn test_self_powers() {
        let t = PowerTables::new(10);
        assert_eq!(t.self_power(0), Int96::ZERO);
        assert_eq!(t.self_power(1), Int96::ONE);
        assert_eq!(t.self_power(2), Int96::from(4));
        assert_eq!(t.self_power(5), Int96::from(3125));
        assert_eq!(t.self_power(9), Int96::from(387_420_489));
    }

    #[test]
    fn test_base_16_exceeds_native_range() {
        let t = PowerTables::new(16);
        // 16^17 = 2^68 does not fit in 64 bits.
        assert!(t.positional(17).to_i64().is_none());
        assert_eq!(t.positional(17).to_string_radix(16), "100000000000000000");
        // 15^15 still fits.
        assert_eq!(t.self_power(15).to_i64(), Some(437_893_890_380_859_375));
    }
}
