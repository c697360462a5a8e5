// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run parameters for the self-power search.
//!
//! All of these are tuning or bounding constants, not structural
//! requirements: the pruning moduli trade memory for pruning power, the
//! parallel threshold trades scheduling overhead for core utilisation, and
//! the base bound is what keeps every exact value inside 96 bits.

/// Smallest supported base.
pub const MIN_BASE: usize = 2;

/// Largest supported base.
///
/// Searches run digit counts up to `base + 1`, so the largest positional
/// weight is `base^(base+1)`. For base 16 that is `16^17 ≈ 2^68`, and the
/// worst-case balance magnitudes stay comfortably below the 96-bit limit.
/// Larger bases would silently wrap; [`crate::context::SearchContext::new`]
/// rejects them.
pub const MAX_BASE: usize = 16;

/// Number of digit counts searched for a base: 1 through `base + 1`.
///
/// `base + 1` digits is an upper bound on the length of any self-power
/// number: with `n` digits the number is at least `base^(n-1)`, while the
/// digit self-power sum is at most `n * (base-1)^(base-1)`, and the former
/// outgrows the latter one position past the base.
pub const fn max_digits(base: usize) -> usize {
    base + 1
}

/// Modulus for residue pruning in bases below [`LARGE_MODULUS_MIN_BASE`].
///
/// A highly composite value so that digit deltas hit many distinct residue
/// classes: `16 * 9 * 5 * 7 * 11 * 13 * 17`.
pub const PRUNE_MODULUS_SMALL: i64 = 16 * 9 * 5 * 7 * 11 * 13 * 17;

/// Modulus for residue pruning in the larger bases.
///
/// The extra factor of 19 keeps the reachable-residue sets from saturating
/// too early when there are 15+ distinct digit deltas per position.
pub const PRUNE_MODULUS_LARGE: i64 = PRUNE_MODULUS_SMALL * 19;

/// Bases at or above this use [`PRUNE_MODULUS_LARGE`].
pub const LARGE_MODULUS_MIN_BASE: usize = 15;

/// Pruning modulus for a base.
pub fn prune_modulus(base: usize) -> i64 {
    if base < LARGE_MODULUS_MIN_BASE {
        PRUNE_MODULUS_SMALL
    } else {
        PRUNE_MODULUS_LARGE
    }
}

/// Digit counts at or above this fan out across the rayon pool.
///
/// Below the threshold the recursion runs depth-first on the calling
/// thread; subtrees are too small there to amortise task scheduling.
/// Lowering this does not affect results, only performance.
pub const PARALLEL_THRESHOLD: usize = 12;

/// Magnitude bound under which a balance may be carried in native i64.
///
/// One search step subtracts a digit delta from the balance. With both
/// operands below `2^61` the i64 result is at most `2^62` in magnitude, so
/// the narrow path can never overflow between fits-checks.
pub const NARROW_SAFE_BOUND: i64 = 1 << 61;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_values() {
        assert_eq!(PRUNE_MODULUS_SMALL, 12_252_240);
        assert_eq!(PRUNE_MODULUS_LARGE, 232_792_560);
    }

    #[test]
    fn test_modulus_selection() {
        assert_eq!(prune_modulus(2), PRUNE_MODULUS_SMALL);
        assert_eq!(prune_modulus(10), PRUNE_MODULUS_SMALL);
        assert_eq!(prune_modulus(14), PRUNE_MODULUS_SMALL);
        assert_eq!(prune_modulus(15), PRUNE_MODULUS_LARGE);
        assert_eq!(prune_modulus(16), PRUNE_MODULUS_LARGE);
    }

    #[test]
    fn test_max_digits() {
        assert_eq!(max_digits(2), 3);
        assert_eq!(max_digits(10), 11);
        assert_eq!(max_digits(16), 17);
    }

    #[test]
    fn test_narrow_bound_leaves_headroom() {
        // One subtraction step must stay within i64.
        assert!(NARROW_SAFE_BOUND.checked_mul(2).is_some());
    }
}
