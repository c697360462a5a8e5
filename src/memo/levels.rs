// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-digit-count pruning levels.
//!
//! Level `n` answers, for a balance that the remaining `n` digit positions
//! must contribute: could *any* assignment of those positions produce it?
//! Two bounds are kept:
//!
//! - the achievable `[min_balance, max_balance]` interval
//! - the set of balance residues (mod the pruning modulus) reachable by
//!   some suffix, built as the Minkowski sum of the previous level's set
//!   with this level's digit deltas
//!
//! Levels are built strictly bottom-up - level `n` needs level `n-1` - and
//! are immutable afterwards, so the search reads them concurrently without
//! locking.

use crate::memo::residue_set::ResidueSet;
use crate::numeric::Int96;

/// Pruning data for one digit count.
#[derive(Debug, Clone)]
pub struct PruneLevel {
    /// `deltas[d]` - balance change from placing digit `d` at this level's
    /// position: `positional_weight * d - d^d`. Empty at level 0.
    deltas: Vec<Int96>,
    /// Smallest balance any suffix of this length can contribute.
    min_balance: Int96,
    /// Largest balance any suffix of this length can contribute.
    max_balance: Int96,
    /// Balance residues reachable by some suffix of this length.
    reachable: ResidueSet,
}

impl PruneLevel {
    /// Level 0: no positions left. Only the zero balance is achievable.
    pub fn root(modulus: i64) -> Self {
        let mut reachable = ResidueSet::new(modulus as usize);
        reachable.insert(0);
        Self {
            deltas: Vec::new(),
            min_balance: Int96::ZERO,
            max_balance: Int96::ZERO,
            reachable,
        }
    }

    /// Build level `n` from level `n-1` and the digit deltas for the new
    /// position.
    ///
    /// The reachable set is `{ (d + r) mod m : d in deltas, r reachable at
    /// n-1 }`; if the previous set is already full the new one is full by
    /// construction and the sum is skipped entirely.
    pub fn next(prev: &PruneLevel, deltas: Vec<Int96>) -> Self {
        assert!(!deltas.is_empty(), "a level needs at least one digit delta");
        let modulus = prev.reachable.modulus() as i64;
        let max_balance = *deltas.iter().max().unwrap() + prev.max_balance;
        let min_balance = *deltas.iter().min().unwrap() + prev.min_balance;
        let mut reachable = ResidueSet::like(&prev.reachable);
        if !reachable.is_full() {
            for r in prev.reachable.iter() {
                for &delta in &deltas {
                    reachable.insert((delta + r as i64).rem_by(modulus) as usize);
                }
            }
        }
        Self {
            deltas,
            min_balance,
            max_balance,
            reachable,
        }
    }

    /// Balance delta for placing digit `d` at this level's position.
    pub fn delta(&self, d: usize) -> Int96 {
        self.deltas[d]
    }

    /// All digit deltas for this level.
    pub fn deltas(&self) -> &[Int96] {
        &self.deltas
    }

    /// Whether `balance` lies in the achievable interval.
    pub fn balance_in_range(&self, balance: Int96) -> bool {
        self.min_balance <= balance && balance <= self.max_balance
    }

    /// Smallest achievable balance.
    pub fn min_balance(&self) -> Int96 {
        self.min_balance
    }

    /// Largest achievable balance.
    pub fn max_balance(&self) -> Int96 {
        self.max_balance
    }

    /// The reachable-residue set.
    pub fn reachable(&self) -> &ResidueSet {
        &self.reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deltas for the base-10 ones position: `1*d - d^d`.
    fn base10_ones_deltas() -> Vec<Int96> {
        let powers: [i64; 10] = [0, 1, 4, 27, 256, 3125, 46_656, 823_543, 16_777_216, 387_420_489];
        (0..10)
            .map(|d| Int96::from(d as i64) - powers[d])
            .collect()
    }

    #[test]
    fn test_root_level() {
        let root = PruneLevel::root(100);
        assert!(root.deltas().is_empty());
        assert_eq!(root.min_balance(), Int96::ZERO);
        assert_eq!(root.max_balance(), Int96::ZERO);
        assert!(root.balance_in_range(Int96::ZERO));
        assert!(!root.balance_in_range(Int96::ONE));
        assert!(root.reachable().contains(0));
        assert_eq!(root.reachable().len(), 1);
    }

    #[test]
    fn test_level_one_bounds() {
        let root = PruneLevel::root(1000);
        let level = PruneLevel::next(&root, base10_ones_deltas());
        // Digits 0 and 1 contribute 0; every other digit is negative, with
        // 9 - 9^9 the worst case.
        assert_eq!(level.max_balance(), Int96::ZERO);
        assert_eq!(level.min_balance(), Int96::from(9 - 387_420_489));
        assert!(level.balance_in_range(Int96::ZERO));
        assert!(!level.balance_in_range(Int96::ONE));
    }

    #[test]
    fn test_level_one_residues() {
        let modulus = 1000;
        let root = PruneLevel::root(modulus);
        let level = PruneLevel::next(&root, base10_ones_deltas());
        for delta in base10_ones_deltas() {
            assert!(level.reachable().contains(delta.rem_by(modulus) as usize));
        }
        // 10 deltas, but 0 appears twice (digits 0 and 1).
        assert_eq!(level.reachable().len(), 9);
    }

    #[test]
    fn test_minkowski_sum_accumulates() {
        // Deltas {0, 1} over a tiny modulus: level n reaches {0..n}.
        let deltas = vec![Int96::ZERO, Int96::ONE];
        let mut level = PruneLevel::root(64);
        for n in 1..=5 {
            level = PruneLevel::next(&level, deltas.clone());
            let got: Vec<_> = {
                let mut v: Vec<_> = level.reachable().iter().collect();
                v.sort_unstable();
                v
            };
            let want: Vec<_> = (0..=n).collect();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_full_propagates() {
        // Deltas covering every residue saturate level 1; later levels
        // must inherit "full" without recomputation.
        let deltas: Vec<_> = (0..8).map(|d| Int96::from(d as i64)).collect();
        let root = PruneLevel::root(8);
        let level1 = PruneLevel::next(&root, deltas.clone());
        assert!(level1.reachable().is_full());
        let level2 = PruneLevel::next(&level1, deltas);
        assert!(level2.reachable().is_full());
    }

    #[test]
    fn test_negative_delta_residues_are_mathematical() {
        // delta = -3 over modulus 10 must land on residue 7.
        let root = PruneLevel::root(10);
        let level = PruneLevel::next(&root, vec![Int96::from(-3)]);
        assert!(level.reachable().contains(7));
        assert!(!level.reachable().contains(3));
    }
}
