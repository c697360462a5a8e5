// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adaptive set of residues modulo the pruning modulus.
//!
//! The reachable-residue sets range from a handful of entries (shallow
//! levels) to the entire universe (deep levels, where every residue is
//! achievable by some suffix). One representation cannot serve both ends
//! well, so the set switches as it fills:
//!
//! - **Sparse**: a bitset for O(1) membership plus an ordered list of the
//!   present residues, cheap to iterate while occupancy is low
//! - **Dense**: bitset only; the list is dropped once it would grow past
//!   1/32 of the modulus
//! - **Full**: every residue present; membership is constant `true` and no
//!   storage is kept at all
//!
//! Transitions are one-way (sparse → dense → full). A full set can never
//! shrink, which lets level construction propagate "full" to every later
//! level without doing any work.

use std::fmt;

/// Set over the residue range `[0, modulus)`.
#[derive(Debug, Clone)]
pub struct ResidueSet {
    modulus: usize,
    len: usize,
    repr: Repr,
}

#[derive(Debug, Clone)]
enum Repr {
    Sparse { bits: Vec<u64>, list: Vec<u32> },
    Dense { bits: Vec<u64> },
    Full,
}

impl ResidueSet {
    /// An empty set in the sparse representation.
    pub fn new(modulus: usize) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        Self {
            modulus,
            len: 0,
            repr: Repr::Sparse {
                bits: vec![0; modulus.div_ceil(64)],
                list: Vec::new(),
            },
        }
    }

    /// The full-universe set.
    pub fn full(modulus: usize) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        Self {
            modulus,
            len: modulus,
            repr: Repr::Full,
        }
    }

    /// An empty set that starts in the same representation stage as
    /// `other`, except that Full begets Full.
    ///
    /// Successive pruning levels only ever get denser, so seeding the next
    /// level's set from its predecessor's stage skips the sparse phase the
    /// predecessor already outgrew.
    pub fn like(other: &ResidueSet) -> Self {
        match other.repr {
            Repr::Full => Self::full(other.modulus),
            Repr::Dense { .. } => Self {
                modulus: other.modulus,
                len: 0,
                repr: Repr::Dense {
                    bits: vec![0; other.modulus.div_ceil(64)],
                },
            },
            Repr::Sparse { .. } => Self::new(other.modulus),
        }
    }

    /// The modulus this set ranges over.
    pub fn modulus(&self) -> usize {
        self.modulus
    }

    /// Number of residues present.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no residues are present.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every residue in `[0, modulus)` is present.
    pub fn is_full(&self) -> bool {
        matches!(self.repr, Repr::Full)
    }

    /// Membership test.
    ///
    /// # Panics
    ///
    /// Panics if `residue >= modulus` (sparse/dense index out of bounds).
    pub fn contains(&self, residue: usize) -> bool {
        match &self.repr {
            Repr::Full => true,
            Repr::Sparse { bits, .. } | Repr::Dense { bits } => {
                bits[residue / 64] >> (residue % 64) & 1 != 0
            }
        }
    }

    /// Insert a residue, advancing the representation when thresholds are
    /// crossed. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `residue >= modulus`.
    pub fn insert(&mut self, residue: usize) {
        assert!(residue < self.modulus, "residue out of range: {}", residue);
        let bits = match &mut self.repr {
            Repr::Full => return,
            Repr::Sparse { bits, .. } | Repr::Dense { bits } => bits,
        };
        let (word, bit) = (residue / 64, residue % 64);
        if bits[word] >> bit & 1 != 0 {
            return;
        }
        bits[word] |= 1 << bit;
        self.len += 1;

        if self.len == self.modulus {
            self.repr = Repr::Full;
            return;
        }
        let drop_list = match &mut self.repr {
            Repr::Sparse { list, .. } if self.len < self.modulus / 32 => {
                list.push(residue as u32);
                false
            }
            Repr::Sparse { .. } => true,
            _ => false,
        };
        if drop_list {
            // List no longer pays for itself; membership stays in the
            // bitset. One-way transition.
            if let Repr::Sparse { bits, .. } = std::mem::replace(&mut self.repr, Repr::Full) {
                self.repr = Repr::Dense { bits };
            }
        }
    }

    /// Iterate over the present residues.
    ///
    /// Sparse sets yield in insertion order; dense and full sets yield in
    /// ascending order. Callers must not rely on the order.
    pub fn iter(&self) -> ResidueIter<'_> {
        let inner = match &self.repr {
            Repr::Sparse { list, .. } => IterInner::Sparse(list.iter()),
            Repr::Dense { bits } => IterInner::Bits {
                bits,
                word: 0,
                next_word: 0,
            },
            Repr::Full => IterInner::Range(0..self.modulus),
        };
        ResidueIter { inner }
    }
}

/// Iterator over the residues in a [`ResidueSet`].
pub struct ResidueIter<'a> {
    inner: IterInner<'a>,
}

enum IterInner<'a> {
    Sparse(std::slice::Iter<'a, u32>),
    Bits {
        bits: &'a [u64],
        word: u64,
        next_word: usize,
    },
    Range(std::ops::Range<usize>),
}

impl Iterator for ResidueIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match &mut self.inner {
            IterInner::Sparse(it) => it.next().map(|&r| r as usize),
            IterInner::Range(r) => r.next(),
            IterInner::Bits {
                bits,
                word,
                next_word,
            } => {
                while *word == 0 {
                    if *next_word >= bits.len() {
                        return None;
                    }
                    *word = bits[*next_word];
                    *next_word += 1;
                }
                let bit = word.trailing_zeros() as usize;
                *word &= *word - 1;
                Some((*next_word - 1) * 64 + bit)
            }
        }
    }
}

impl fmt::Display for ResidueSet {
    /// Occupancy summary, e.g. `set 12.34%` or `set all 100%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = (self.len as u64 * 10_000 / self.modulus as u64) as f64 / 100.0;
        write!(f, "set {}{}%", if self.is_full() { "all " } else { "" }, pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(set: &ResidueSet) -> &'static str {
        match set.repr {
            Repr::Sparse { .. } => "sparse",
            Repr::Dense { .. } => "dense",
            Repr::Full => "full",
        }
    }

    #[test]
    fn test_empty() {
        let set = ResidueSet::new(100);
        assert!(set.is_empty());
        assert!(!set.is_full());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(0));
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_insert_contains() {
        let mut set = ResidueSet::new(1000);
        set.insert(7);
        set.insert(500);
        set.insert(7); // idempotent
        assert_eq!(set.len(), 2);
        assert!(set.contains(7));
        assert!(set.contains(500));
        assert!(!set.contains(8));
        let mut present: Vec<_> = set.iter().collect();
        present.sort_unstable();
        assert_eq!(present, vec![7, 500]);
    }

    #[test]
    fn test_sparse_to_dense_transition() {
        // modulus 6400: the list is dropped when occupancy reaches 200.
        let mut set = ResidueSet::new(6400);
        for r in 0..199 {
            set.insert(r);
        }
        assert_eq!(state(&set), "sparse");
        set.insert(199);
        assert_eq!(state(&set), "dense");
        assert_eq!(set.len(), 200);
        // Membership and iteration survive the transition.
        assert!(set.contains(123));
        assert_eq!(set.iter().count(), 200);
        assert_eq!(set.iter().max(), Some(199));
    }

    #[test]
    fn test_dense_to_full_transition() {
        let mut set = ResidueSet::new(96);
        for r in 0..96 {
            set.insert(r);
        }
        assert!(set.is_full());
        assert_eq!(set.len(), 96);
        assert!(set.contains(95));
        assert_eq!(set.iter().count(), 96);
        // Inserting into a full set is a no-op.
        set.insert(0);
        assert_eq!(set.len(), 96);
    }

    #[test]
    fn test_like_inherits_stage() {
        let sparse = ResidueSet::new(6400);
        assert_eq!(state(&ResidueSet::like(&sparse)), "sparse");

        let mut dense = ResidueSet::new(6400);
        for r in 0..300 {
            dense.insert(r);
        }
        let seeded = ResidueSet::like(&dense);
        assert_eq!(state(&seeded), "dense");
        assert!(seeded.is_empty());

        let full = ResidueSet::full(6400);
        let seeded = ResidueSet::like(&full);
        assert!(seeded.is_full());
        assert_eq!(seeded.len(), 6400);
    }

    #[test]
    fn test_dense_iteration_order() {
        let mut set = ResidueSet::new(6400);
        for r in (0..6400).step_by(13) {
            set.insert(r);
        }
        let got: Vec<_> = set.iter().collect();
        let want: Vec<_> = (0..6400).step_by(13).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_display() {
        let mut set = ResidueSet::new(10_000);
        assert_eq!(set.to_string(), "set 0%");
        for r in 0..1234 {
            set.insert(r);
        }
        assert_eq!(set.to_string(), "set 12.34%");
        assert_eq!(ResidueSet::full(10_000).to_string(), "set all 100%");
    }
}
