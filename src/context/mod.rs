// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-base search context.
//!
//! The [`SearchContext`] bundles everything a search task reads: the base,
//! the pruning modulus, the power tables, and the pruning levels built so
//! far. All of it is immutable during a search; levels are appended
//! strictly sequentially *between* searches (level `n` depends on level
//! `n-1`), then read concurrently by many rayon tasks. This is what makes
//! the parallel decomposition lock-free: tasks share `&SearchContext` and
//! nothing else.

use crate::constants::{max_digits, prune_modulus, MAX_BASE, MIN_BASE, PARALLEL_THRESHOLD};
use crate::memo::{PowerTables, PruneLevel};
use crate::numeric::Int96;

/// Immutable per-base data plus the incrementally grown pruning levels.
#[derive(Debug, Clone)]
pub struct SearchContext {
    base: usize,
    modulus: i64,
    parallel_threshold: usize,
    powers: PowerTables,
    levels: Vec<PruneLevel>,
}

impl SearchContext {
    /// Set up a context for one base: power tables and pruning level 0.
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `MIN_BASE..=MAX_BASE`; larger bases
    /// would silently wrap the 96-bit arithmetic.
    pub fn new(base: usize) -> Self {
        assert!(
            (MIN_BASE..=MAX_BASE).contains(&base),
            "base must be in {}..={}: {}",
            MIN_BASE,
            MAX_BASE,
            base
        );
        let modulus = prune_modulus(base);
        log::debug!("base {}: power tables up to {} digits, modulus {}", base, max_digits(base), modulus);
        Self {
            base,
            modulus,
            parallel_threshold: PARALLEL_THRESHOLD,
            powers: PowerTables::new(base),
            levels: vec![PruneLevel::root(modulus)],
        }
    }

    /// Override the digit count at which the search fans out in parallel.
    ///
    /// Purely a performance knob (and a test hook): results are identical
    /// on both sides of the threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The base being searched.
    pub fn base(&self) -> usize {
        self.base
    }

    /// The residue-pruning modulus for this base.
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Digit count at or above which [`Self::search`] runs in parallel.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// The power tables.
    pub fn powers(&self) -> &PowerTables {
        &self.powers
    }

    /// The highest digit count a level has been built for.
    pub fn levels_built(&self) -> usize {
        self.levels.len() - 1
    }

    /// Pruning level for `n` remaining digit positions.
    ///
    /// # Panics
    ///
    /// Panics if the level has not been built yet.
    pub fn level(&self, n: usize) -> &PruneLevel {
        &self.levels[n]
    }

    /// Append the next pruning level.
    ///
    /// Level `n` covers positions `0..n`; its digit deltas are
    /// `base^(n-1) * d - d^d` for the newly exposed position `n-1`.
    pub fn extend_level(&mut self) {
        let n = self.levels.len();
        let weight = self.powers.positional(n - 1);
        let deltas = (0..self.base)
            .map(|d| weight * d as i64 - self.powers.self_power(d))
            .collect();
        let level = PruneLevel::next(self.levels.last().expect("level 0 always present"), deltas);
        log::debug!("base {}: level {} built, reachable {}", self.base, n, level.reachable());
        self.levels.push(level);
    }

    /// Build levels up to and including digit count `n`.
    pub fn ensure_levels(&mut self, n: usize) {
        while self.levels_built() < n {
            self.extend_level();
        }
    }

    /// All numbers with exactly `digits` digits in this base satisfying
    /// the self-power equation, sorted ascending and deduplicated.
    ///
    /// Sequential below the parallel threshold, digit fan-out across the
    /// rayon pool at or above it; the choice is not observable in the
    /// result.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is 0 or its level has not been built (call
    /// [`Self::ensure_levels`] first).
    pub fn search(&self, digits: usize) -> Vec<Int96> {
        assert!(digits >= 1, "searches need at least one digit");
        assert!(
            digits <= self.levels_built(),
            "level {} not built yet (have {})",
            digits,
            self.levels_built()
        );
        crate::search::run(self, digits)
    }
}
