// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruned backtracking search over digit assignments.
//!
//! Digits are chosen from the most significant position down. The state of
//! a call is just `(n, first, balance)`: positions remaining, whether the
//! leading digit is still to be placed (digit 0 forbidden there), and the
//! value the remaining positions must contribute for the self-power
//! equation to close. Before branching, a call is pruned against level
//! `n`'s achievable balance interval and reachable-residue set; a leaf
//! (`n == 0`) that survives the range check has balance exactly zero and
//! yields one answer, assembled digit by digit as the recursion unwinds.
//!
//! # Dual-width arithmetic
//!
//! Balances start tiny and mostly stay within i64, but can cross 64 bits
//! mid-branch for the larger bases. The recursion is generic over a
//! [`Balance`] capability implemented for both `i64` and [`Int96`]; each
//! step picks the next instantiation by a fits-check. Both paths run the
//! identical algorithm - the width is never observable in the results.
//!
//! # Parallel decomposition
//!
//! At or above the context's parallel threshold, a call fans out one rayon
//! task per digit choice and merges the joined results exactly like the
//! sequential union. Below the threshold it recurses depth-first on the
//! calling thread, so scheduling overhead is only paid where subtrees are
//! large enough to amortise it. Tasks share nothing mutable: they read
//! `&SearchContext` and return fresh arrays.

use rayon::prelude::*;

use crate::constants::NARROW_SAFE_BOUND;
use crate::context::SearchContext;
use crate::numeric::Int96;
use crate::results::merge;

/// Search entry point; see [`SearchContext::search`].
pub fn run(ctx: &SearchContext, digits: usize) -> Vec<Int96> {
    find_parallel(ctx, digits, true, Int96::ZERO)
}

/// The balance as carried by the next recursive call.
enum Step {
    Narrow(i64),
    Wide(Int96),
}

/// Arithmetic capability the recursion needs from a balance value.
///
/// Implemented for `i64` (narrow path) and [`Int96`] (wide path). `prune`
/// folds the range check, the leaf case and the residue check into one
/// early return; `step` subtracts a digit delta and decides the width of
/// the next call.
trait Balance: Copy {
    /// `Some(result)` when the call is decided without branching: an empty
    /// array when pruned, the single zero answer at a surviving leaf.
    fn prune(self, ctx: &SearchContext, n: usize) -> Option<Vec<Int96>>;

    /// Balance for the child call after placing a digit with this delta.
    fn step(self, delta: Int96) -> Step;
}

impl Balance for i64 {
    fn prune(self, ctx: &SearchContext, n: usize) -> Option<Vec<Int96>> {
        let level = ctx.level(n);
        if !level.balance_in_range(Int96::from(self)) {
            return Some(Vec::new());
        }
        if n == 0 {
            return Some(vec![Int96::ZERO]);
        }
        if !level.reachable().contains(self.rem_euclid(ctx.modulus()) as usize) {
            return Some(Vec::new());
        }
        None
    }

    fn step(self, delta: Int96) -> Step {
        match delta.to_i64() {
            Some(d) if fits_narrow(self) && fits_narrow(d) => Step::Narrow(self - d),
            _ => Step::Wide(Int96::from(self) - delta),
        }
    }
}

impl Balance for Int96 {
    fn prune(self, ctx: &SearchContext, n: usize) -> Option<Vec<Int96>> {
        let level = ctx.level(n);
        if !level.balance_in_range(self) {
            return Some(Vec::new());
        }
        if n == 0 {
            return Some(vec![Int96::ZERO]);
        }
        if !level.reachable().contains(self.rem_by(ctx.modulus()) as usize) {
            return Some(Vec::new());
        }
        None
    }

    fn step(self, delta: Int96) -> Step {
        let next = self - delta;
        match next.to_i64() {
            Some(b) => Step::Narrow(b),
            None => Step::Wide(next),
        }
    }
}

/// One i64 search step subtracts one delta; keeping both operands under
/// this bound guarantees the subtraction cannot overflow.
fn fits_narrow(x: i64) -> bool {
    x.abs() < NARROW_SAFE_BOUND
}

/// Candidate digits for a position: the leading position skips 0.
fn digit_range(base: usize, first: bool) -> std::ops::Range<usize> {
    usize::from(first)..base
}

/// Fix digit `d` at `position` into every answer of a completed subtree.
fn with_digit(ctx: &SearchContext, position: usize, d: usize, answers: Vec<Int96>) -> Vec<Int96> {
    if answers.is_empty() {
        return answers;
    }
    let shift = ctx.powers().positional(position) * d as i64;
    // Adding one constant to a sorted deduplicated array preserves both.
    answers.into_iter().map(|a| a + shift).collect()
}

/// Depth-first recursion, generic over the balance width.
fn find<B: Balance>(ctx: &SearchContext, n: usize, first: bool, bal: B) -> Vec<Int96> {
    if let Some(ready) = bal.prune(ctx, n) {
        return ready;
    }
    let level = ctx.level(n);
    let mut answers = Vec::new();
    for d in digit_range(ctx.base(), first) {
        let sub = match bal.step(level.delta(d)) {
            Step::Narrow(b) => find(ctx, n - 1, false, b),
            Step::Wide(b) => find(ctx, n - 1, false, b),
        };
        answers = merge(answers, with_digit(ctx, n - 1, d, sub));
    }
    answers
}

/// Digit fan-out across the rayon pool while `n` is at or above the
/// threshold; plain depth-first recursion below it.
fn find_parallel(ctx: &SearchContext, n: usize, first: bool, bal: Int96) -> Vec<Int96> {
    if n < ctx.parallel_threshold() {
        return match bal.to_i64() {
            Some(b) => find(ctx, n, first, b),
            None => find(ctx, n, first, bal),
        };
    }
    if let Some(ready) = bal.prune(ctx, n) {
        return ready;
    }
    let level = ctx.level(n);
    digit_range(ctx.base(), first)
        .into_par_iter()
        .map(|d| {
            let sub = find_parallel(ctx, n - 1, false, bal - level.delta(d));
            with_digit(ctx, n - 1, d, sub)
        })
        .reduce(Vec::new, merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(base: usize, digits: usize) -> SearchContext {
        let mut ctx = SearchContext::new(base);
        ctx.ensure_levels(digits);
        ctx
    }

    fn as_i64(answers: &[Int96]) -> Vec<i64> {
        answers.iter().map(|a| a.to_i64().unwrap()).collect()
    }

    #[test]
    fn test_base10_single_digit() {
        // 1^1 = 1 is the only single-digit self-power number; 0 is
        // excluded by the leading-digit rule.
        let ctx = context(10, 1);
        assert_eq!(as_i64(&ctx.search(1)), vec![1]);
    }

    #[test]
    fn test_base10_short_lengths_empty() {
        let ctx = context(10, 3);
        assert!(ctx.search(2).is_empty());
        assert!(ctx.search(3).is_empty());
    }

    #[test]
    fn test_base10_four_digits() {
        // 3435 = 3^3 + 4^4 + 3^3 + 5^5.
        let ctx = context(10, 4);
        assert_eq!(as_i64(&ctx.search(4)), vec![3435]);
    }

    #[test]
    fn test_narrow_and_wide_paths_agree() {
        let ctx = context(8, 5);
        for n in 1..=5 {
            let narrow = find(&ctx, n, true, 0i64);
            let wide = find(&ctx, n, true, Int96::ZERO);
            assert_eq!(narrow, wide, "width mismatch at {} digits", n);
        }
    }

    #[test]
    fn test_results_sorted_dedup() {
        let ctx = context(5, 4);
        for n in 1..=4 {
            let answers = ctx.search(n);
            for w in answers.windows(2) {
                assert!(w[0] < w[1], "not strictly ascending at {} digits", n);
            }
        }
    }

    #[test]
    fn test_parallel_fanout_matches_sequential() {
        let seq = context(6, 6);
        let par = context(6, 6).with_parallel_threshold(2);
        for n in 1..=6 {
            assert_eq!(seq.search(n), par.search(n), "mismatch at {} digits", n);
        }
    }
}
