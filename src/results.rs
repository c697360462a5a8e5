// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result aggregation.
//!
//! Every answer array in the crate - a branch result, a parallel task
//! result, a per-digit-count result, the all-lengths report - is kept
//! sorted ascending and deduplicated. [`merge`] is the single union
//! operation that maintains that invariant, used identically by the
//! sequential recursion, the rayon reduce, and the driver.

use crate::numeric::Int96;

/// Union of two sorted, deduplicated answer arrays.
///
/// Associative, commutative and idempotent, with the empty array as
/// identity - the properties that make the parallel reduce order-blind.
pub fn merge(a: Vec<Int96>, b: Vec<Int96>) -> Vec<Int96> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
