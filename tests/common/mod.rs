// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared test helpers: a naive reference enumerator for self-power
//! numbers, used to cross-check the pruned search on small bases.

/// `d^d` with the `0^0 = 0` convention, exact in i128.
pub fn self_power(d: u32) -> i128 {
    if d == 0 {
        0
    } else {
        (d as i128).pow(d)
    }
}

/// Every number with exactly `digits` digits in `base` equal to the sum of
/// its digits' self-powers, by direct enumeration. Sorted ascending.
///
/// The single-digit case starts at 1: a leading digit is never zero.
pub fn brute_force(base: u32, digits: u32) -> Vec<i128> {
    let lo = if digits == 1 {
        1
    } else {
        (base as i128).pow(digits - 1)
    };
    let hi = (base as i128).pow(digits);
    (lo..hi)
        .filter(|&x| {
            let mut sum = 0i128;
            let mut v = x;
            while v > 0 {
                sum += self_power((v % base as i128) as u32);
                v /= base as i128;
            }
            sum == x
        })
        .collect()
}
