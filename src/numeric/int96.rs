// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 96-bit signed integer stored as three 32-bit limbs.
//!
//! Arithmetic is two's-complement with wraparound: the limbs behave exactly
//! like a 96-bit hardware register. Addition, subtraction and multiplication
//! propagate carries limb by limb; division and modulo operate on the
//! absolute value (which always fits a u128) and reapply the sign.
//!
//! # Examples
//!
//! ```
//! use munchausen_search::Int96;
//!
//! let a = Int96::from(123_456_789_123_456_789i64);
//! assert_eq!((a * 10 + 1).to_string(), "1234567891234567891");
//! assert_eq!(Int96::from(-3).rem_by(10), 7);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::{NarrowingError, ParseIntError};

/// A 96-bit two's-complement integer.
///
/// `Copy` and 12 bytes; all operations return new values. Overflow wraps
/// silently - callers are responsible for keeping magnitudes in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int96 {
    lo: u32,
    mid: u32,
    hi: u32,
}

impl Int96 {
    /// The additive identity.
    pub const ZERO: Int96 = Int96 { lo: 0, mid: 0, hi: 0 };

    /// The multiplicative identity.
    pub const ONE: Int96 = Int96 { lo: 1, mid: 0, hi: 0 };

    const fn from_limbs(lo: u32, mid: u32, hi: u32) -> Self {
        Self { lo, mid, hi }
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(self) -> bool {
        (self.hi as i32) < 0
    }

    /// Two's-complement negation (wraps on the most negative value).
    pub fn wrapping_neg(self) -> Self {
        let r0 = (!self.lo) as u64 + 1;
        let r1 = (!self.mid) as u64 + (r0 >> 32);
        let r2 = (!self.hi) as u64 + (r1 >> 32);
        Self::from_limbs(r0 as u32, r1 as u32, r2 as u32)
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Whether the value is representable as an i64.
    ///
    /// True exactly when the high limb is the sign extension of the middle
    /// limb, i.e. the top two limbs are sign-consistent.
    pub fn fits_i64(self) -> bool {
        self.hi as i32 == (self.mid as i32) >> 31
    }

    /// Narrow to i64, or `None` when the value does not fit.
    pub fn to_i64(self) -> Option<i64> {
        if self.fits_i64() {
            Some((self.lo as u64 | (self.mid as u64) << 32) as i64)
        } else {
            None
        }
    }

    /// Widen to i128 (always exact; 96 bits fit with room to spare).
    pub fn to_i128(self) -> i128 {
        let raw = self.lo as u128 | (self.mid as u128) << 32 | (self.hi as u128) << 64;
        // Sign-extend from bit 95.
        ((raw as i128) << 32) >> 32
    }

    /// The magnitude as an unsigned 128-bit value.
    fn magnitude(self) -> u128 {
        let a = self.abs();
        a.lo as u128 | (a.mid as u128) << 32 | (a.hi as u128) << 64
    }

    fn from_magnitude(m: u128, negative: bool) -> Self {
        let v = Self::from_limbs(m as u32, (m >> 32) as u32, (m >> 64) as u32);
        if negative {
            v.wrapping_neg()
        } else {
            v
        }
    }

    /// Truncating division by a strictly positive native divisor.
    ///
    /// The absolute value is divided and the dividend's sign reapplied, so
    /// the quotient truncates toward zero like native integer division.
    ///
    /// # Panics
    ///
    /// Panics if `divisor <= 0`.
    pub fn div_by(self, divisor: i64) -> Self {
        assert!(divisor > 0, "divisor must be strictly positive: {}", divisor);
        let q = self.magnitude() / divisor as u128;
        Self::from_magnitude(q, self.is_negative())
    }

    /// True mathematical modulo by a strictly positive native divisor.
    ///
    /// The result is always in `[0, divisor)`, for negative values too:
    /// `Int96::from(-3).rem_by(10) == 7`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor <= 0`.
    pub fn rem_by(self, divisor: i64) -> i64 {
        assert!(divisor > 0, "divisor must be strictly positive: {}", divisor);
        let r = (self.magnitude() % divisor as u128) as i64;
        if self.is_negative() && r != 0 {
            divisor - r
        } else {
            r
        }
    }

    /// Render in an arbitrary radix by repeated division of the absolute
    /// value. Zero is `"0"`; negative values carry a leading minus sign.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn to_string_radix(self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36: {}", radix);
        if self == Self::ZERO {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        let mut a = self.abs();
        while a != Self::ZERO {
            let d = a.rem_by(radix as i64) as u32;
            digits.push(char::from_digit(d, radix).unwrap());
            a = a.div_by(radix as i64);
        }
        if self.is_negative() {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }

    /// Parse from a digit string in the given radix.
    ///
    /// Accepts an optional leading `-`; digit characters follow
    /// [`char::to_digit`] (case-insensitive above 9). Values wider than 96
    /// bits wrap, consistent with the arithmetic.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseIntError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseIntError::InvalidRadix(radix));
        }
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseIntError::Empty);
        }
        let mut acc = Self::ZERO;
        for c in digits.chars() {
            let d = c
                .to_digit(radix)
                .ok_or(ParseIntError::InvalidDigit { digit: c, radix })?;
            acc = acc * radix as i64 + d as i64;
        }
        Ok(if negative { acc.wrapping_neg() } else { acc })
    }
}

impl From<i32> for Int96 {
    fn from(x: i32) -> Self {
        let ext = if x < 0 { u32::MAX } else { 0 };
        Self::from_limbs(x as u32, ext, ext)
    }
}

impl From<i64> for Int96 {
    fn from(x: i64) -> Self {
        let ext = if x < 0 { u32::MAX } else { 0 };
        Self::from_limbs(x as u32, (x >> 32) as u32, ext)
    }
}

impl TryFrom<Int96> for i64 {
    type Error = NarrowingError;

    fn try_from(value: Int96) -> Result<Self, Self::Error> {
        value.to_i64().ok_or(NarrowingError)
    }
}

impl Neg for Int96 {
    type Output = Int96;

    fn neg(self) -> Int96 {
        self.wrapping_neg()
    }
}

impl Add for Int96 {
    type Output = Int96;

    fn add(self, rhs: Int96) -> Int96 {
        let r0 = self.lo as u64 + rhs.lo as u64;
        let r1 = self.mid as u64 + rhs.mid as u64 + (r0 >> 32);
        let r2 = self.hi as u64 + rhs.hi as u64 + (r1 >> 32);
        Int96::from_limbs(r0 as u32, r1 as u32, r2 as u32)
    }
}

impl Sub for Int96 {
    type Output = Int96;

    fn sub(self, rhs: Int96) -> Int96 {
        // a - b == a + !b + 1 in two's complement.
        let r0 = self.lo as u64 + (!rhs.lo) as u64 + 1;
        let r1 = self.mid as u64 + (!rhs.mid) as u64 + (r0 >> 32);
        let r2 = self.hi as u64 + (!rhs.hi) as u64 + (r1 >> 32);
        Int96::from_limbs(r0 as u32, r1 as u32, r2 as u32)
    }
}

impl Add<i64> for Int96 {
    type Output = Int96;

    fn add(self, rhs: i64) -> Int96 {
        self + Int96::from(rhs)
    }
}

impl Sub<i64> for Int96 {
    type Output = Int96;

    fn sub(self, rhs: i64) -> Int96 {
        self - Int96::from(rhs)
    }
}

impl Mul<i64> for Int96 {
    type Output = Int96;

    /// Wrapping multiply by a native integer.
    ///
    /// Schoolbook limb products against the sign-extended multiplier; only
    /// the columns contributing to the low 96 bits are formed.
    fn mul(self, rhs: i64) -> Int96 {
        let x0 = rhs as u32 as u64;
        let x1 = (rhs >> 32) as u32 as u64;
        let x2 = if rhs < 0 { u32::MAX as u64 } else { 0 };
        let a0 = self.lo as u64;
        let a1 = self.mid as u64;
        let a2 = self.hi as u64;
        let r0 = a0 * x0;
        // Column 1 can exceed 64 bits before truncation.
        let r1 = (a1 * x0) as u128 + (a0 * x1) as u128 + (r0 >> 32) as u128;
        let r2 = a2
            .wrapping_mul(x0)
            .wrapping_add(a1.wrapping_mul(x1))
            .wrapping_add(a0.wrapping_mul(x2))
            .wrapping_add((r1 >> 32) as u64);
        Int96::from_limbs(r0 as u32, r1 as u32, r2 as u32)
    }
}

impl Ord for Int96 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_i128().cmp(&other.to_i128())
    }
}

impl PartialOrd for Int96 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Int96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(10))
    }
}
