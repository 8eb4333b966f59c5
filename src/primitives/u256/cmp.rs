//! Equality, hashing and ordering for `U256`
//!
//! All of these look at the eight limbs only. The significant length
//! hint never takes part, so values built by different constructors
//! compare and hash alike.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::core::U256;

impl U256 {
    /// Unsigned comparison of two values.
    ///
    /// Scans from the most significant limb down and returns the order of
    /// the first differing limb.
    pub fn compare(a: &U256, b: &U256) -> Ordering {
        for (x, y) in a.limbs.iter().rev().zip(b.limbs.iter().rev()) {
            match x.cmp(y) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().fold(0, |acc, &limb| acc | limb) == 0
    }
}

impl PartialEq for U256 {
    fn eq(&self, other: &Self) -> bool {
        self.limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(0, |acc, (&a, &b)| acc | (a ^ b))
            == 0
    }
}

impl Eq for U256 {}

impl Hash for U256 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        U256::compare(self, other)
    }
}
