//! Addition and operator traits for `U256`
//!
//! Plain addition has two implementations with one contract:
//! - a scalar ripple-carry adder over the eight 32-bit limbs
//! - a lane-parallel adder over four 64-bit lanes (see `lanes`)
//!
//! The `speed` feature selects the lane-parallel adder for
//! [`U256::overflowing_add`] and everything built on it. Both are always
//! compiled so that they can be checked against each other.

use std::ops::{Add, Rem};

use super::core::{N_LIMBS, U256};
use super::limbs::add_with_carry;

/// Scalar ripple-carry `a + b`.
///
/// Returns the sum modulo 2²⁵⁶ and whether the addition overflowed.
pub(crate) fn add_scalar(a: &U256, b: &U256) -> (U256, bool) {
    let sum = add_with_carry(&a.limbs, &b.limbs);

    let mut limbs = [0u32; N_LIMBS];
    limbs.copy_from_slice(&sum[..N_LIMBS]);

    (U256::from_limbs_exact(limbs), sum[N_LIMBS] != 0)
}

#[cfg(not(feature = "speed"))]
use self::add_scalar as add_impl;

#[cfg(feature = "speed")]
use super::lanes::add_lanes as add_impl;

impl U256 {
    /// Computes `self + other`.
    ///
    /// Returns the sum modulo 2²⁵⁶ together with the carry out of bit 255.
    pub fn overflowing_add(&self, other: &U256) -> (U256, bool) {
        add_impl(self, other)
    }

    /// Computes `self + other` modulo 2²⁵⁶.
    pub fn wrapping_add(&self, other: &U256) -> U256 {
        self.overflowing_add(other).0
    }
}

/// Wrapping addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.wrapping_add(&rhs)
    }
}

/// Unsigned remainder; a zero modulus yields zero instead of panicking.
impl Rem for U256 {
    type Output = U256;

    fn rem(self, rhs: U256) -> Self::Output {
        self.modulo(&rhs)
    }
}
