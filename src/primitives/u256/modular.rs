//! Modular arithmetic on `U256`
//!
//! These are the reduction operations a 256-bit word machine exposes as
//! opcodes. Each one computes its intermediate result at full precision
//! (up to 512 bits) before reducing, so no bit is lost.
//!
//! A zero modulus is not an error: every operation returns zero.

use super::core::{N_LIMBS, U256};
use super::knuth::knuth_remainder;
use super::limbs::{abs, mul_wide, negate};

impl U256 {
    /// Unsigned remainder `self mod modulus`.
    ///
    /// Returns zero if either operand is zero.
    pub fn modulo(&self, modulus: &U256) -> U256 {
        if self.is_zero() || modulus.is_zero() {
            return U256::ZERO;
        }

        U256::new(knuth_remainder(&self.limbs, &modulus.limbs), modulus.len)
    }

    /// Signed remainder, reading both operands as two's-complement integers.
    ///
    /// The division truncates toward zero, so the result takes the sign of
    /// the dividend: `-7 signed_modulo 3 == -1` and `7 signed_modulo -3 == 1`.
    ///
    /// Returns zero if either operand is zero.
    pub fn signed_modulo(&self, modulus: &U256) -> U256 {
        if self.is_zero() || modulus.is_zero() {
            return U256::ZERO;
        }

        let mut x = self.limbs;
        let mut y = modulus.limbs;
        abs(&mut x);
        abs(&mut y);

        let mut r = knuth_remainder(&x, &y);
        if self.is_negative() {
            negate(&mut r);
        }

        U256::from_limbs_exact(r)
    }

    /// Modular addition `(self + other) mod modulus`.
    ///
    /// The sum is formed with a ninth carry limb before the reduction.
    /// Returns zero if the modulus is zero.
    pub fn add_mod(&self, other: &U256, modulus: &U256) -> U256 {
        if modulus.is_zero() {
            return U256::ZERO;
        }

        let (sum, carry) = self.overflowing_add(other);

        let mut wide = [0u32; N_LIMBS + 1];
        wide[..N_LIMBS].copy_from_slice(&sum.limbs);
        wide[N_LIMBS] = carry as u32;

        U256::new(knuth_remainder(&wide, &modulus.limbs), modulus.len)
    }

    /// Modular multiplication `(self * other) mod modulus`.
    ///
    /// The full 512-bit product is reduced. Returns zero if any operand is
    /// zero.
    pub fn mul_mod(&self, other: &U256, modulus: &U256) -> U256 {
        if self.is_zero() || other.is_zero() || modulus.is_zero() {
            return U256::ZERO;
        }

        let product = mul_wide(
            &self.limbs,
            self.significant_limbs(),
            &other.limbs,
            other.significant_limbs(),
        );

        U256::new(knuth_remainder(&product, &modulus.limbs), modulus.len)
    }
}
