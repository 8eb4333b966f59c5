//! Conversions between `U256` and native integers
//!
//! Widening conversions place the integer in the least significant limbs.
//! Signed integers contribute their raw bit pattern; they are **not**
//! sign-extended to 256 bits.
//!
//! Narrowing is available in two flavours:
//! - `int_value` / `long_value`: truncating views of the low bits
//! - `TryFrom<U256>`: checked conversions that fail if high bits are set

use crate::primitives::u256::core::{N_LIMBS, U256};

impl U256 {
    /// Builds a `U256` from the bit pattern of an `i32`.
    ///
    /// Zero maps to [`U256::ZERO`].
    pub fn from_i32(value: i32) -> Self {
        if value == 0 {
            return U256::ZERO;
        }

        let mut limbs = [0u32; N_LIMBS];
        limbs[0] = value as u32;
        U256::new(limbs, 1)
    }

    /// Builds a `U256` from the bit pattern of an `i64`.
    ///
    /// Zero maps to [`U256::ZERO`].
    pub fn from_i64(value: i64) -> Self {
        if value == 0 {
            return U256::ZERO;
        }

        let mut limbs = [0u32; N_LIMBS];
        limbs[0] = value as u32;
        limbs[1] = ((value as u64) >> 32) as u32;
        U256::new(limbs, 2)
    }

    /// Returns the low 32 bits, silently discarding the rest.
    pub fn int_value(&self) -> i32 {
        self.limbs[0] as i32
    }

    /// Returns the low 64 bits, silently discarding the rest.
    pub fn long_value(&self) -> i64 {
        (self.limbs[0] as u64 | ((self.limbs[1] as u64) << 32)) as i64
    }
}

/// Converts a `u32` into a `U256`.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        U256::from_i32(value as i32)
    }
}

/// Converts a `u64` into a `U256`.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from_i64(value as i64)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.limbs[2..].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.long_value() as u64)
    }
}
