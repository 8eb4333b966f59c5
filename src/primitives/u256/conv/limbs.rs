//! Conversions between `U256` and 32-bit limb arrays
//!
//! Unlike the byte conversions, limb arrays are **little-endian**: index
//! 0 holds the least significant 32 bits. This matches the internal
//! representation, so these conversions are plain copies.

use crate::primitives::u256::core::{N_LIMBS, U256};

impl U256 {
    /// Builds a `U256` from little-endian limbs.
    ///
    /// Input longer than eight limbs is truncated; shorter input is padded
    /// with zero limbs.
    pub fn from_limbs(limbs: &[u32]) -> Self {
        let len = limbs.len().min(N_LIMBS);
        let mut out = [0u32; N_LIMBS];
        out[..len].copy_from_slice(&limbs[..len]);

        U256::new(out, len as u8)
    }
}

/// Builds a `U256` from eight little-endian limbs.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        U256::from_limbs_exact(value)
    }
}

/// Splits a `U256` into eight little-endian limbs.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        value.limbs
    }
}
