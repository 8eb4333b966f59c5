//! Conversions between `U256` and big-endian byte representations
//!
//! These conversions are the boundary to the outside world:
//! - decoding words read from calldata, storage or memory
//! - encoding results back into their 32-byte form
//!
//! Byte strings are always big-endian. Shorter inputs are treated as if
//! left-padded with zeros; longer inputs are rejected.

use crate::primitives::u256::core::{N_LIMBS, U256};
use crate::primitives::u256::error::U256Error;

/// Bytes per limb.
const LIMB_BYTES: usize = 4;

impl U256 {
    /// Builds a `U256` from a big-endian byte string of at most 32 bytes.
    ///
    /// The input is left-padded with zeros to a whole number of limbs.
    ///
    /// # Errors
    /// Returns [`U256Error::InvalidLength`] if `bytes` is longer than 32.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, U256Error> {
        if bytes.len() > U256::BYTES {
            log::debug!("rejecting {}-byte input for a 256-bit word", bytes.len());
            return Err(U256Error::InvalidLength { len: bytes.len() });
        }

        let n_limbs = bytes.len().div_ceil(LIMB_BYTES);
        let mut padded = [0u8; U256::BYTES];
        padded[U256::BYTES - bytes.len()..].copy_from_slice(bytes);

        let mut limbs = [0u32; N_LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(padded.rchunks_exact(LIMB_BYTES)) {
            *limb = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Ok(U256::new(limbs, n_limbs as u8))
    }

    /// Encodes the value as exactly 32 big-endian bytes.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let mut out = [0u8; U256::BYTES];

        for (chunk, limb) in out.chunks_exact_mut(LIMB_BYTES).zip(self.limbs.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }
}

/// Converts a `U256` into a 32-byte big-endian array.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_bytes_be()
    }
}

/// Converts a 32-byte array into a `U256`.
///
/// The input is interpreted as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        let mut limbs = [0u32; N_LIMBS];

        for (limb, chunk) in limbs.iter_mut().zip(value.rchunks_exact(LIMB_BYTES)) {
            *limb = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256::from_limbs_exact(limbs)
    }
}

/// Attempts to build a `U256` from a big-endian byte slice.
///
/// Fails if the slice is longer than 32 bytes.
impl TryFrom<&[u8]> for U256 {
    type Error = U256Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        U256::from_bytes_be(value)
    }
}
