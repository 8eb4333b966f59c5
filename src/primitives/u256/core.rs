//! 256-bit unsigned integer primitive
//!
//! This module defines the fixed-size 256-bit unsigned integer type
//! (`U256`) used as the machine word of the execution engine.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Every value is exactly 256 bits wide
//! and arithmetic never allocates.
//!
//! The internal representation is eight 32-bit limbs in **little-endian**
//! limb order (`limbs[0]` holds bits 0..32). A secondary significant
//! length is carried alongside the limbs so that the arithmetic kernels
//! can skip leading zero limbs without rescanning them.

use std::fmt::{Debug, Display, Formatter, LowerHex, Result};

/// Number of 32-bit limbs in a `U256`.
pub(crate) const N_LIMBS: usize = 8;

/// Bit width of a single limb.
pub(crate) const LIMB_BITS: u32 = 32;

/// Fixed-size 256-bit unsigned integer.
///
/// Values are immutable once built and are only created through the
/// named constructors and conversions of this crate.
///
/// The significant length is a performance hint: two values with the
/// same limbs are equal, hash the same and compare equal no matter which
/// constructor produced them.
#[derive(Copy, Clone)]
pub struct U256 {
    pub(crate) limbs: [u32; N_LIMBS],
    pub(crate) len: u8,
}

impl U256 {
    /// Width of the integer in bits.
    pub const BITS: u32 = 256;

    /// Width of the integer in bytes.
    pub const BYTES: usize = 32;

    /// The value zero.
    pub const ZERO: Self = Self::new([0; N_LIMBS], 0);

    /// The value one.
    pub const ONE: Self = Self::new([1, 0, 0, 0, 0, 0, 0, 0], 1);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self::new([u32::MAX; N_LIMBS], N_LIMBS as u8);

    /// Builds a value from limbs and a significant length hint.
    ///
    /// Callers must guarantee that every limb at index `>= len` is zero.
    pub(crate) const fn new(limbs: [u32; N_LIMBS], len: u8) -> Self {
        Self { limbs, len }
    }

    /// Builds a value from limbs, computing the exact significant length.
    pub(crate) fn from_limbs_exact(limbs: [u32; N_LIMBS]) -> Self {
        let len = super::limbs::significant_limbs(&limbs) as u8;
        Self::new(limbs, len)
    }

    /// Returns the little-endian limbs of the value.
    pub const fn limbs(&self) -> &[u32; N_LIMBS] {
        &self.limbs
    }

    /// Returns the significant length hint.
    ///
    /// This is an upper bound on the number of non-zero low limbs. It is
    /// not necessarily tight: `from_bytes_be` for instance reports the
    /// length of its input even when that input has leading zeros.
    pub const fn significant_limbs(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if bit 255 is set.
    ///
    /// Under a two's-complement reading this is the sign bit.
    pub const fn is_negative(&self) -> bool {
        (self.limbs[N_LIMBS - 1] as i32) < 0
    }

    /// Two's-complement negation modulo 2²⁵⁶.
    pub fn negate(&self) -> Self {
        let mut limbs = self.limbs;
        super::limbs::negate(&mut limbs);
        Self::from_limbs_exact(limbs)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.limbs.iter().rev() {
            if limb == 0 {
                count += LIMB_BITS;
            } else {
                return count + limb.leading_zeros();
            }
        }

        count
    }
}

impl Default for U256 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl LowerHex for U256 {
    /// Formats the value as 64 lowercase hexadecimal digits.
    ///
    /// The `#` flag adds the `0x` prefix.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        for limb in self.limbs.iter().rev() {
            write!(f, "{:08x}", limb)?;
        }

        Ok(())
    }
}

impl Display for U256 {
    /// Formats the value as a `0x`-prefixed, zero-padded hexadecimal string.
    ///
    /// Example:
    /// `0x000...002a`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:#x}", self)
    }
}

impl Debug for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "U256({:#x})", self)
    }
}
