//! Limb-level arithmetic kernels
//!
//! Helpers operating on little-endian `u32` limb slices. They are shared
//! by the value-level operations and the Knuth division engine.
//!
//! Every product and sum is formed in `u64` so that no bit of a 32-bit
//! limb operation is ever lost to wraparound.

use std::cmp::Ordering;

use super::core::{LIMB_BITS, N_LIMBS};

/// Mask selecting the low limb of a double-limb value.
pub(crate) const LIMB_MASK: u64 = 0xFFFF_FFFF;

/// Number of low limbs needed to represent `x` without leading zeros.
pub(crate) fn significant_limbs(x: &[u32]) -> usize {
    x.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1)
}

/// Compares two limb slices, each trimmed to its significant length.
pub(crate) fn compare_limbs(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert_eq!(significant_limbs(a), a.len());
    debug_assert_eq!(significant_limbs(b), b.len());

    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Two's-complement negation in place: complement, then add one.
pub(crate) fn negate(x: &mut [u32]) {
    let mut carry = 1u64;

    for limb in x.iter_mut() {
        let sum = (!*limb) as u64 + carry;
        *limb = sum as u32;
        carry = sum >> LIMB_BITS;
    }
}

/// Absolute value of a two's-complement number, in place.
pub(crate) fn abs(x: &mut [u32; N_LIMBS]) {
    if (x[N_LIMBS - 1] as i32) < 0 {
        negate(x);
    }
}

/// Shifts `src` left by `shift < 32` bits into `dst`.
///
/// Bits shifted out of the top of `src` land in `dst[src.len()]` when
/// `dst` is long enough; otherwise they must be zero.
pub(crate) fn shl_into(dst: &mut [u32], src: &[u32], shift: u32) {
    debug_assert!(shift < LIMB_BITS);
    debug_assert!(dst.len() >= src.len());

    let mut carry = 0u32;

    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s << shift) | carry;
        carry = if shift == 0 { 0 } else { s >> (LIMB_BITS - shift) };
    }

    match dst.get_mut(src.len()) {
        Some(d) => *d = carry,
        None => debug_assert_eq!(carry, 0),
    }
}

/// Shifts the low `dst.len()` limbs of `src` right by `shift < 32` bits.
///
/// `src` must hold at least one limb more than `dst`; that extra limb
/// supplies the bits shifted into the top of `dst`.
pub(crate) fn shr_into(dst: &mut [u32], src: &[u32], shift: u32) {
    debug_assert!(shift < LIMB_BITS);
    debug_assert!(src.len() > dst.len());

    for (i, d) in dst.iter_mut().enumerate() {
        *d = if shift == 0 {
            src[i]
        } else {
            (src[i] >> shift) | (src[i + 1] << (LIMB_BITS - shift))
        };
    }
}

/// Schoolbook ripple-carry addition.
///
/// Returns the full 257-bit sum, the carry out landing in the ninth limb.
pub(crate) fn add_with_carry(a: &[u32; N_LIMBS], b: &[u32; N_LIMBS]) -> [u32; N_LIMBS + 1] {
    let mut sum = [0u32; N_LIMBS + 1];
    let mut carry = 0u64;

    for ((s, &x), &y) in sum.iter_mut().zip(a).zip(b) {
        let t = x as u64 + y as u64 + carry;
        *s = t as u32;
        carry = t >> LIMB_BITS;
    }

    sum[N_LIMBS] = carry as u32;
    sum
}

/// Schoolbook long multiplication producing the full 512-bit product.
///
/// Only the first `a_len` and `b_len` limbs of the operands are visited;
/// limbs above those lengths must be zero.
pub(crate) fn mul_wide(
    a: &[u32; N_LIMBS],
    a_len: usize,
    b: &[u32; N_LIMBS],
    b_len: usize,
) -> [u32; 2 * N_LIMBS] {
    let mut product = [0u32; 2 * N_LIMBS];

    for (i, &y) in b[..b_len].iter().enumerate() {
        let y = y as u64;
        let mut carry = 0u64;

        // (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1, so this never overflows.
        for (j, &x) in a[..a_len].iter().enumerate() {
            let t = product[i + j] as u64 + x as u64 * y + carry;
            product[i + j] = t as u32;
            carry = t >> LIMB_BITS;
        }

        product[i + a_len] = carry as u32;
    }

    product
}
