//! Lane-parallel addition
//!
//! Adds two `U256` values as four independent 64-bit lanes and resolves
//! the carries between lanes with a single table lookup instead of a
//! sequential ripple over the limbs.
//!
//! Per lane, two facts are collected into 4-bit masks:
//! - *overflow*: the lane sum wrapped (it is smaller than an input)
//! - *cascade*: the lane sum is all ones, so an incoming carry passes
//!   straight through it
//!
//! Adding `cascade` to `overflow << 1` lets the integer adder do the
//! propagation: the bits that differ from `cascade` afterwards are exactly
//! the lanes receiving a carry, and bit 4 is the carry out of the top
//! lane. This mirrors how SIMD implementations move the lane masks to a
//! scalar register and back.

use super::core::{LIMB_BITS, N_LIMBS, U256};

/// Number of 64-bit lanes.
const N_LANES: usize = N_LIMBS / 2;

/// Per-lane increments indexed by the incoming-carry pattern.
///
/// Entry `p` holds 1 in lane `i` iff bit `i` of `p` is set.
const BROADCAST_LOOKUP: [[u64; N_LANES]; 16] = [
    [0, 0, 0, 0],
    [1, 0, 0, 0],
    [0, 1, 0, 0],
    [1, 1, 0, 0],
    [0, 0, 1, 0],
    [1, 0, 1, 0],
    [0, 1, 1, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 1],
    [1, 0, 0, 1],
    [0, 1, 0, 1],
    [1, 1, 0, 1],
    [0, 0, 1, 1],
    [1, 0, 1, 1],
    [0, 1, 1, 1],
    [1, 1, 1, 1],
];

/// Packs pairs of adjacent limbs into 64-bit lanes.
fn to_lanes(limbs: &[u32; N_LIMBS]) -> [u64; N_LANES] {
    let mut lanes = [0u64; N_LANES];

    for (lane, pair) in lanes.iter_mut().zip(limbs.chunks_exact(2)) {
        *lane = pair[0] as u64 | ((pair[1] as u64) << LIMB_BITS);
    }

    lanes
}

/// Splits 64-bit lanes back into little-endian limbs.
fn from_lanes(lanes: &[u64; N_LANES]) -> [u32; N_LIMBS] {
    let mut limbs = [0u32; N_LIMBS];

    for (pair, &lane) in limbs.chunks_exact_mut(2).zip(lanes) {
        pair[0] = lane as u32;
        pair[1] = (lane >> LIMB_BITS) as u32;
    }

    limbs
}

/// Lane-parallel `a + b`.
///
/// Returns the sum modulo 2²⁵⁶ and whether the addition overflowed.
/// The result is bit-identical to [`add_scalar`](super::ops::add_scalar).
pub(crate) fn add_lanes(a: &U256, b: &U256) -> (U256, bool) {
    let av = to_lanes(&a.limbs);
    let bv = to_lanes(&b.limbs);

    let mut sum = [0u64; N_LANES];
    for ((s, &x), &y) in sum.iter_mut().zip(&av).zip(&bv) {
        *s = x.wrapping_add(y);
    }

    let mut overflow = 0u32;
    let mut cascade = 0u32;
    for (i, (&s, &x)) in sum.iter().zip(&av).enumerate() {
        overflow |= ((s < x) as u32) << i;
        cascade |= ((s == u64::MAX) as u32) << i;
    }

    let carries = cascade + (overflow << 1);
    let incoming = (carries ^ cascade) & 0x0f;

    for (s, &inc) in sum.iter_mut().zip(&BROADCAST_LOOKUP[incoming as usize]) {
        *s = s.wrapping_add(inc);
    }

    (U256::from_limbs_exact(from_lanes(&sum)), carries & 0x10 != 0)
}
