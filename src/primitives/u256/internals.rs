//! Direct access to the arithmetic kernels.
//!
//! Not part of the supported API. This exists so that tests and
//! benchmarks can drive both adders and the raw division engine no matter
//! which adder the `speed` feature selects.

use super::core::{N_LIMBS, U256};

/// Scalar ripple-carry addition: sum modulo 2²⁵⁶ and carry out.
pub fn add_scalar(a: &U256, b: &U256) -> (U256, bool) {
    super::ops::add_scalar(a, b)
}

/// Lane-parallel addition: sum modulo 2²⁵⁶ and carry out.
pub fn add_lanes(a: &U256, b: &U256) -> (U256, bool) {
    super::lanes::add_lanes(a, b)
}

/// Remainder of a little-endian dividend of up to 16 limbs.
///
/// Returns `None` if `dividend` holds more than 16 limbs.
pub fn remainder(dividend: &[u32], modulus: &U256) -> Option<U256> {
    if dividend.len() > super::knuth::MAX_DIVIDEND_LIMBS {
        return None;
    }

    let limbs: [u32; N_LIMBS] = super::knuth::knuth_remainder(dividend, &modulus.limbs);
    Some(U256::from_limbs_exact(limbs))
}
