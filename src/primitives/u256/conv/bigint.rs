//! Export to arbitrary-precision integers
//!
//! Available with the `num-bigint` feature, for callers that need to hand
//! a word to code working on unbounded integers. The result is always
//! non-negative.

use num_bigint::BigUint;

use crate::primitives::u256::core::U256;

impl U256 {
    /// Converts the value into a [`BigUint`].
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes_be())
    }
}

impl From<U256> for BigUint {
    fn from(value: U256) -> Self {
        value.to_biguint()
    }
}
