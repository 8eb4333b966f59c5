//! Errors raised when building a `U256`.

use std::fmt::{Display, Formatter, Result};

/// Errors that can occur when constructing a `U256`.
///
/// Arithmetic itself is total over the 256-bit value space; only
/// construction from unchecked external input can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum U256Error {
    /// The input holds more than 32 bytes.
    InvalidLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },
}

impl Display for U256Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            U256Error::InvalidLength { len } => {
                write!(f, "invalid length: expected at most 32 bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for U256Error {}
