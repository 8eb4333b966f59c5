//! Conversion utilities
//!
//! This module groups the explicit conversions between `U256` and other
//! representations. Each submodule handles one source or target form:
//! - `bytes`: big-endian byte strings
//! - `int`: native integers, with truncating narrow views
//! - `limbs`: raw little-endian 32-bit limb arrays
//! - `bigint`: arbitrary-precision export (`num-bigint` feature)
//!
//! Conversions into `U256` never lose information silently: input that
//! cannot fit is rejected with a [`U256Error`](super::U256Error).

#[cfg(feature = "num-bigint")]
mod bigint;
mod bytes;
mod int;
mod limbs;
