//! Primitive types
//!
//! This module defines the fixed-size word type used by the execution
//! engine.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full-featured
//! big-integer libraries.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer

mod u256;

/// The 256-bit machine word and its construction error.
pub use u256::{U256, U256Error};

#[doc(hidden)]
pub use u256::internals;
