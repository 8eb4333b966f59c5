//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, the fixed-size 256-bit word all
//! arithmetic of the execution engine operates on.
//!
//! `U256` is a low-level, dependency-free primitive rather than a full
//! big-integer abstraction. It provides:
//! - construction from and encoding to big-endian bytes, native integers
//!   and limb arrays
//! - unsigned ordering and equality
//! - wrapping and overflowing addition, with a scalar and a lane-parallel
//!   adder behind one interface
//! - unsigned and signed remainders, modular addition and multiplication,
//!   all computed at full precision before reduction
//!
//! Values are immutable, `Copy`, and never allocate.

mod cmp;
mod conv;
mod core;
mod error;
mod knuth;
mod lanes;
mod limbs;
mod modular;
mod ops;

#[doc(hidden)]
pub mod internals;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;

/// Construction errors.
pub use self::error::U256Error;
