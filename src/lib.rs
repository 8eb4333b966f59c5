//! Fixed-width 256-bit word arithmetic
//!
//! This crate provides the numeric substrate of a 256-bit word machine,
//! such as the arithmetic opcodes of a blockchain execution engine. Every
//! value is a `U256`: an immutable 256-bit unsigned integer.
//!
//! The focus is on **clarity, predictability, and auditability**. All
//! arithmetic is implemented from scratch on fixed-size limb arrays,
//! without an arbitrary-precision integer library and without heap
//! allocation.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `U256` type and its operations:
//!   - construction from big-endian bytes, native integers and limb arrays
//!   - unsigned comparison and equality
//!   - wrapping/overflowing addition
//!   - `modulo`, `signed_modulo`, `add_mod` and `mul_mod`, reduced with
//!     Knuth's long division (Algorithm D)
//!
//! # Features
//!
//! - `speed`
//!   Routes addition through a lane-parallel adder that resolves carries
//!   between four 64-bit lanes with a lookup table instead of a ripple
//!   over eight 32-bit limbs. Results are identical either way.
//! - `num-bigint`
//!   Enables conversion into `num_bigint::BigUint`.
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Minimal and explicit APIs
//! - Total operations: a zero modulus yields zero rather than a panic
//!
//! Opcode dispatch, stack handling and gas metering belong to the
//! consuming virtual machine, not to this crate.

pub mod primitives;
