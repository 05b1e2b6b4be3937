//! # abi-primitives
//!
//! Primitive types for the ABI word encoder.
//!
//! This crate provides the fixed-width values the encoder works with:
//! 20-byte addresses, a sign-magnitude signed integer and the 256/512-bit
//! unsigned integers from `primitive-types`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod int;

pub use address::{Address, AddressError};
pub use int::{I256, IntError};

// Re-export primitive-types for U256/U512
pub use primitive_types::{U256, U512};

/// Size of an ABI word in bytes
pub const WORD_SIZE: usize = 32;
