//! Encoder error types

use abi_primitives::{AddressError, IntError};
use thiserror::Error;

/// Encoder error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Type name does not match any known pattern
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// String destined for a byte type is not hex
    #[error("Invalid hex input: {0}")]
    InvalidHexInput(String),

    /// Type list and value list lengths differ
    #[error("Arity mismatch: {types} types but {values} values")]
    ArityMismatch {
        /// Number of type names
        types: usize,
        /// Number of values
        values: usize,
    },

    /// Text is not a number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Number does not fit in one word
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Address is not 20 bytes of hex
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Value shape does not fit the type
    #[error("Expected {expected} value, found {found}")]
    ValueMismatch {
        /// Type the value was encoded as
        expected: String,
        /// Kind of value supplied
        found: &'static str,
    },

    /// Fixed-length array given the wrong number of elements
    #[error("Array length mismatch: expected {expected} elements, found {found}")]
    ArrayLengthMismatch {
        /// Declared length
        expected: usize,
        /// Supplied length
        found: usize,
    },
}

impl From<AddressError> for AbiError {
    fn from(e: AddressError) -> Self {
        AbiError::InvalidAddress(e.to_string())
    }
}

impl From<IntError> for AbiError {
    fn from(e: IntError) -> Self {
        match e {
            IntError::InvalidDigits(s) => AbiError::InvalidNumber(s),
            IntError::Overflow(s) => AbiError::ValueOutOfRange(s),
        }
    }
}
