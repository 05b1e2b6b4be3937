//! ABI word-format encoding for contract calls
//!
//! This module provides functionality for:
//! - Parsing type names into [`ParamType`] descriptors
//! - Padding values into 32-byte words
//! - Encoding static and dynamic values
//! - Laying out parameter lists as head and tail
//!
//! # Example
//!
//! ```rust
//! use abi_coder::abi::{encode_param, encode_params};
//!
//! let word = encode_param("int", -1).unwrap();
//! assert_eq!(word, "f".repeat(64));
//!
//! let data = encode_params(&["int", "string"], &[5.into(), "gavofyork".into()]).unwrap();
//! assert_eq!(data.len(), 4 * 64);
//! ```

mod dynamic;
mod encode;
mod scalar;
mod types;
mod value;
mod word;

pub use dynamic::{encode_array, encode_bytes, encode_dynamic, encode_string};
pub use encode::{encode_param, encode_params, encode_tokens, encode_value, EncodedValue};
pub use scalar::{
    encode_address, encode_bool, encode_fixed_bytes, encode_int, encode_real, encode_scalar,
    encode_uint, encode_ureal, REAL_FRACTION_BITS,
};
pub use types::{parse_type, ParamType, MAX_ARRAY_DEPTH};
pub use value::Value;
pub use word::{encode_i256, encode_u256, hex_to_bytes, pad_left, pad_right, words_for, Word};
