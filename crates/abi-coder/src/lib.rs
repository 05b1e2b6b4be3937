//! # abi-coder
//!
//! Encoder for the contract-call ABI word format.
//!
//! Turns native values and type names into the exact byte layout a
//! virtual machine expects as call input: 32-byte words, two's-complement
//! integers, length-prefixed byte strings and arrays, and a head of
//! offsets pointing into a tail of dynamic payloads.
//!
//! ## Quick Start
//!
//! ```rust
//! use abi_coder::{encode_param, encode_params, Value};
//!
//! // One static value is one word
//! assert_eq!(
//!     encode_param("bool", true).unwrap(),
//!     "0000000000000000000000000000000000000000000000000000000000000001"
//! );
//!
//! // Dynamic values go to the tail behind an offset
//! let data = encode_params(
//!     &["int[]", "int[]"],
//!     &[Value::from(vec![1, 2]), Value::from(vec![3, 4])],
//! )
//! .unwrap();
//! assert_eq!(&data[..64], format!("{:064x}", 0x40));
//! assert_eq!(&data[64..128], format!("{:064x}", 0xa0));
//! ```
//!
//! ## JSON input
//!
//! ```rust
//! use abi_coder::{encode_params, Value};
//!
//! let values: Vec<Value> = serde_json::json!([5, "gavofyork"])
//!     .as_array()
//!     .unwrap()
//!     .iter()
//!     .map(Value::from_json)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! let data = encode_params(&["int", "string"], &values).unwrap();
//! assert_eq!(&data[64..128], format!("{:064x}", 0x40));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
mod error;

pub use abi::{encode_param, encode_params, encode_tokens, parse_type, ParamType, Value};
pub use error::AbiError;

// Re-export primitives for convenience
pub use abi_primitives::{Address, I256, U256};
