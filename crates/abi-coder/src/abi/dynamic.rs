//! Length-prefixed encoders for dynamic types

use abi_primitives::U256;

use super::encode::encode_sequence;
use super::scalar::byte_content;
use super::types::ParamType;
use super::value::Value;
use super::word::{encode_u256, pad_left, pad_right};
use crate::AbiError;

/// Encode a dynamic parameter as `[length word][content words]`
pub fn encode_dynamic(param_type: &ParamType, value: &Value) -> Result<Vec<u8>, AbiError> {
    match param_type {
        ParamType::Bytes => encode_bytes(value),
        ParamType::String => encode_string(value),
        ParamType::Array(element) => encode_array(element, None, value),
        ParamType::FixedArray(element, len) => encode_array(element, Some(*len), value),
        _ => Err(value.mismatch(param_type)),
    }
}

/// Encode dynamic bytes.
///
/// Content is right-aligned in its words, the same way `bytesN` is.
pub fn encode_bytes(value: &Value) -> Result<Vec<u8>, AbiError> {
    let data = byte_content(value, &ParamType::Bytes)?;
    Ok(length_prefixed(&data, pad_left))
}

/// Encode a string as its UTF-8 bytes, left-aligned in zero-filled words
pub fn encode_string(value: &Value) -> Result<Vec<u8>, AbiError> {
    let data = match value {
        Value::String(s) => s.as_bytes(),
        Value::Bytes(bytes) => bytes.as_slice(),
        other => return Err(other.mismatch(&ParamType::String)),
    };
    Ok(length_prefixed(data, pad_right))
}

/// Encode an array as its element count followed by the elements laid out
/// like a parameter list, so dynamic elements get offsets of their own.
pub fn encode_array(
    element: &ParamType,
    fixed_len: Option<usize>,
    value: &Value,
) -> Result<Vec<u8>, AbiError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            let expected = match fixed_len {
                Some(len) => ParamType::FixedArray(Box::new(element.clone()), len),
                None => ParamType::Array(Box::new(element.clone())),
            };
            return Err(other.mismatch(&expected));
        }
    };

    if let Some(expected) = fixed_len {
        if items.len() != expected {
            return Err(AbiError::ArrayLengthMismatch {
                expected,
                found: items.len(),
            });
        }
    }

    let mut result = encode_u256(&U256::from(items.len())).to_vec();
    result.extend(encode_sequence(items.iter().map(|item| (element, item)))?);
    Ok(result)
}

/// Length word plus padded content; empty content adds no words
fn length_prefixed(data: &[u8], pad: fn(&[u8], u8) -> Vec<u8>) -> Vec<u8> {
    let mut result = encode_u256(&U256::from(data.len())).to_vec();
    if !data.is_empty() {
        result.extend(pad(data, 0x00));
    }
    result
}
