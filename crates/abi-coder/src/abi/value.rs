//! Input values accepted by the encoder

use abi_primitives::{Address, I256, U256};

use super::ParamType;
use crate::AbiError;

/// A native value to be encoded against a [`ParamType`](super::ParamType)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer of up to 256 bits plus sign
    Number(I256),
    /// Floating point; truncated toward zero for integer types
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Hex, decimal or text, interpreted by the target type
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// 20-byte address
    Address(Address),
    /// Ordered elements of an array
    Array(Vec<Value>),
}

impl Value {
    /// Create a raw bytes value
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Short name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Address(_) => "address",
            Value::Array(_) => "array",
        }
    }

    pub(crate) fn mismatch(&self, expected: &ParamType) -> AbiError {
        AbiError::ValueMismatch {
            expected: expected.to_string(),
            found: self.kind(),
        }
    }

    /// Convert a JSON value.
    ///
    /// Integral JSON numbers become [`Value::Number`], other numbers
    /// [`Value::Float`]. Big integers should be passed as strings.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, AbiError> {
        use serde_json::Value as Json;

        match json {
            Json::Bool(b) => Ok(Value::Bool(*b)),
            Json::String(s) => Ok(Value::String(s.clone())),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::from(u))
                } else {
                    n.as_f64()
                        .map(Value::Float)
                        .ok_or_else(|| AbiError::InvalidNumber(n.to_string()))
                }
            }
            Json::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Json::Null => Err(AbiError::ValueMismatch {
                expected: "value".to_string(),
                found: "null",
            }),
            Json::Object(_) => Err(AbiError::ValueMismatch {
                expected: "value".to_string(),
                found: "object",
            }),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(I256::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<I256> for Value {
    fn from(value: I256) -> Self {
        Value::Number(value)
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::Number(I256::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Address> for Value {
    fn from(value: Address) -> Self {
        Value::Address(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}
