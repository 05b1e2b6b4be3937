//! Parameter list assembly
//!
//! A parameter list is laid out as a head of one slot per parameter followed
//! by a tail of dynamic payloads. Static values sit in their head slot;
//! dynamic values are appended to the tail and their head slot holds the
//! byte offset of that payload from the start of the whole encoding.

use abi_primitives::{U256, WORD_SIZE};

use super::dynamic::encode_dynamic;
use super::scalar::encode_scalar;
use super::types::{parse_type, ParamType, MAX_ARRAY_DEPTH};
use super::value::Value;
use super::word::encode_u256;
use crate::AbiError;

/// Encoding of a single parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedValue {
    /// Goes straight into the head
    Static(Vec<u8>),
    /// Goes into the tail behind an offset; always whole words
    Dynamic(Vec<u8>),
}

/// Head slot of a parameter being laid out
#[derive(Debug)]
enum HeadSlot {
    Static(Vec<u8>),
    /// Position of the payload within the tail
    Offset(usize),
}

/// Working state of the assembler
#[derive(Debug, Default)]
struct Layout {
    head: Vec<HeadSlot>,
    tail: Vec<u8>,
}

impl Layout {
    fn push(&mut self, encoded: EncodedValue) {
        match encoded {
            EncodedValue::Static(word) => self.head.push(HeadSlot::Static(word)),
            EncodedValue::Dynamic(block) => {
                self.head.push(HeadSlot::Offset(self.tail.len()));
                self.tail.extend(block);
            }
        }
    }

    /// Size the head, then patch every offset and append the tail
    fn finish(self) -> Vec<u8> {
        let head_len: usize = self
            .head
            .iter()
            .map(|slot| match slot {
                HeadSlot::Static(word) => word.len(),
                HeadSlot::Offset(_) => WORD_SIZE,
            })
            .sum();

        let mut out = Vec::with_capacity(head_len + self.tail.len());
        for slot in self.head {
            match slot {
                HeadSlot::Static(word) => out.extend(word),
                HeadSlot::Offset(at) => out.extend(encode_u256(&U256::from(head_len + at))),
            }
        }
        out.extend(self.tail);
        out
    }
}

/// Encode one value against its type
pub fn encode_value(param_type: &ParamType, value: &Value) -> Result<EncodedValue, AbiError> {
    if param_type.is_dynamic() {
        encode_dynamic(param_type, value).map(EncodedValue::Dynamic)
    } else {
        encode_scalar(param_type, value).map(EncodedValue::Static)
    }
}

/// Lay out `(type, value)` pairs as head and tail
pub(crate) fn encode_sequence<'a, I>(params: I) -> Result<Vec<u8>, AbiError>
where
    I: IntoIterator<Item = (&'a ParamType, &'a Value)>,
{
    let mut layout = Layout::default();
    for (index, (param_type, value)) in params.into_iter().enumerate() {
        let encoded = encode_value(param_type, value).inspect_err(|e| {
            tracing::debug!("Parameter {} ({}) rejected: {}", index, param_type, e);
        })?;
        tracing::trace!(
            "Parameter {} ({}): {} {} bytes",
            index,
            param_type,
            if param_type.is_dynamic() { "dynamic" } else { "static" },
            match &encoded {
                EncodedValue::Static(bytes) | EncodedValue::Dynamic(bytes) => bytes.len(),
            }
        );
        layout.push(encoded);
    }
    Ok(layout.finish())
}

/// Encode values against already-parsed types
pub fn encode_tokens(types: &[ParamType], values: &[Value]) -> Result<Vec<u8>, AbiError> {
    if types.len() != values.len() {
        return Err(AbiError::ArityMismatch {
            types: types.len(),
            values: values.len(),
        });
    }
    if let Some(depth) = types
        .iter()
        .map(ParamType::array_depth)
        .find(|&depth| depth > MAX_ARRAY_DEPTH)
    {
        return Err(AbiError::UnsupportedType(format!(
            "array nested {} levels deep",
            depth
        )));
    }
    encode_sequence(types.iter().zip(values)).inspect_err(|e| {
        tracing::warn!("Encoding {} parameters failed: {}", types.len(), e);
    })
}

/// Encode a parameter list given type names, as lowercase hex without `0x`
pub fn encode_params<S: AsRef<str>>(type_names: &[S], values: &[Value]) -> Result<String, AbiError> {
    if type_names.len() != values.len() {
        return Err(AbiError::ArityMismatch {
            types: type_names.len(),
            values: values.len(),
        });
    }
    let types = type_names
        .iter()
        .map(|name| parse_type(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Encoding {} parameters", types.len());
    let encoded = encode_tokens(&types, values)?;
    Ok(hex::encode(encoded))
}

/// Encode a single value, as lowercase hex without `0x`.
///
/// Same as a one-element [`encode_params`], so a dynamic value is preceded by
/// its `0x20` offset word.
pub fn encode_param(type_name: &str, value: impl Into<Value>) -> Result<String, AbiError> {
    encode_params(&[type_name], &[value.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_of(n: u64) -> String {
        format!("{:064x}", n)
    }

    #[test]
    fn test_encode_value_classification() {
        assert!(matches!(
            encode_value(&ParamType::Bool, &Value::Bool(true)).unwrap(),
            EncodedValue::Static(word) if word.len() == 32
        ));
        assert!(matches!(
            encode_value(&ParamType::String, &Value::from("x")).unwrap(),
            EncodedValue::Dynamic(block) if block.len() == 64
        ));
    }

    #[test]
    fn test_encode_static_params() {
        let encoded = encode_params(&["bool", "uint8"], &[true.into(), 7.into()]).unwrap();
        assert_eq!(encoded, format!("{}{}", word_of(1), word_of(7)));
    }

    #[test]
    fn test_offsets_point_into_tail() {
        let encoded = encode_params(&["int", "string"], &[5.into(), "gavofyork".into()]).unwrap();
        assert_eq!(
            encoded,
            [
                word_of(5),
                word_of(0x40),
                word_of(9),
                format!("{:0<64}", "6761766f66796f726b"),
            ]
            .concat()
        );
    }

    #[test]
    fn test_oversized_fixed_bytes_shift_offsets() {
        let wide = format!("0x{}", "11".repeat(33));
        let types = [ParamType::FixedBytes(32), ParamType::Bytes];
        let values = [Value::from(wide.as_str()), Value::from("0x01")];
        let encoded = encode_tokens(&types, &values).unwrap();

        // head is 64 bytes of bytes32 plus one offset word
        assert_eq!(encoded.len(), 96 + 64);
        assert_eq!(U256::from_big_endian(&encoded[64..96]), U256::from(96));
        assert_eq!(U256::from_big_endian(&encoded[96..128]), U256::from(1));
    }

    #[test]
    fn test_arity_mismatch() {
        assert_eq!(
            encode_params(&["int", "int"], &[1.into()]),
            Err(AbiError::ArityMismatch { types: 2, values: 1 })
        );
        assert_eq!(
            encode_tokens(&[], &[1.into()]),
            Err(AbiError::ArityMismatch { types: 0, values: 1 })
        );
    }

    #[test]
    fn test_unsupported_type_aborts() {
        assert_eq!(
            encode_params(&["int", "float"], &[1.into(), 2.into()]),
            Err(AbiError::UnsupportedType("float".to_string()))
        );
    }

    #[test]
    fn test_rejects_overly_nested_type() {
        let mut deep = ParamType::Bool;
        for _ in 0..=MAX_ARRAY_DEPTH {
            deep = ParamType::Array(Box::new(deep));
        }
        assert!(matches!(
            encode_tokens(&[deep], &[Value::Array(vec![])]),
            Err(AbiError::UnsupportedType(_))
        ));

        let name = format!("int{}", "[]".repeat(10_000));
        assert!(matches!(
            encode_param(&name, Value::Array(vec![])),
            Err(AbiError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_nested_rejection_warns_once() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let value = Value::from(vec![vec![vec!["not a number"]]]);
        let result = tracing::subscriber::with_default(subscriber, || {
            encode_params(&["int[][][]"], &[value])
        });
        assert!(matches!(result, Err(AbiError::InvalidNumber(_))));

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("WARN").count(), 1, "{}", output);
    }

    #[test]
    fn test_empty_list() {
        let names: [&str; 0] = [];
        assert_eq!(encode_params(&names, &[]).unwrap(), "");
    }
}
