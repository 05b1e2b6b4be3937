//! Property-based tests for the head/tail layout and numeric encoding.

use abi_coder::{encode_param, encode_tokens, ParamType, Value, U256};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn read_word(bytes: &[u8], at: usize) -> U256 {
    U256::from_big_endian(&bytes[at..at + 32])
}

/// A parameter with its type, value and the size of its tail block
fn param_strategy() -> impl Strategy<Value = (ParamType, Value, usize)> {
    prop_oneof![
        any::<i64>().prop_map(|n| (ParamType::Int(256), Value::from(n), 0)),
        any::<bool>().prop_map(|b| (ParamType::Bool, Value::from(b), 0)),
        "[a-z ]{0,80}".prop_map(|s| {
            let words = s.len().div_ceil(32);
            (ParamType::String, Value::from(s), 32 + words * 32)
        }),
        prop::collection::vec(any::<u8>(), 0..70).prop_map(|data| {
            let words = data.len().div_ceil(32);
            (ParamType::Bytes, Value::bytes(data), 32 + words * 32)
        }),
        prop::collection::vec(any::<u32>(), 0..6).prop_map(|items| {
            let size = 32 + items.len() * 32;
            (ParamType::Array(Box::new(ParamType::Uint(32))), Value::from(items), size)
        }),
    ]
}

proptest! {
    #[test]
    fn negative_int_is_twos_complement(n in i64::MIN..0) {
        let encoded = encode_param("int", n).unwrap();
        let expected = format!("{}{:016x}", "f".repeat(48), n as u64);
        prop_assert_eq!(encoded, expected);
    }

    #[test]
    fn positive_int_is_right_aligned(n in 0u64..) {
        prop_assert_eq!(encode_param("uint64", n).unwrap(), format!("{:064x}", n));
    }

    #[test]
    fn float_truncates_toward_zero(v in -1.0e15f64..1.0e15f64) {
        let truncated = v.trunc() as i64;
        prop_assert_eq!(
            encode_param("int", v).unwrap(),
            encode_param("int", truncated).unwrap()
        );
    }

    #[test]
    fn real_integer_is_shifted_by_128_bits(n in 0u64..) {
        let encoded = encode_param("ureal", n).unwrap();
        prop_assert_eq!(encoded, format!("{:032x}{}", n, "0".repeat(32)));
    }

    #[test]
    fn layout_sizes_and_offsets(params in prop::collection::vec(param_strategy(), 0..8)) {
        init_tracing();

        let types: Vec<_> = params.iter().map(|(t, _, _)| t.clone()).collect();
        let values: Vec<_> = params.iter().map(|(_, v, _)| v.clone()).collect();
        let encoded = encode_tokens(&types, &values).unwrap();

        let head_len = params.len() * 32;
        let tail_len: usize = params.iter().map(|(_, _, size)| size).sum();
        prop_assert_eq!(encoded.len(), head_len + tail_len);

        // offsets land on each tail block in parameter order
        let mut expected_offset = head_len;
        for (index, (param_type, _, size)) in params.iter().enumerate() {
            if param_type.is_dynamic() {
                let offset = read_word(&encoded, index * 32);
                prop_assert_eq!(offset, U256::from(expected_offset));
                expected_offset += size;
            }
        }
        prop_assert_eq!(expected_offset, encoded.len());
    }

    #[test]
    fn dynamic_block_starts_with_length(data in prop::collection::vec(any::<u8>(), 1..100)) {
        let encoded = encode_tokens(&[ParamType::Bytes], &[Value::bytes(data.clone())]).unwrap();
        prop_assert_eq!(read_word(&encoded, 0), U256::from(32));
        prop_assert_eq!(read_word(&encoded, 32), U256::from(data.len()));
        prop_assert_eq!(encoded.len() % 32, 0);
    }
}
