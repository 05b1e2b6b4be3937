//! 32-byte word codec
//!
//! Padding helpers shared by every encoder. Output length is always the
//! smallest whole number of words that holds the input, never less than one.

use abi_primitives::{I256, U256, WORD_SIZE};

use crate::AbiError;

/// A single 32-byte ABI word
pub type Word = [u8; WORD_SIZE];

/// Number of words needed to hold `len` bytes (at least one)
pub fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_SIZE).max(1)
}

/// Right-align `bytes`, filling the leading space with `fill`
pub fn pad_left(bytes: &[u8], fill: u8) -> Vec<u8> {
    let size = words_for(bytes.len()) * WORD_SIZE;
    let mut out = vec![fill; size - bytes.len()];
    out.extend_from_slice(bytes);
    out
}

/// Left-align `bytes`, filling the trailing space with `fill`
pub fn pad_right(bytes: &[u8], fill: u8) -> Vec<u8> {
    let size = words_for(bytes.len()) * WORD_SIZE;
    let mut out = bytes.to_vec();
    out.resize(size, fill);
    out
}

/// Encode a U256 as one big-endian word
pub fn encode_u256(value: &U256) -> Word {
    let mut bytes = [0u8; WORD_SIZE];
    value.to_big_endian(&mut bytes);
    bytes
}

/// Encode a signed value as a two's-complement word.
///
/// Negative values come out `0xff`-extended across the whole word.
pub fn encode_i256(value: &I256) -> Word {
    encode_u256(&value.to_twos_complement())
}

/// Big-endian bytes of `value` without leading zero bytes.
///
/// Zero is a single `0x00` byte.
pub fn minimal_bytes(value: &U256) -> Vec<u8> {
    let word = encode_u256(value);
    let start = word.iter().position(|&b| b != 0).unwrap_or(WORD_SIZE - 1);
    word[start..].to_vec()
}

/// Decode a hex string with an optional `0x` prefix.
///
/// An odd digit count gets a leading `0` nibble.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, AbiError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{}", digits))
    } else {
        hex::decode(digits)
    };
    decoded.map_err(|_| AbiError::InvalidHexInput(s.to_string()))
}
