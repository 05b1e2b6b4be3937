//! Single-word encoders for static types

use abi_primitives::{Address, I256, U256, U512, WORD_SIZE};

use super::types::ParamType;
use super::value::Value;
use super::word::{encode_i256, encode_u256, hex_to_bytes, minimal_bytes, pad_left, Word};
use crate::AbiError;

/// Fractional bits of the 128.128 fixed-point layout used by `real`/`ureal`
pub const REAL_FRACTION_BITS: usize = 128;

/// Fraction digits beyond this are dropped before scaling.
///
/// Any 128-bit binary fraction terminates within 128 decimal digits, so the
/// truncated result is unchanged, and `2 * 10^150` still fits in a U512.
const MAX_FRACTION_DIGITS: usize = 150;

/// Encode a static parameter.
///
/// Returns one word for every type except an oversized `bytesN` input,
/// which keeps its full width.
pub fn encode_scalar(param_type: &ParamType, value: &Value) -> Result<Vec<u8>, AbiError> {
    let word = match param_type {
        ParamType::Int(bits) => encode_int(*bits, value)?,
        ParamType::Uint(bits) => encode_uint(*bits, value)?,
        ParamType::Bool => encode_bool(value)?,
        ParamType::Address => encode_address(value)?,
        ParamType::Real => encode_real(value)?,
        ParamType::UReal => encode_ureal(value)?,
        ParamType::FixedBytes(size) => return encode_fixed_bytes(*size, value),
        _ => return Err(value.mismatch(param_type)),
    };
    Ok(word.to_vec())
}

/// Encode a signed integer as a two's-complement word
pub fn encode_int(bits: usize, value: &Value) -> Result<Word, AbiError> {
    let n = to_scaled(value, 0, &ParamType::Int(bits))?;
    if n.abs().bits() > bits {
        tracing::warn!("int{} value {} is wider than its type", bits, n);
    }
    Ok(encode_i256(&n))
}

/// Encode an unsigned integer.
///
/// Negative inputs are not rejected; they wrap exactly like `int`.
pub fn encode_uint(bits: usize, value: &Value) -> Result<Word, AbiError> {
    let n = to_scaled(value, 0, &ParamType::Uint(bits))?;
    if n.abs().bits() > bits || n.is_negative() {
        tracing::warn!("uint{} value {} is outside its type", bits, n);
    }
    Ok(encode_i256(&n))
}

/// Encode a boolean as the integer 0 or 1
pub fn encode_bool(value: &Value) -> Result<Word, AbiError> {
    match value {
        Value::Bool(b) => Ok(encode_u256(&U256::from(*b as u8))),
        other => Err(other.mismatch(&ParamType::Bool)),
    }
}

/// Encode an address right-aligned in a zeroed word
pub fn encode_address(value: &Value) -> Result<Word, AbiError> {
    let address = match value {
        Value::Address(address) => *address,
        Value::String(s) => Address::from_hex(s)?,
        Value::Number(n) if !n.is_negative() => Address::from_u256(n.abs())?,
        Value::Number(n) => return Err(AbiError::InvalidAddress(n.to_string())),
        other => return Err(other.mismatch(&ParamType::Address)),
    };
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - Address::LEN..].copy_from_slice(address.as_bytes());
    Ok(word)
}

/// Encode `bytesN` content right-aligned in zero-filled words.
///
/// The word count follows the input length, not `size`.
pub fn encode_fixed_bytes(size: usize, value: &Value) -> Result<Vec<u8>, AbiError> {
    let content = byte_content(value, &ParamType::FixedBytes(size))?;
    if content.len() > size {
        tracing::warn!("bytes{} value is {} bytes wide", size, content.len());
    }
    Ok(pad_left(&content, 0x00))
}

/// Encode a signed 128.128 fixed-point number
pub fn encode_real(value: &Value) -> Result<Word, AbiError> {
    let n = to_scaled(value, REAL_FRACTION_BITS, &ParamType::Real)?;
    Ok(encode_i256(&n))
}

/// Encode an unsigned 128.128 fixed-point number
pub fn encode_ureal(value: &Value) -> Result<Word, AbiError> {
    let n = to_scaled(value, REAL_FRACTION_BITS, &ParamType::UReal)?;
    Ok(encode_i256(&n))
}

/// Raw bytes behind a value destined for `bytes`/`bytesN`
pub(crate) fn byte_content(value: &Value, expected: &ParamType) -> Result<Vec<u8>, AbiError> {
    match value {
        Value::String(s) => hex_to_bytes(s),
        Value::Bytes(bytes) => Ok(bytes.clone()),
        Value::Address(address) => Ok(address.as_bytes().to_vec()),
        Value::Number(n) => unsigned_bytes(n),
        Value::Float(f) if f.fract() == 0.0 => unsigned_bytes(&scale_float(*f, 0)?),
        Value::Float(f) => Err(AbiError::InvalidNumber(f.to_string())),
        other => Err(other.mismatch(expected)),
    }
}

fn unsigned_bytes(n: &I256) -> Result<Vec<u8>, AbiError> {
    if n.is_negative() {
        return Err(AbiError::ValueOutOfRange(n.to_string()));
    }
    Ok(minimal_bytes(&n.abs()))
}

/// Convert a numeric value to an integer scaled by `2^frac_bits`, truncating
/// toward zero.
pub(crate) fn to_scaled(
    value: &Value,
    frac_bits: usize,
    expected: &ParamType,
) -> Result<I256, AbiError> {
    match value {
        Value::Number(n) => shift_scaled(*n, frac_bits),
        Value::Float(f) => scale_float(*f, frac_bits),
        Value::String(s) => parse_scaled(s, frac_bits),
        other => Err(other.mismatch(expected)),
    }
}

fn shift_scaled(n: I256, frac_bits: usize) -> Result<I256, AbiError> {
    if n.is_zero() {
        return Ok(n);
    }
    if n.abs().bits() + frac_bits > 256 {
        return Err(AbiError::ValueOutOfRange(n.to_string()));
    }
    Ok(I256::new(n.abs() << frac_bits, n.is_negative()))
}

/// Exact `trunc(v * 2^frac_bits)`; a finite f64 is `mantissa * 2^exponent`.
fn scale_float(v: f64, frac_bits: usize) -> Result<I256, AbiError> {
    if !v.is_finite() {
        return Err(AbiError::ValueOutOfRange(v.to_string()));
    }

    let bits = v.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    let mantissa = U256::from(mantissa);
    let shift = exponent + frac_bits as i64;
    let abs = if shift >= 0 {
        let shift = shift as usize;
        if !mantissa.is_zero() && mantissa.bits() + shift > 256 {
            return Err(AbiError::ValueOutOfRange(v.to_string()));
        }
        mantissa << shift
    } else {
        let shift = shift.unsigned_abs() as usize;
        if shift >= 256 {
            U256::zero()
        } else {
            mantissa >> shift
        }
    };

    Ok(I256::new(abs, negative))
}

/// Parse decimal (`-2.125`) or integer hex (`0x1f`) text into a scaled integer
fn parse_scaled(text: &str, frac_bits: usize) -> Result<I256, AbiError> {
    let trimmed = text.trim();
    let Some((int_digits, frac_digits)) = trimmed.split_once('.') else {
        let n: I256 = trimmed.parse()?;
        return shift_scaled(n, frac_bits);
    };

    let (negative, int_digits) = match int_digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, int_digits.strip_prefix('+').unwrap_or(int_digits)),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_digits.is_empty() && frac_digits.is_empty())
        || !all_digits(int_digits)
        || !all_digits(frac_digits)
    {
        return Err(AbiError::InvalidNumber(text.to_string()));
    }

    let int_part = if int_digits.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(int_digits).map_err(|_| AbiError::ValueOutOfRange(text.to_string()))?
    };
    if !int_part.is_zero() && int_part.bits() + frac_bits > 256 {
        return Err(AbiError::ValueOutOfRange(text.to_string()));
    }

    let frac_digits = &frac_digits[..frac_digits.len().min(MAX_FRACTION_DIGITS)];
    let abs = (int_part << frac_bits) | binary_fraction(frac_digits, frac_bits);
    Ok(I256::new(abs, negative))
}

/// `floor(0.<digits> * 2^bits)` by binary long division
fn binary_fraction(digits: &str, bits: usize) -> U256 {
    if digits.is_empty() || bits == 0 {
        return U256::zero();
    }
    let denominator = U512::exp10(digits.len());
    let mut remainder = U512::from_dec_str(digits).unwrap_or_default();
    let mut result = U256::zero();
    for _ in 0..bits {
        remainder = remainder << 1;
        result = result << 1;
        if remainder >= denominator {
            remainder = remainder - denominator;
            result = result | U256::one();
        }
    }
    result
}
