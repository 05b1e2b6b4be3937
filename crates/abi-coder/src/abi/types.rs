//! ABI type descriptors and the type-name parser

use std::fmt;
use std::str::FromStr;

use crate::AbiError;

/// Deepest array nesting accepted, e.g. `int[][]` is two
pub const MAX_ARRAY_DEPTH: usize = 64;

/// Parameter type parsed from a type name such as `uint8`, `bytes32` or `string[]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Signed integer with bit size (8, 16, ..., 256)
    Int(usize),
    /// Unsigned integer with bit size
    Uint(usize),
    /// Boolean
    Bool,
    /// 20-byte address
    Address,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// Signed 128.128 fixed-point number
    Real,
    /// Unsigned 128.128 fixed-point number
    UReal,
    /// Dynamic bytes
    Bytes,
    /// UTF-8 string
    String,
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array
    FixedArray(Box<ParamType>, usize),
}

impl ParamType {
    /// Parse a type name
    pub fn parse(s: &str) -> Result<Self, AbiError> {
        parse_type(s)
    }

    /// Check if this type is encoded in the tail behind an offset.
    ///
    /// Every array is dynamic here, including `T[K]` with a static `T`.
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            ParamType::Bytes | ParamType::String | ParamType::Array(_) | ParamType::FixedArray(..)
        )
    }

    /// Check if this type is an array of any kind
    pub fn is_array(&self) -> bool {
        matches!(self, ParamType::Array(_) | ParamType::FixedArray(..))
    }

    /// Declared element count of a fixed-size array
    pub fn array_length(&self) -> Option<usize> {
        match self {
            ParamType::FixedArray(_, len) => Some(*len),
            _ => None,
        }
    }

    /// Element type of an array
    pub fn element(&self) -> Option<&ParamType> {
        match self {
            ParamType::Array(inner) | ParamType::FixedArray(inner, _) => Some(inner.as_ref()),
            _ => None,
        }
    }

    /// Number of array dimensions around the base type
    pub fn array_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(inner) = current.element() {
            depth += 1;
            current = inner;
        }
        depth
    }

    /// Innermost non-array type
    pub fn base(&self) -> &ParamType {
        let mut current = self;
        while let Some(inner) = current.element() {
            current = inner;
        }
        current
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Int(bits) => write!(f, "int{}", bits),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Bool => f.write_str("bool"),
            ParamType::Address => f.write_str("address"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::Real => f.write_str("real"),
            ParamType::UReal => f.write_str("ureal"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::String => f.write_str("string"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, len) => write!(f, "{}[{}]", inner, len),
        }
    }
}

impl FromStr for ParamType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

/// Parse a type string (e.g., "uint256", "address", "bytes32[]", "int[3]")
pub fn parse_type(s: &str) -> Result<ParamType, AbiError> {
    parse_nested(s, 0)
}

fn parse_nested(s: &str, depth: usize) -> Result<ParamType, AbiError> {
    let s = s.trim();

    // T[] / T[K], rightmost suffix is the outermost dimension
    if let Some(body) = s.strip_suffix(']') {
        if depth == MAX_ARRAY_DEPTH {
            return Err(unsupported(s));
        }
        let open = body.rfind('[').ok_or_else(|| unsupported(s))?;
        let inner = parse_nested(&body[..open], depth + 1).map_err(|_| unsupported(s))?;
        let len = body[open + 1..].trim();
        if len.is_empty() {
            return Ok(ParamType::Array(Box::new(inner)));
        }
        return match parse_digits(len) {
            Some(len) if len > 0 => Ok(ParamType::FixedArray(Box::new(inner), len)),
            _ => Err(unsupported(s)),
        };
    }

    match s {
        "address" => return Ok(ParamType::Address),
        "bool" => return Ok(ParamType::Bool),
        "string" => return Ok(ParamType::String),
        "bytes" => return Ok(ParamType::Bytes),
        "real" => return Ok(ParamType::Real),
        "ureal" => return Ok(ParamType::UReal),
        _ => {}
    }

    // uint<N>
    if let Some(rest) = s.strip_prefix("uint") {
        return int_bits(rest).map(ParamType::Uint).ok_or_else(|| unsupported(s));
    }

    // int<N>
    if let Some(rest) = s.strip_prefix("int") {
        return int_bits(rest).map(ParamType::Int).ok_or_else(|| unsupported(s));
    }

    // bytes<N>
    if let Some(rest) = s.strip_prefix("bytes") {
        return match parse_digits(rest) {
            Some(size) if (1..=32).contains(&size) => Ok(ParamType::FixedBytes(size)),
            _ => Err(unsupported(s)),
        };
    }

    Err(unsupported(s))
}

/// Bit width after `int`/`uint`; bare keyword means 256
fn int_bits(rest: &str) -> Option<usize> {
    if rest.is_empty() {
        return Some(256);
    }
    parse_digits(rest).filter(|bits| (8..=256).contains(bits) && bits % 8 == 0)
}

fn parse_digits(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn unsupported(s: &str) -> AbiError {
    AbiError::UnsupportedType(s.to_string())
}
