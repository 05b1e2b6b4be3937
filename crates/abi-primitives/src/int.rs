//! Signed 256-bit integer in sign-magnitude form

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use primitive_types::U256;
use thiserror::Error;

/// Integer parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntError {
    /// Text is not a decimal or `0x` hex number
    #[error("invalid digits: {0:?}")]
    InvalidDigits(String),
    /// Magnitude needs more than 256 bits
    #[error("magnitude exceeds 256 bits: {0}")]
    Overflow(String),
}

/// Signed integer with a 256-bit magnitude.
///
/// Zero is never negative, so `-0` and `0` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct I256 {
    abs: U256,
    negative: bool,
}

impl I256 {
    /// Zero
    pub const ZERO: I256 = I256 { abs: U256([0u64; 4]), negative: false };

    /// Create from magnitude and sign
    pub fn new(abs: U256, negative: bool) -> Self {
        Self {
            abs,
            negative: negative && !abs.is_zero(),
        }
    }

    /// Create a non-negative value
    pub fn from_u256(abs: U256) -> Self {
        Self::new(abs, false)
    }

    /// Absolute value
    pub fn abs(&self) -> U256 {
        self.abs
    }

    /// Check if strictly below zero
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    /// Project onto a 256-bit word.
    ///
    /// Negative values become `2^256 - |v|`, so `-1` is all ones.
    pub fn to_twos_complement(&self) -> U256 {
        if self.negative {
            self.abs.overflowing_neg().0
        } else {
            self.abs
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for I256 {
                fn from(value: $t) -> Self {
                    Self::from_u256(U256::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for I256 {
                fn from(value: $t) -> Self {
                    Self::new(U256::from(value.unsigned_abs()), value < 0)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<U256> for I256 {
    fn from(value: U256) -> Self {
        Self::from_u256(value)
    }
}

impl Neg for I256 {
    type Output = I256;

    fn neg(self) -> Self::Output {
        I256::new(self.abs, !self.negative)
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

impl FromStr for I256 {
    type Err = IntError;

    /// Parse `123`, `-123`, `0x7b` or `-0x7b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let abs = if let Some(digits) = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
        {
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(IntError::InvalidDigits(s.to_string()));
            }
            U256::from_str_radix(digits, 16).map_err(|_| IntError::Overflow(s.to_string()))?
        } else {
            if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
                return Err(IntError::InvalidDigits(s.to_string()));
            }
            U256::from_dec_str(unsigned).map_err(|_| IntError::Overflow(s.to_string()))?
        };

        Ok(I256::new(abs, negative))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for I256 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for I256 {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }
}
