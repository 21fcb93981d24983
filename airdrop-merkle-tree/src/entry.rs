//! Allowlist entries: a 20-byte address paired with an unsigned amount.

use std::{fmt, str::FromStr};

use crate::{AirdropMerkleError, Result};

/// Width of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Width of the numeric word an amount is encoded into.
pub const AMOUNT_WORD_LEN: usize = 32;

/// A 20-byte account address, the key of an allowlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = AirdropMerkleError;

    /// Parses 40 hex characters, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if cleaned.len() != ADDRESS_LEN * 2 {
            return Err(AirdropMerkleError::InvalidData(format!(
                "invalid address length: expected {} hex chars, got {}",
                ADDRESS_LEN * 2,
                cleaned.len()
            )));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(cleaned, &mut bytes).map_err(|e| {
            AirdropMerkleError::InvalidData(format!("invalid address hex {:?}: {}", s, e))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// An unsigned amount of arbitrary precision.
///
/// Stored as its big-endian magnitude with leading zero bytes stripped, so
/// zero is the empty slice. The width is only checked when the amount is
/// encoded into a leaf (see [`Amount::to_word`]), which lets an over-wide
/// value be represented and rejected at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Amount {
    magnitude: Vec<u8>,
}

impl Amount {
    /// Build an amount from big-endian bytes of any length.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let first_nonzero = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        Self {
            magnitude: bytes[first_nonzero..].to_vec(),
        }
    }

    /// Big-endian magnitude without leading zeros.
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.magnitude
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Encode as a 32-byte big-endian word, left-padded with zeros.
    ///
    /// Fails if the amount needs more than 256 bits.
    pub fn to_word(&self) -> Result<[u8; AMOUNT_WORD_LEN]> {
        let len = self.magnitude.len();
        if len > AMOUNT_WORD_LEN {
            return Err(AirdropMerkleError::Encoding {
                index: None,
                reason: format!(
                    "amount needs {} bytes, exceeds the {}-byte word",
                    len, AMOUNT_WORD_LEN
                ),
            });
        }
        let mut word = [0u8; AMOUNT_WORD_LEN];
        word[AMOUNT_WORD_LEN - len..].copy_from_slice(&self.magnitude);
        Ok(word)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

impl FromStr for Amount {
    type Err = AirdropMerkleError;

    /// Parses a non-empty string of decimal digits.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim();
        if digits.is_empty() {
            return Err(AirdropMerkleError::InvalidData("empty amount".into()));
        }
        let mut magnitude: Vec<u8> = Vec::new();
        for c in digits.bytes() {
            if !c.is_ascii_digit() {
                return Err(AirdropMerkleError::InvalidData(format!(
                    "invalid decimal amount {:?}",
                    s
                )));
            }
            // magnitude = magnitude * 10 + digit
            let mut carry = u32::from(c - b'0');
            for byte in magnitude.iter_mut().rev() {
                let v = u32::from(*byte) * 10 + carry;
                *byte = v as u8;
                carry = v >> 8;
            }
            while carry > 0 {
                magnitude.insert(0, carry as u8);
                carry >>= 8;
            }
        }
        Ok(Self::from_be_bytes(&magnitude))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude.is_empty() {
            return f.write_str("0");
        }
        let mut digits = Vec::new();
        let mut n = self.magnitude.clone();
        while !n.is_empty() {
            let mut rem = 0u32;
            for byte in n.iter_mut() {
                let cur = (rem << 8) | u32::from(*byte);
                *byte = (cur / 10) as u8;
                rem = cur % 10;
            }
            digits.push(b'0' + rem as u8);
            let first_nonzero = n.iter().position(|b| *b != 0).unwrap_or(n.len());
            n.drain(..first_nonzero);
        }
        digits.reverse();
        f.write_str(&String::from_utf8_lossy(&digits))
    }
}

/// One allowlist entry. Its position in the input sequence is its claim index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Claimant address.
    pub address: Address,
    /// Claimable amount.
    pub amount: Amount,
}

impl Entry {
    /// Create an entry from an address and anything convertible to an amount.
    pub fn new(address: impl Into<Address>, amount: impl Into<Amount>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    use super::{Address, Amount};

    impl Serialize for Address {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }

    /// Amounts travel as decimal strings; JSON numbers cannot hold 256 bits.
    impl Serialize for Amount {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Amount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }
}
