//! Hex-quantity encoding for the wire contract.
//!
//! Quantities travel as `0x`-prefixed, lowercase hex strings with no leading
//! zero padding; zero is `0x0`. Addresses are 20-byte (42-character) and
//! hashes 32-byte (66-character) `0x`-prefixed hex strings. Parsing is
//! lenient about digit case but strict about prefix, length, and character
//! set; failures surface as [`WireError::MalformedHex`].
//!
//! The [`quantity`] and [`quantity_u64`] submodules are serde adapters for
//! use with `#[serde(with = "...")]` on wire-record fields.

use alloy_primitives::{hex, Address, B256, U256};

use crate::errors::WireError;

/// Encode a 256-bit quantity as a minimal lowercase hex string.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use zkwire::wire;
///
/// assert_eq!(wire::encode_quantity(U256::ZERO), "0x0");
/// assert_eq!(wire::encode_quantity(U256::from(26u64)), "0x1a");
/// ```
pub fn encode_quantity(value: U256) -> String {
    format!("{value:#x}")
}

/// Encode a 64-bit quantity as a minimal lowercase hex string.
pub fn encode_quantity_u64(value: u64) -> String {
    format!("{value:#x}")
}

/// Encode an address as a lowercase `0x`-prefixed hex string.
pub fn encode_address(address: Address) -> String {
    hex::encode_prefixed(address)
}

/// Encode a 32-byte hash as a lowercase `0x`-prefixed hex string.
pub fn encode_hash(hash: B256) -> String {
    hex::encode_prefixed(hash)
}

/// Parse a hex quantity string into a `U256`.
///
/// Accepts leading zeros and mixed-case digits on input; rejects a missing
/// `0x` prefix, an empty digit string, non-hex characters, and values that
/// exceed 256 bits.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use zkwire::wire;
///
/// assert_eq!(wire::parse_quantity("0x1a").unwrap(), U256::from(26u64));
/// assert!(wire::parse_quantity("1a").is_err());
/// ```
pub fn parse_quantity(s: &str) -> Result<U256, WireError> {
    let digits = digits_of(s)?;
    U256::from_str_radix(digits, 16)
        .map_err(|_| WireError::malformed_hex(s, "quantity exceeds 256 bits"))
}

/// Parse a hex quantity string into a `u64`.
pub fn parse_quantity_u64(s: &str) -> Result<u64, WireError> {
    let digits = digits_of(s)?;
    u64::from_str_radix(digits, 16)
        .map_err(|_| WireError::malformed_hex(s, "quantity exceeds 64 bits"))
}

/// Parse a 42-character `0x`-prefixed hex string into an `Address`.
pub fn parse_address(s: &str) -> Result<Address, WireError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| WireError::malformed_hex(s, "missing 0x prefix"))?;
    if digits.len() != 40 {
        return Err(WireError::malformed_hex(s, "expected a 20-byte value"));
    }
    digits
        .parse::<Address>()
        .map_err(|_| WireError::malformed_hex(s, "invalid hex digits"))
}

/// Parse a 66-character `0x`-prefixed hex string into a `B256` hash.
pub fn parse_hash(s: &str) -> Result<B256, WireError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| WireError::malformed_hex(s, "missing 0x prefix"))?;
    if digits.len() != 64 {
        return Err(WireError::malformed_hex(s, "expected a 32-byte value"));
    }
    digits
        .parse::<B256>()
        .map_err(|_| WireError::malformed_hex(s, "invalid hex digits"))
}

fn digits_of(s: &str) -> Result<&str, WireError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| WireError::malformed_hex(s, "missing 0x prefix"))?;
    if digits.is_empty() {
        return Err(WireError::malformed_hex(s, "no digits after prefix"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(WireError::malformed_hex(s, "invalid hex digits"));
    }
    Ok(digits)
}

/// Serde adapter serializing a `U256` as a minimal hex quantity string.
pub mod quantity {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_quantity(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_quantity(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter serializing a `u64` as a minimal hex quantity string.
pub mod quantity_u64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_quantity_u64(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_quantity_u64(&s).map_err(serde::de::Error::custom)
    }
}
