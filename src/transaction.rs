//! Wire-shape transaction records.
//!
//! [`Transaction`] is the estimation-input shape submitted to the fee
//! estimator; [`TransactionInfo`] is the confirmed-transaction introspection
//! shape returned by the node. Both are flat records mirroring the Ethereum
//! transaction shape plus the [`Eip712Meta`] extension. Field presence is
//! the only invariant, and unknown fields are rejected at decode time.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::eip712::Eip712Meta;
use crate::errors::WireError;
use crate::request::Nonce;
use crate::wire;

/// Hash of an L2 transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionHash(B256);

impl TransactionHash {
    /// Wrap a 32-byte hash
    pub const fn new(hash: B256) -> Self {
        Self(hash)
    }

    /// Get the inner 32-byte value
    pub const fn as_b256(&self) -> B256 {
        self.0
    }

    /// Parse a 66-character `0x`-prefixed hex string.
    pub fn parse(s: &str) -> Result<Self, WireError> {
        wire::parse_hash(s).map(Self)
    }
}

impl From<B256> for TransactionHash {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", wire::encode_hash(self.0))
    }
}

/// Hash of the L1 transaction finalizing a withdrawal
///
/// Distinct from [`TransactionHash`] so an L2 hash is never handed to an L1
/// lookup by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct L1WithdrawHash(B256);

impl L1WithdrawHash {
    /// Wrap a 32-byte hash
    pub const fn new(hash: B256) -> Self {
        Self(hash)
    }

    /// Get the inner 32-byte value
    pub const fn as_b256(&self) -> B256 {
        self.0
    }

    /// Parse a 66-character `0x`-prefixed hex string.
    pub fn parse(s: &str) -> Result<Self, WireError> {
        wire::parse_hash(s).map(Self)
    }
}

impl From<B256> for L1WithdrawHash {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for L1WithdrawHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", wire::encode_hash(self.0))
    }
}

/// Offset into a transaction-history query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Offset(u64);

impl Offset {
    /// Create a new offset
    pub const fn new(offset: u64) -> Self {
        Self(offset)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Offset {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Maximum number of records a history query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryLimit(u64);

impl QueryLimit {
    /// Create a new query limit
    pub const fn new(limit: u64) -> Self {
        Self(limit)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for QueryLimit {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Fee-estimation input shape
///
/// Submitted to the node to quote a fee for a not-yet-signed transaction.
/// All scalar fields are hex strings on the wire; `eip712Meta` is nested.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{address, Bytes, U256};
/// use zkwire::{Eip712Meta, Transaction, ETH_TOKEN_ADDRESS};
///
/// let tx = Transaction {
///     from: address!("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
///     to: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
///     gas: U256::from(21_000u64),
///     gas_price: U256::from(250_000_000u64),
///     value: U256::ZERO,
///     data: Bytes::new(),
///     transaction_type: 0x71,
///     eip712_meta: Eip712Meta::new(ETH_TOKEN_ADDRESS, U256::ZERO, U256::ZERO),
/// };
/// let json = serde_json::to_value(&tx).unwrap();
/// assert_eq!(json["gas"], "0x5208");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Transaction {
    /// Sender account
    pub from: Address,
    /// Recipient account or contract
    pub to: Address,
    /// Gas limit
    #[serde(with = "wire::quantity")]
    pub gas: U256,
    /// Gas price
    #[serde(with = "wire::quantity")]
    pub gas_price: U256,
    /// Value transferred, in minor units of the native asset
    #[serde(with = "wire::quantity")]
    pub value: U256,
    /// Call data
    pub data: Bytes,
    /// Transaction envelope type
    #[serde(with = "wire::quantity_u64")]
    pub transaction_type: u64,
    /// Typed-data fee metadata
    pub eip712_meta: Eip712Meta,
}

/// Confirmed-transaction introspection shape
///
/// Decoded form of a transaction the node reports as included in a block.
/// Numeric fields are native integers on this side and hex quantities on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransactionInfo {
    /// Hash of the containing block
    pub block_hash: B256,
    /// Height of the containing block
    #[serde(with = "wire::quantity_u64")]
    pub block_number: u64,
    /// Sender account
    pub from: Address,
    /// Gas limit
    #[serde(with = "wire::quantity")]
    pub gas: U256,
    /// Gas price paid
    #[serde(with = "wire::quantity")]
    pub gas_price: U256,
    /// Transaction hash
    pub hash: TransactionHash,
    /// Call data
    pub input: Bytes,
    /// Sender nonce
    pub nonce: Nonce,
    /// Recipient account or contract
    pub to: Address,
    /// Position within the block
    #[serde(with = "wire::quantity_u64")]
    pub transaction_index: u64,
    /// Value transferred, in minor units of the native asset
    #[serde(with = "wire::quantity")]
    pub value: U256,
}
