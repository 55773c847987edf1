//! EIP-712 typed-data metadata.
//!
//! EIP-712 is the structured, domain-scoped message format the network uses
//! for off-chain signature authorization of transactions. This module holds
//! the auxiliary fee fields attached to a transaction for typed-data signing
//! ([`Eip712Meta`]) and the static domain descriptor ([`Eip712Domain`]). The
//! hashing algorithm and signature verification live in the client layer.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::errors::WireError;
use crate::wire;

/// Typed-data fee metadata attached to a transaction
///
/// Wire-shape mirror of the typed-data subset of a [`Fee`](crate::Fee):
/// every field is a hex string, under the exact wire names `feeToken`,
/// `ergsPerStorage`, and `ergsPerPubdata`. Unknown fields are rejected at
/// decode time. The `parse_*` accessors are the inverse of
/// [`Fee::to_eip712_meta`](crate::Fee::to_eip712_meta) and fail with
/// [`WireError::MalformedHex`] on bad input.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use zkwire::{Eip712Meta, ETH_TOKEN_ADDRESS};
///
/// let meta = Eip712Meta::new(ETH_TOKEN_ADDRESS, U256::from(1_000u64), U256::from(16u64));
/// assert_eq!(meta.ergs_per_storage, "0x3e8");
/// assert_eq!(meta.parse_ergs_per_pubdata().unwrap(), U256::from(16u64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Eip712Meta {
    /// Fee token address as a hex string
    pub fee_token: String,
    /// Ergs-per-storage limit as a hex quantity string
    pub ergs_per_storage: String,
    /// Ergs-per-pubdata limit as a hex quantity string
    pub ergs_per_pubdata: String,
}

impl Eip712Meta {
    /// Build metadata from typed values, hex-encoding each field.
    pub fn new(fee_token: Address, ergs_per_storage: U256, ergs_per_pubdata: U256) -> Self {
        Self {
            fee_token: wire::encode_address(fee_token),
            ergs_per_storage: wire::encode_quantity(ergs_per_storage),
            ergs_per_pubdata: wire::encode_quantity(ergs_per_pubdata),
        }
    }

    /// Parse the fee token address.
    pub fn parse_fee_token(&self) -> Result<Address, WireError> {
        wire::parse_address(&self.fee_token)
    }

    /// Parse the ergs-per-storage limit.
    pub fn parse_ergs_per_storage(&self) -> Result<U256, WireError> {
        wire::parse_quantity(&self.ergs_per_storage)
    }

    /// Parse the ergs-per-pubdata limit.
    pub fn parse_ergs_per_pubdata(&self) -> Result<U256, WireError> {
        wire::parse_quantity(&self.ergs_per_pubdata)
    }
}

/// EIP-712 typed-data domain descriptor
///
/// Scopes signatures to one application on one chain; immutable once
/// constructed for a given chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Eip712Domain {
    /// Human-readable signing domain name
    pub name: String,
    /// Domain version string
    pub version: String,
    /// Chain the signature is valid on
    pub chain_id: u64,
    /// Contract that will verify the signature
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// Create a new domain descriptor
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
        }
    }
}
