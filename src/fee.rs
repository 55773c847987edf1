//! Fee quotes denominated in ergs.
//!
//! Ergs are the gas-equivalent computational/storage cost unit of the
//! network's fee model. A [`Fee`] bundles the limit values a fee estimate
//! quotes, denominated in a fee token. No upper bound is imposed here; the
//! network enforces its own caps.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::eip712::Eip712Meta;
use crate::wire;

/// Fee quote for a transaction
///
/// Four non-negative integer limit fields plus the token they are
/// denominated in. Hex-encoded quantities on the wire.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use zkwire::{Fee, ETH_TOKEN_ADDRESS};
///
/// let fee = Fee {
///     fee_token: ETH_TOKEN_ADDRESS,
///     ergs_limit: U256::from(1_000_000u64),
///     ergs_price_limit: U256::from(250_000_000u64),
///     ergs_per_storage_limit: U256::from(100u64),
///     ergs_per_pubdata_limit: U256::from(16u64),
/// };
/// let meta = fee.to_eip712_meta();
/// assert_eq!(meta.ergs_per_pubdata, "0x10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Fee {
    /// Token the limits are denominated in
    pub fee_token: Address,
    /// Maximum ergs the transaction may consume
    #[serde(with = "wire::quantity")]
    pub ergs_limit: U256,
    /// Maximum price per erg
    #[serde(with = "wire::quantity")]
    pub ergs_price_limit: U256,
    /// Maximum ergs per storage slot written
    #[serde(with = "wire::quantity")]
    pub ergs_per_storage_limit: U256,
    /// Maximum ergs per byte of published pubdata
    #[serde(with = "wire::quantity")]
    pub ergs_per_pubdata_limit: U256,
}

impl Fee {
    /// Zero-limit fee quote denominated in the given token
    pub fn new(fee_token: Address) -> Self {
        Self {
            fee_token,
            ergs_limit: U256::ZERO,
            ergs_price_limit: U256::ZERO,
            ergs_per_storage_limit: U256::ZERO,
            ergs_per_pubdata_limit: U256::ZERO,
        }
    }

    /// Serialize the typed-data subset of this quote into an [`Eip712Meta`].
    ///
    /// A direct radix conversion, not a numeric transformation:
    /// `ergs_per_storage_limit` becomes the `ergsPerStorage` hex string and
    /// `ergs_per_pubdata_limit` becomes `ergsPerPubdata`.
    pub fn to_eip712_meta(&self) -> Eip712Meta {
        Eip712Meta::new(
            self.fee_token,
            self.ergs_per_storage_limit,
            self.ergs_per_pubdata_limit,
        )
    }
}
