//! Error types for token identity bookkeeping.

use alloy_primitives::Address;

/// Errors that can occur while tracking token identities.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// One token address was observed with two different `decimals` values.
    ///
    /// Decimals are informative rather than part of token identity, but a
    /// conflict within one session means one of the two observations would
    /// convert amounts at the wrong scale. The registry surfaces the conflict
    /// instead of ignoring it.
    #[error("token {address} decimals mismatch: first observed {known}, now {conflicting}")]
    DecimalsMismatch {
        /// The token address the conflict was observed for
        address: Address,
        /// The decimals value recorded first
        known: u8,
        /// The conflicting decimals value observed later
        conflicting: u8,
    },
}

impl TokenError {
    /// Create a `DecimalsMismatch` error.
    pub fn decimals_mismatch(address: Address, known: u8, conflicting: u8) -> Self {
        TokenError::DecimalsMismatch {
            address,
            known,
            conflicting,
        }
    }
}
