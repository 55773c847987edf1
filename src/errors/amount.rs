//! Error types for amount conversion.
//!
//! This module provides error types for converting between a token's decimal
//! human-scale representation and its integer minor-unit representation.

/// Errors that can occur when converting token amounts.
///
/// Both conversion directions are atomic: on error no partially-converted
/// value is produced.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    /// The amount is not a well-formed non-negative value.
    ///
    /// This occurs for negative inputs (amounts are always non-negative;
    /// debits and credits are expressed by the operation, not by sign), for
    /// strings that do not parse as a decimal number, and for values that
    /// exceed the 256-bit minor-unit range.
    #[error("invalid amount {value}: {details}")]
    InvalidAmount {
        /// The rejected input, rendered for diagnostics
        value: String,
        /// Why the input was rejected
        details: String,
    },

    /// Converting to minor units would drop nonzero fractional digits.
    ///
    /// The amount carries more fractional digits than the token's `decimals`
    /// supports. The conversion rejects rather than truncating; nothing in
    /// this crate rounds an amount.
    #[error("amount {value} carries more fractional digits than the token's {decimals} decimals")]
    PrecisionLoss {
        /// The rejected amount
        value: String,
        /// The decimal count the token supports
        decimals: u8,
    },
}

impl AmountError {
    /// Create an `InvalidAmount` error.
    pub fn invalid_amount(value: impl std::fmt::Display, details: impl Into<String>) -> Self {
        AmountError::InvalidAmount {
            value: value.to_string(),
            details: details.into(),
        }
    }

    /// Create a `PrecisionLoss` error.
    pub fn precision_loss(value: impl std::fmt::Display, decimals: u8) -> Self {
        AmountError::PrecisionLoss {
            value: value.to_string(),
            decimals,
        }
    }

    /// Helper to create an `InvalidAmount` error for a negative input.
    pub fn negative_amount(value: impl std::fmt::Display) -> Self {
        Self::invalid_amount(value, "amounts are non-negative")
    }
}
