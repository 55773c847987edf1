//! Error types for the zkwire library.
//!
//! This module provides strongly-typed errors for all public APIs in zkwire.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   ([`AmountError`], [`TokenError`], [`WireError`])
//! - **Unified error type** ([`ZkwireError`]) for convenience when you don't
//!   need to distinguish between error sources
//!
//! Every error is a value-returning failure: nothing in this crate logs,
//! retries, or masks an error. Propagation policy belongs to the client layer.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```
//! use zkwire::{AmountError, DecimalAmount, TokenDecimals};
//!
//! let amount = DecimalAmount::parse("1.5").unwrap();
//! match amount.to_minor_units(TokenDecimals::new(0)) {
//!     Ok(minor) => println!("minor units: {minor}"),
//!     Err(AmountError::PrecisionLoss { decimals, .. }) => {
//!         eprintln!("amount does not fit in {decimals} decimals");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```
//! use zkwire::{Token, TokenAmount, ZkwireError};
//!
//! fn minor_units_of(token: &Token, amount: &str) -> Result<TokenAmount, ZkwireError> {
//!     let decimal = zkwire::DecimalAmount::parse(amount)?;
//!     // AmountError converts to ZkwireError via From
//!     Ok(token.to_minor_units(&decimal)?)
//! }
//! ```

mod amount;
mod token;
mod wire;

pub use amount::AmountError;
pub use token::TokenError;
pub use wire::WireError;

/// Unified error type for all zkwire operations.
///
/// This enum wraps all module-specific error types, providing a convenient way
/// to handle errors when you don't need to distinguish between error sources.
///
/// All module-specific error types automatically convert to `ZkwireError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum ZkwireError {
    /// Error from amount conversion between decimal and minor units.
    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from token identity bookkeeping.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Error from decoding wire-format hex fields.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),
}
