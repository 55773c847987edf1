//! Transaction request variants: [`Transfer`] and [`Withdraw`].
//!
//! Pure data containers built by a caller in decimal units; the consuming
//! client layer renders them to wire-level records. The only behavior here is
//! defaulting: an absent token resolves to the native asset through a
//! visible, testable function ([`Transfer::token_or_native`]) rather than an
//! implicit field default, and an absent nonce is left for the client layer
//! to sequence.
//!
//! No `to`-address validation happens here; that belongs to the external
//! address-validation collaborator.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use tracing::trace;

use crate::amount::{DecimalAmount, TokenAmount};
use crate::errors::AmountError;
use crate::token::Token;
use crate::wire;

/// Account nonce, sequenced per sender by the client layer
///
/// Hex-encoded as a quantity on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nonce(u64);

impl Nonce {
    /// Create a new nonce
    pub const fn new(nonce: u64) -> Self {
        Self(nonce)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Add<u64> for Nonce {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl std::fmt::Display for Nonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Nonce {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&wire::encode_quantity_u64(self.0))
    }
}

impl<'de> Deserialize<'de> for Nonce {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        wire::parse_quantity_u64(&s)
            .map(Nonce)
            .map_err(serde::de::Error::custom)
    }
}

/// Request to move tokens to another L2 account
///
/// Amounts are decimal at this layer;
/// [`amount_in_minor_units`](Self::amount_in_minor_units) renders them to
/// the integer form valid on the wire, surfacing the resolved token's
/// representability errors.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use zkwire::{DecimalAmount, Transfer};
///
/// let transfer = Transfer::new(
///     address!("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
///     DecimalAmount::parse("1.5").unwrap(),
/// );
/// // token was not set: resolves to the native asset
/// assert!(transfer.token_or_native().is_native());
/// assert_eq!(
///     transfer.amount_in_minor_units().unwrap().to_string(),
///     "1500000000000000000",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Recipient account
    pub to: Address,
    /// Amount to move, in human-scale units of the token
    pub amount: DecimalAmount,
    /// Token to move; `None` means the native asset
    pub token: Option<Token>,
    /// Sender nonce; `None` leaves sequencing to the client layer
    pub nonce: Option<Nonce>,
}

impl Transfer {
    /// Create a transfer of the native asset with an unsequenced nonce
    pub fn new(to: Address, amount: DecimalAmount) -> Self {
        Self {
            to,
            amount,
            token: None,
            nonce: None,
        }
    }

    /// Set the token to transfer
    pub fn with_token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    /// Set an explicit nonce
    pub fn with_nonce(mut self, nonce: Nonce) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// The token this request moves, defaulting to the native asset.
    pub fn token_or_native(&self) -> Token {
        resolve_token(self.token.as_ref(), "transfer")
    }

    /// Render the amount in minor units of the resolved token.
    pub fn amount_in_minor_units(&self) -> Result<TokenAmount, AmountError> {
        self.token_or_native().to_minor_units(&self.amount)
    }
}

/// Request to withdraw tokens from the L2 back to L1
///
/// Same shape and defaulting behavior as [`Transfer`]; the distinct type
/// keeps the two operations from being confused at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdraw {
    /// L1 recipient account
    pub to: Address,
    /// Amount to withdraw, in human-scale units of the token
    pub amount: DecimalAmount,
    /// Token to withdraw; `None` means the native asset
    pub token: Option<Token>,
    /// Sender nonce; `None` leaves sequencing to the client layer
    pub nonce: Option<Nonce>,
}

impl Withdraw {
    /// Create a withdrawal of the native asset with an unsequenced nonce
    pub fn new(to: Address, amount: DecimalAmount) -> Self {
        Self {
            to,
            amount,
            token: None,
            nonce: None,
        }
    }

    /// Set the token to withdraw
    pub fn with_token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    /// Set an explicit nonce
    pub fn with_nonce(mut self, nonce: Nonce) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// The token this request withdraws, defaulting to the native asset.
    pub fn token_or_native(&self) -> Token {
        resolve_token(self.token.as_ref(), "withdraw")
    }

    /// Render the amount in minor units of the resolved token.
    pub fn amount_in_minor_units(&self) -> Result<TokenAmount, AmountError> {
        self.token_or_native().to_minor_units(&self.amount)
    }
}

fn resolve_token(token: Option<&Token>, request: &'static str) -> Token {
    match token {
        Some(token) => token.clone(),
        None => {
            trace!(request, "no token set, defaulting to native asset");
            Token::eth()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::TokenDecimals;
    use alloy_primitives::{address, U256};

    fn recipient() -> Address {
        address!("d8da6bf26964af9d7eed9e03e53415d37aa96045")
    }

    fn usdc() -> Token {
        Token::new(
            address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
            "USDC",
            TokenDecimals::USDC,
        )
    }

    #[test]
    fn transfer_defaults_to_native_token() {
        let transfer = Transfer::new(recipient(), DecimalAmount::parse("1.5").unwrap());
        assert!(transfer.token.is_none());
        assert!(transfer.token_or_native().is_native());
    }

    #[test]
    fn transfer_keeps_explicit_token() {
        let transfer = Transfer::new(recipient(), DecimalAmount::parse("100").unwrap())
            .with_token(usdc());
        assert_eq!(transfer.token_or_native(), usdc());
    }

    #[test]
    fn transfer_amount_uses_resolved_decimals() {
        let native = Transfer::new(recipient(), DecimalAmount::parse("1.5").unwrap());
        assert_eq!(
            native.amount_in_minor_units().unwrap().as_u256(),
            U256::from(1_500_000_000_000_000_000u64)
        );

        let stable = Transfer::new(recipient(), DecimalAmount::parse("1.5").unwrap())
            .with_token(usdc());
        assert_eq!(
            stable.amount_in_minor_units().unwrap().as_u256(),
            U256::from(1_500_000u64)
        );
    }

    #[test]
    fn transfer_amount_surfaces_precision_loss() {
        // 7 fractional digits cannot be represented in 6 decimals
        let transfer = Transfer::new(recipient(), DecimalAmount::parse("0.1234567").unwrap())
            .with_token(usdc());
        assert!(matches!(
            transfer.amount_in_minor_units(),
            Err(AmountError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn withdraw_mirrors_transfer_defaulting() {
        let withdraw = Withdraw::new(recipient(), DecimalAmount::parse("2").unwrap());
        assert!(withdraw.nonce.is_none());
        assert!(withdraw.token_or_native().is_native());
        assert_eq!(
            withdraw.amount_in_minor_units().unwrap().as_u256(),
            U256::from(2_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn nonce_is_set_explicitly_and_sequences() {
        let withdraw = Withdraw::new(recipient(), DecimalAmount::parse("2").unwrap())
            .with_nonce(Nonce::new(7));
        assert_eq!(withdraw.nonce, Some(Nonce::new(7)));
        assert_eq!(Nonce::new(7) + 1, Nonce::new(8));
    }

    #[test]
    fn nonce_serializes_as_hex_quantity() {
        let json = serde_json::to_string(&Nonce::new(26)).unwrap();
        assert_eq!(json, r#""0x1a""#);
        assert_eq!(serde_json::from_str::<Nonce>(&json).unwrap(), Nonce::new(26));
    }
}
