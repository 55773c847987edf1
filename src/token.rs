//! Token identity: registry entries, the native-asset sentinel, and
//! decimals-consistency tracking.
//!
//! A [`Token`] pairs an address and symbol with the decimal count that scales
//! its amounts. The chain's native asset is represented by a fixed sentinel
//! address rather than a contract address; [`Token::is_native`] is how the
//! transaction-building layer decides between a plain value transfer and an
//! ERC20-style call.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::amount::{DecimalAmount, TokenAmount, TokenDecimals};
use crate::errors::{AmountError, TokenError};

/// Sentinel address of the chain's native asset (ETH).
///
/// Tokens with this address are not contracts; transfers of them are plain
/// value transfers.
pub const ETH_TOKEN_ADDRESS: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

/// Symbol of the chain's native asset.
pub const ETH_TOKEN_SYMBOL: &str = "ETH";

/// A token known to the L2 network
///
/// Immutable value object identifying a token and carrying the decimal count
/// that scales its amounts. Equality and hashing cover address and symbol
/// only; `decimals` is informative, not part of identity. Conflicting
/// decimals observations for one address are surfaced by [`TokenRegistry`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use zkwire::{Token, TokenDecimals};
///
/// let usdc = Token::new(
///     address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
///     "USDC",
///     TokenDecimals::USDC,
/// );
/// assert!(!usdc.is_native());
/// assert!(Token::eth().is_native());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Token contract address, or the native-asset sentinel
    pub address: Address,
    /// Display symbol (e.g. "ETH" or "USDC")
    pub symbol: String,
    /// Number of fractional digits scaling this token's amounts
    pub decimals: TokenDecimals,
}

impl Token {
    /// Create a new token descriptor
    pub fn new(address: Address, symbol: impl Into<String>, decimals: TokenDecimals) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// The canonical native-asset token (sentinel address, "ETH", 18 decimals).
    ///
    /// Idempotent; every call returns the same value.
    pub fn eth() -> Self {
        Self::new(ETH_TOKEN_ADDRESS, ETH_TOKEN_SYMBOL, TokenDecimals::STANDARD)
    }

    /// Whether this token is the chain's native asset.
    ///
    /// True iff the address equals the fixed sentinel AND the symbol equals
    /// `"ETH"`. Both must match; a contract that happens to use the symbol
    /// "ETH" is not native.
    pub fn is_native(&self) -> bool {
        self.address == ETH_TOKEN_ADDRESS && self.symbol == ETH_TOKEN_SYMBOL
    }

    /// Render raw minor units of this token as a decimal amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use zkwire::{Token, TokenAmount};
    ///
    /// let eth = Token::eth();
    /// let raw = TokenAmount::parse("1500000000000000000").unwrap();
    /// assert_eq!(eth.to_decimal(raw).to_string(), "1.5");
    /// ```
    pub fn to_decimal(&self, amount: TokenAmount) -> DecimalAmount {
        amount.to_decimal(self.decimals)
    }

    /// Render a decimal amount of this token as raw minor units.
    ///
    /// Fails if the amount carries more fractional digits than this token's
    /// decimals support; see [`DecimalAmount::to_minor_units`].
    pub fn to_minor_units(&self, amount: &DecimalAmount) -> Result<TokenAmount, AmountError> {
        amount.to_minor_units(self.decimals)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.symbol == other.symbol
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
        self.symbol.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}

/// Catalog entry describing a token, as served by the network's registry.
///
/// Distinct from [`Token`]: no conversion behavior is attached, and the shape
/// carries the token's full name. Unknown fields are rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenDescription {
    /// Token name (e.g. "Ethereum" or "USD Coin")
    pub name: String,
    /// Token symbol (e.g. "ETH" or "USDC")
    pub symbol: String,
    /// Token precision (e.g. 18 for ETH, so "1.0" ETH = 10^18 minor units)
    pub decimals: TokenDecimals,
    /// Token contract address
    pub address: Address,
}

impl TokenDescription {
    /// Placeholder description for a token with no known metadata.
    ///
    /// Names the token after its address and assumes the standard 18
    /// decimals.
    pub fn unknown(address: Address) -> Self {
        let fallback = format!("ERC20-{address:x}");
        Self {
            name: fallback.clone(),
            symbol: fallback,
            decimals: TokenDecimals::STANDARD,
            address,
        }
    }
}

impl From<TokenDescription> for Token {
    fn from(description: TokenDescription) -> Self {
        Token::new(
            description.address,
            description.symbol,
            description.decimals,
        )
    }
}

/// Tracks the decimals observed for each token address within a session.
///
/// Decimals are not part of token identity, but one address mapping to two
/// different decimal counts means one observation would convert amounts at
/// the wrong scale. [`observe`](Self::observe) flags such conflicts instead
/// of ignoring them.
///
/// # Examples
///
/// ```
/// use zkwire::{Token, TokenDecimals, TokenError, TokenRegistry};
///
/// let mut registry = TokenRegistry::new();
/// registry.observe(&Token::eth()).unwrap();
///
/// let mut impostor = Token::eth();
/// impostor.decimals = TokenDecimals::new(6);
/// assert!(matches!(
///     registry.observe(&impostor),
///     Err(TokenError::DecimalsMismatch { .. })
/// ));
/// ```
#[derive(Debug, Default)]
pub struct TokenRegistry {
    decimals: HashMap<Address, TokenDecimals>,
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token observation, flagging decimals conflicts.
    ///
    /// The first observation of an address records its decimals; later
    /// observations must agree or the call fails with
    /// [`TokenError::DecimalsMismatch`]. The registry is left unchanged on
    /// failure.
    pub fn observe(&mut self, token: &Token) -> Result<(), TokenError> {
        match self.decimals.get(&token.address) {
            Some(known) if *known != token.decimals => Err(TokenError::decimals_mismatch(
                token.address,
                known.as_u8(),
                token.decimals.as_u8(),
            )),
            Some(_) => Ok(()),
            None => {
                debug!(
                    address = %token.address,
                    symbol = %token.symbol,
                    decimals = token.decimals.as_u8(),
                    "registering token"
                );
                self.decimals.insert(token.address, token.decimals);
                Ok(())
            }
        }
    }

    /// Decimals recorded for an address, if it has been observed.
    pub fn decimals_of(&self, address: &Address) -> Option<TokenDecimals> {
        self.decimals.get(address).copied()
    }

    /// Number of distinct token addresses observed
    pub fn len(&self) -> usize {
        self.decimals.len()
    }

    /// Whether no tokens have been observed yet
    pub fn is_empty(&self) -> bool {
        self.decimals.is_empty()
    }
}
