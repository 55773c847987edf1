//! Strong types for token amounts and the minor-unit/decimal conversion core.
//!
//! This module provides newtype wrappers that keep the two representations of
//! a token quantity from being mixed:
//!
//! ```text
//! TokenAmount (U256, raw minor units, the only form valid on the wire)
//!     |
//!     | to_decimal(TokenDecimals)
//!     ↓
//! DecimalAmount (BigDecimal, human-readable)
//!     |
//!     | to_minor_units(TokenDecimals)
//!     ↓
//! TokenAmount
//! ```
//!
//! Conversion is exact in both directions: dividing by a power of ten is
//! always representable in base-10 decimal arithmetic, and multiplying back
//! either yields an integer or fails with
//! [`PrecisionLoss`](crate::AmountError::PrecisionLoss). Binary floating
//! point is never involved.

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::str::FromStr;

use crate::errors::AmountError;

/// Raw token amount in minor units (not normalized for decimals)
///
/// This represents the raw token amount as stored on-chain in the smallest
/// unit (e.g., wei for ETH at 18 decimals). To convert to a human-readable
/// amount, use [`to_decimal`](Self::to_decimal) with the token's
/// [`TokenDecimals`].
///
/// Minor units are unsigned by construction; the parse boundary rejects
/// negative inputs so a negative amount can never reach a conversion.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use zkwire::{TokenAmount, TokenDecimals};
///
/// // 1.5 ETH in wei (18 decimals)
/// let raw = TokenAmount::new(U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(raw.to_decimal(TokenDecimals::STANDARD).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero minor units
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new amount from raw minor units
    pub const fn new(minor_units: U256) -> Self {
        Self(minor_units)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse a base-10 integer string into minor units.
    ///
    /// Rejects negative inputs with
    /// [`InvalidAmount`](AmountError::InvalidAmount): amounts are always
    /// non-negative; debits and credits are expressed by which operation is
    /// invoked, not by sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use zkwire::TokenAmount;
    ///
    /// assert!(TokenAmount::parse("1500000000000000000").is_ok());
    /// assert!(TokenAmount::parse("-1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        if s.starts_with('-') {
            return Err(AmountError::negative_amount(s));
        }
        U256::from_str_radix(s, 10)
            .map(Self)
            .map_err(|_| AmountError::invalid_amount(s, "not a base-10 integer"))
    }

    /// Convert minor units to a human-readable decimal amount.
    ///
    /// Computes `minor_units / 10^decimals` exactly, in arbitrary-precision
    /// decimal arithmetic. Total for every `U256` value and every decimal
    /// count; `decimals = 0` is the identity transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use zkwire::{TokenAmount, TokenDecimals};
    ///
    /// // 1 USDC in its smallest unit (6 decimals)
    /// let raw = TokenAmount::new(U256::from(1_000_000u64));
    /// assert_eq!(raw.to_decimal(TokenDecimals::USDC).to_string(), "1");
    /// ```
    pub fn to_decimal(&self, decimals: TokenDecimals) -> DecimalAmount {
        let digits = BigInt::from_bytes_be(Sign::Plus, &self.0.to_be_bytes::<32>());
        DecimalAmount(BigDecimal::new(digits, i64::from(decimals.as_u8())).normalized())
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<TokenAmount> for U256 {
    fn from(value: TokenAmount) -> Self {
        value.0
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token decimal precision
///
/// The number of fractional digits separating minor units from the
/// human-scale unit of a token. Most ERC-20 tokens use 18 decimals (like
/// ETH), but some use different values:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
///
/// # Examples
///
/// ```
/// use zkwire::TokenDecimals;
///
/// assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
/// assert!(TokenDecimals::new(18).is_reasonable());
/// assert!(!TokenDecimals::new(42).is_reasonable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Maximum reasonable decimals (following ERC-20 convention)
    pub const MAX_REASONABLE: u8 = 18;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check if decimals are in reasonable range (0-18)
    ///
    /// The ERC-20 standard allows any u8 value, but most tokens use 18 or
    /// fewer decimals. Values over 18 are unusual and may indicate data
    /// errors; conversion stays exact either way.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

/// Human-readable token amount (normalized for decimals)
///
/// This represents a token quantity after dividing by 10^decimals: 1.5 ETH,
/// not 1.5e18 wei. Backed by arbitrary-precision decimal arithmetic so that
/// common decimal counts (6, 8, 18) carry no representation error; it is
/// never stored or compared as binary floating point.
///
/// A `DecimalAmount` is always non-negative; both constructors reject
/// negative values with [`InvalidAmount`](AmountError::InvalidAmount).
///
/// # Examples
///
/// ```
/// use zkwire::{DecimalAmount, TokenDecimals};
///
/// let amount = DecimalAmount::parse("1.5").unwrap();
/// let minor = amount.to_minor_units(TokenDecimals::STANDARD).unwrap();
/// assert_eq!(minor.to_string(), "1500000000000000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecimalAmount(BigDecimal);

impl DecimalAmount {
    /// Create a decimal amount, rejecting negative values.
    pub fn new(value: BigDecimal) -> Result<Self, AmountError> {
        if value.sign() == Sign::Minus {
            return Err(AmountError::negative_amount(&value));
        }
        Ok(Self(value))
    }

    /// Parse a decimal string into an amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use zkwire::DecimalAmount;
    ///
    /// assert!(DecimalAmount::parse("100.25").is_ok());
    /// assert!(DecimalAmount::parse("-1").is_err());
    /// assert!(DecimalAmount::parse("one and a half").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let value = BigDecimal::from_str(s)
            .map_err(|_| AmountError::invalid_amount(s, "not a decimal number"))?;
        Self::new(value)
    }

    /// Borrow the inner decimal value
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Consume into the inner decimal value
    pub fn into_decimal(self) -> BigDecimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Convert to raw minor units: `amount * 10^decimals`.
    ///
    /// Fails with [`PrecisionLoss`](AmountError::PrecisionLoss) if the amount
    /// carries nonzero fractional digits beyond `decimals`; the conversion
    /// rejects rather than truncating or rounding, so an amount is never
    /// silently altered. Fails with
    /// [`InvalidAmount`](AmountError::InvalidAmount) if the scaled value
    /// exceeds the 256-bit minor-unit range.
    ///
    /// # Examples
    ///
    /// ```
    /// use zkwire::{AmountError, DecimalAmount, TokenDecimals};
    ///
    /// let amount = DecimalAmount::parse("1.5").unwrap();
    /// assert!(amount.to_minor_units(TokenDecimals::STANDARD).is_ok());
    ///
    /// // 1.5 does not fit a zero-decimals token
    /// assert!(matches!(
    ///     amount.to_minor_units(TokenDecimals::new(0)),
    ///     Err(AmountError::PrecisionLoss { .. })
    /// ));
    /// ```
    pub fn to_minor_units(&self, decimals: TokenDecimals) -> Result<TokenAmount, AmountError> {
        let out_of_range =
            || AmountError::invalid_amount(&self.0, "exceeds the 256-bit minor-unit range");

        let (digits, exponent) = self.0.normalized().into_bigint_and_exponent();
        let shift = i64::from(decimals.as_u8()) - exponent;
        if shift < 0 {
            return Err(AmountError::precision_loss(&self.0, decimals.as_u8()));
        }
        // 10^78 > 2^256, so any nonzero value shifted this far cannot fit
        if shift >= 78 {
            return if digits.is_zero() {
                Ok(TokenAmount::ZERO)
            } else {
                Err(out_of_range())
            };
        }
        let (_, bytes) = digits.to_bytes_be();
        let digits = U256::try_from_be_slice(&bytes).ok_or_else(out_of_range)?;
        let scale_factor = U256::from(10u64).pow(U256::from(shift as u64));
        digits
            .checked_mul(scale_factor)
            .map(TokenAmount::new)
            .ok_or_else(out_of_range)
    }

    /// Value in USD given the price of one whole token.
    pub fn to_usd(&self, price_per_token: &TokenPriceUsd) -> BigDecimal {
        &self.0 * price_per_token.as_decimal()
    }
}

impl FromStr for DecimalAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for DecimalAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// USD price of one whole token
///
/// Distinct from [`DecimalAmount`] so a price is never mistaken for a
/// quantity in calculations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPriceUsd(BigDecimal);

impl TokenPriceUsd {
    /// Create a new USD price
    pub fn new(price: BigDecimal) -> Self {
        Self(price)
    }

    /// Borrow the inner decimal value
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl From<BigDecimal> for TokenPriceUsd {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenPriceUsd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}
