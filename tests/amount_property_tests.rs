//! Property-based tests for minor-unit/decimal amount conversion
//!
//! These tests use proptest to validate the conversion invariants across the
//! whole range of decimal counts tokens actually use, rather than a handful
//! of hand-picked values.

use alloy_primitives::U256;
use proptest::prelude::*;
use zkwire::{AmountError, DecimalAmount, Token, TokenAmount, TokenDecimals};

// Helper to generate the decimal counts tokens actually use (0-18)
fn arb_decimals() -> impl Strategy<Value = TokenDecimals> {
    (0u8..=18).prop_map(TokenDecimals::new)
}

proptest! {
    /// Property: decimal rendering followed by minor-unit rendering is the
    /// identity for every non-negative amount and every decimal count
    #[test]
    fn prop_round_trip_is_exact(minor in any::<u128>(), decimals in arb_decimals()) {
        let raw = TokenAmount::new(U256::from(minor));
        let decimal = raw.to_decimal(decimals);
        let back = decimal.to_minor_units(decimals).unwrap();
        prop_assert_eq!(back, raw, "round trip must not lose precision");
    }

    /// Property: zero decimals is the identity transform
    #[test]
    fn prop_zero_decimals_is_identity(minor in any::<u128>()) {
        let raw = TokenAmount::new(U256::from(minor));
        let decimal = raw.to_decimal(TokenDecimals::new(0));
        prop_assert_eq!(decimal.to_string(), minor.to_string());
    }

    /// Property: an amount with one more fractional digit than the token
    /// supports is always rejected, never rounded
    #[test]
    fn prop_excess_fraction_is_rejected(
        whole in 0u64..1_000_000,
        last_digit in 1u8..=9,
        decimals in arb_decimals(),
    ) {
        // `decimals` zeros then a nonzero digit: exactly one digit too many
        let amount = DecimalAmount::parse(&format!(
            "{whole}.{}{last_digit}",
            "0".repeat(decimals.as_u8() as usize),
        ))
        .unwrap();
        let matched = matches!(
            amount.to_minor_units(decimals),
            Err(AmountError::PrecisionLoss { .. })
        );
        prop_assert!(matched);
    }

    /// Property: negative inputs never reach a conversion
    #[test]
    fn prop_negative_inputs_are_invalid(value in 1u64..u64::MAX) {
        let matched_token = matches!(
            TokenAmount::parse(&format!("-{value}")),
            Err(AmountError::InvalidAmount { .. })
        );
        prop_assert!(matched_token);
        let matched_decimal = matches!(
            DecimalAmount::parse(&format!("-{value}")),
            Err(AmountError::InvalidAmount { .. })
        );
        prop_assert!(matched_decimal);
    }

    /// Property: conversion through a token matches conversion through its
    /// decimal count
    #[test]
    fn prop_token_conversion_delegates(minor in any::<u64>(), decimals in arb_decimals()) {
        let token = Token::new(
            zkwire::ETH_TOKEN_ADDRESS,
            "TEST",
            decimals,
        );
        let raw = TokenAmount::from(minor);
        let via_token = token.to_decimal(raw);
        let via_decimals = raw.to_decimal(decimals);
        prop_assert_eq!(&via_token, &via_decimals);
        prop_assert_eq!(token.to_minor_units(&via_token).unwrap(), raw);
    }
}
