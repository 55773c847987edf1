//! Integration tests for the wire contract
//!
//! These tests validate the bit-exact JSON shapes exchanged with the node:
//! exact field names, minimal lowercase hex quantities, fixed-width
//! addresses and hashes, and rejection of unknown fields.

use alloy_primitives::{address, Bytes, B256, U256};
use zkwire::{
    Eip712Domain, Eip712Meta, Fee, Token, TokenDescription, Transaction, TransactionInfo,
    WireError, ETH_TOKEN_ADDRESS,
};

fn sample_transaction() -> Transaction {
    Transaction {
        from: address!("d8da6bf26964af9d7eed9e03e53415d37aa96045"),
        to: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
        gas: U256::from(21_000u64),
        gas_price: U256::from(250_000_000u64),
        value: U256::from(1_500_000_000_000_000_000u64),
        data: Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb]),
        transaction_type: 0x71,
        eip712_meta: Eip712Meta::new(ETH_TOKEN_ADDRESS, U256::from(1_000u64), U256::from(16u64)),
    }
}

#[test]
fn transaction_wire_shape_is_bit_exact() {
    let json = serde_json::to_value(sample_transaction()).unwrap();
    let expected = serde_json::json!({
        "from": "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
        "to": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
        "gas": "0x5208",
        "gasPrice": "0xee6b280",
        "value": "0x14d1120d7b160000",
        "data": "0xa9059cbb",
        "transactionType": "0x71",
        "eip712Meta": {
            "feeToken": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
            "ergsPerStorage": "0x3e8",
            "ergsPerPubdata": "0x10"
        }
    });
    assert_eq!(json, expected);
}

#[test]
fn transaction_round_trips_through_json() {
    let tx = sample_transaction();
    let encoded = serde_json::to_string(&tx).unwrap();
    let decoded: Transaction = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, tx);
}

#[test]
fn transaction_rejects_unknown_fields() {
    let mut json = serde_json::to_value(sample_transaction()).unwrap();
    json.as_object_mut()
        .unwrap()
        .insert("maxFeePerGas".to_string(), "0x0".into());
    assert!(serde_json::from_value::<Transaction>(json).is_err());
}

#[test]
fn transaction_rejects_malformed_quantities() {
    let mut json = serde_json::to_value(sample_transaction()).unwrap();
    json.as_object_mut()
        .unwrap()
        .insert("gas".to_string(), "5208".into());
    assert!(serde_json::from_value::<Transaction>(json).is_err());
}

#[test]
fn transaction_info_decodes_a_node_response() {
    let json = r#"{
        "blockHash": "0x51f81bcdfc324a0dff2b5bec9d92e21cbebc4d5e29d3a3d30de3e03fbeab8d7f",
        "blockNumber": "0x5daf3b",
        "from": "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d",
        "gas": "0xc350",
        "gasPrice": "0x4a817c800",
        "hash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
        "input": "0x68656c6c6f21",
        "nonce": "0x15",
        "to": "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb",
        "transactionIndex": "0x41",
        "value": "0xf3dbb76162000"
    }"#;
    let info: TransactionInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.block_number, 6_139_707);
    assert_eq!(info.nonce.as_u64(), 21);
    assert_eq!(info.transaction_index, 65);
    assert_eq!(info.gas, U256::from(50_000u64));
    assert_eq!(info.value, U256::from(4_290_000_000_000_000u64));
    assert_eq!(info.input, Bytes::from(b"hello!".to_vec()));
    assert_eq!(
        info.hash.as_b256(),
        "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"
            .parse::<B256>()
            .unwrap()
    );
}

#[test]
fn fee_and_meta_round_trip_exactly() {
    let fee = Fee {
        fee_token: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
        ergs_limit: U256::from(4_000_000u64),
        ergs_price_limit: U256::MAX,
        ergs_per_storage_limit: U256::from(2u64).pow(U256::from(200u64)),
        ergs_per_pubdata_limit: U256::ZERO,
    };
    let meta = fee.to_eip712_meta();
    assert_eq!(meta.parse_fee_token().unwrap(), fee.fee_token);
    assert_eq!(
        meta.parse_ergs_per_storage().unwrap(),
        fee.ergs_per_storage_limit
    );
    assert_eq!(
        meta.parse_ergs_per_pubdata().unwrap(),
        fee.ergs_per_pubdata_limit
    );
    assert_eq!(meta.ergs_per_pubdata, "0x0");
}

#[test]
fn eip712_domain_wire_shape() {
    let domain = Eip712Domain::new(
        "zkSync",
        "2",
        280,
        address!("11f943b2c77b743ab90f4a0ae7d5a4e7fca3e102"),
    );
    let json = serde_json::to_value(&domain).unwrap();
    let expected = serde_json::json!({
        "name": "zkSync",
        "version": "2",
        "chainId": 280,
        "verifyingContract": "0x11f943b2c77b743ab90f4a0ae7d5a4e7fca3e102"
    });
    assert_eq!(json, expected);
}

#[test]
fn token_description_decodes_a_registry_entry() {
    let json = r#"{
        "name": "USD Coin",
        "symbol": "USDC",
        "decimals": 6,
        "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
    }"#;
    let description: TokenDescription = serde_json::from_str(json).unwrap();
    let token: Token = description.into();
    assert_eq!(token.symbol, "USDC");
    assert_eq!(token.decimals.as_u8(), 6);
}

#[test]
fn malformed_hex_reports_the_offending_input() {
    let meta = Eip712Meta {
        fee_token: "0xeeee".to_string(),
        ergs_per_storage: "0x0".to_string(),
        ergs_per_pubdata: "0x0".to_string(),
    };
    let err = meta.parse_fee_token().unwrap_err();
    let WireError::MalformedHex { input, .. } = err;
    assert_eq!(input, "0xeeee");
}

#[test]
fn quantity_encoding_is_minimal_lowercase() {
    assert_eq!(zkwire::wire::encode_quantity(U256::ZERO), "0x0");
    assert_eq!(
        zkwire::wire::encode_quantity(U256::from(0xDEADBEEFu64)),
        "0xdeadbeef"
    );
    assert_eq!(
        zkwire::wire::parse_quantity("0xdeadbeef").unwrap(),
        U256::from(0xDEADBEEFu64)
    );
}
