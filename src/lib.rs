//! Typed data primitives for an Ethereum-compatible zk-rollup L2 client.
//!
//! zkwire models the value objects exchanged with the network: tokens and
//! the exact conversion between their minor-unit and decimal amount
//! representations, transfer and withdraw requests, ergs-denominated fee
//! quotes, and the EIP-712 typed-data metadata attached to transactions for
//! off-chain authorization.
//!
//! Everything here is an immutable value object: no I/O, no shared mutable
//! state, every operation synchronous and deterministic. Network transport,
//! RPC dispatch, signing, and ABI encoding belong to the client layer built
//! on top of these types.

mod amount;
mod contract;
mod eip712;
mod errors;
mod fee;
mod request;
mod token;
mod transaction;
pub mod wire;

pub use amount::*;
pub use contract::*;
pub use eip712::*;
pub use errors::*;
pub use fee::*;
pub use request::*;
pub use token::*;
pub use transaction::*;
