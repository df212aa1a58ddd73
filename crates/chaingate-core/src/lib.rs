//! chaingate-core — foundation types and traits for the ChainGate adapter.
//!
//! ChainGate exposes a blockchain node behind a standardized account-and-
//! transaction query protocol (the "exchange API"). The core crate defines:
//!
//! - [`types`] — the canonical protocol request/response shapes
//! - [`ErrorCatalog`] / [`GatewayError`] — the sealed error vocabulary and
//!   the internal failure taxonomy it translates
//! - [`ChainClient`] — the node-facing trait every chain integration
//!   implements
//! - [`codec`] — hex decoding and the bit-exact transaction content hash

pub mod client;
pub mod codec;
pub mod errors;
pub mod types;

pub use client::{BlockSummary, BlockTransactions, ChainClient, ParsedTransaction, SubmitReceipt};
pub use errors::{
    codes, register_builtin, ErrorCatalog, ErrorDefinition, GatewayError, GatewayResult,
};
pub use types::{NetworkIdentifier, ProtocolError};
