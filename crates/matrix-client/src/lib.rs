//! Client pipelines for the Matrix deposit transaction protocol.
//!
//! This crate owns every network interaction:
//! - [`MatrixClient`]: submission pipeline (estimate → price → re-estimate →
//!   submit → resolve), bridge-and-call, and reverse resolution of Matrix
//!   hashes from L1 transaction hashes
//! - [`NodeProvider`]: the node read surface the pipelines depend on, with
//!   [`RpcClient`] as the JSON-RPC-over-HTTP implementation
//! - [`L1TransactionSender`]: the injected broadcasting seam, so any wallet
//!   or signing backend can carry the final L1 transaction
//!
//! Nothing is retried or cached: each pipeline run re-reads the FCT balance
//! and mint rate, and every failure is surfaced to the caller as the
//! terminal outcome of that run.
//!
//! # Example
//!
//! ```ignore
//! use matrix_client::{MatrixClient, MatrixTransactionParams};
//!
//! let client = MatrixClient::new(56)?;
//! let result = client
//!     .send_raw_transaction(account, MatrixTransactionParams {
//!         to: Some(recipient),
//!         value: U256::ZERO,
//!         data: calldata,
//!         mine_boost: Bytes::new(),
//!     }, &wallet)
//!     .await?;
//! println!("matrix tx: {}", result.matrix_tx_hash);
//! ```

mod bridge;
mod client;
mod error;
mod provider;
mod resolve;
mod rpc;
mod sender;
mod submit;

#[cfg(test)]
mod tests;

pub use bridge::{BridgeAndCallParams, BridgeSubmission, BRIDGE_GAS_LIMIT};
pub use client::{MatrixClient, MatrixClientConfig};
pub use error::MatrixClientError;
pub use provider::NodeProvider;
pub use rpc::{L1TransactionInfo, RpcClient};
pub use sender::{L1Transaction, L1TransactionSender};
pub use submit::{ContractWriteParams, DepositSubmission, MatrixTransactionParams};
