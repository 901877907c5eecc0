//! Error types for the client pipelines.

use alloy_primitives::Address;
use thiserror::Error;

use matrix_protocol::CodecError;

/// Errors surfaced by a pipeline run. None of these are retried internally;
/// the caller decides whether to restart the run from validation.
#[derive(Debug, Error)]
pub enum MatrixClientError {
    /// Bad caller input: unknown L1 chain id, missing sender account.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Chain id does not belong to a configured L1↔L2 pair.
    #[error("unsupported network: chain id {0}")]
    UnsupportedNetwork(u64),

    /// Feasibility estimate or trace dry run indicates the L2 call reverts.
    #[error("simulation failed: {0}")]
    SimulationFailed(String),

    /// The re-estimate with the realistic post-mint balance still reverts.
    #[error("insufficient funds after mint: {0}")]
    InsufficientFunds(String),

    /// L1 transaction exists but is not addressed to the Matrix inbox.
    #[error("transaction is not to the Matrix inbox (to = {0})")]
    WrongDestination(Address),

    /// Calldata is not a well-formed mined deposit.
    #[error("deposit codec error: {0}")]
    Codec(#[from] CodecError),

    /// JSON-RPC error returned by the node.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(String),

    /// Malformed JSON in an RPC response.
    #[error("json error: {0}")]
    Json(String),
}

impl From<reqwest::Error> for MatrixClientError {
    fn from(e: reqwest::Error) -> Self {
        MatrixClientError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for MatrixClientError {
    fn from(e: serde_json::Error) -> Self {
        MatrixClientError::Json(e.to_string())
    }
}

impl MatrixClientError {
    /// Reinterpret a node-side estimate rejection as a simulation failure,
    /// leaving transport errors untouched.
    pub(crate) fn into_simulation_failed(self) -> Self {
        match self {
            MatrixClientError::Rpc(msg) => MatrixClientError::SimulationFailed(msg),
            other => other,
        }
    }

    /// Reinterpret a node-side estimate rejection as insufficient funds,
    /// leaving transport errors untouched.
    pub(crate) fn into_insufficient_funds(self) -> Self {
        match self {
            MatrixClientError::Rpc(msg) => MatrixClientError::InsufficientFunds(msg),
            other => other,
        }
    }
}
