//! The node read surface the pipelines depend on.

use core::future::Future;

use alloy_primitives::{Address, B256, U256};

use super::{L1TransactionInfo, MatrixClientError};

/// Read-only JSON-RPC surface of one node. [`crate::RpcClient`] is the wire
/// implementation; the pipelines only see this trait, so the orchestration
/// can be driven against a stub node in tests.
pub trait NodeProvider: Send + Sync {
    /// `eth_estimateGas`, optionally with a balance state override for the
    /// sender. Fails if the call would revert.
    fn estimate_gas(
        &self,
        from: Address,
        to: Option<Address>,
        value: U256,
        data: &[u8],
        balance_override: Option<(Address, U256)>,
    ) -> impl Future<Output = Result<u64, MatrixClientError>> + Send;

    /// Native balance at the latest block.
    fn get_balance(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<U256, MatrixClientError>> + Send;

    /// Live FCT mint rate from the L1Block oracle.
    fn fct_mint_rate(
        &self,
        oracle: Address,
    ) -> impl Future<Output = Result<u128, MatrixClientError>> + Send;

    /// `debug_traceCall` dry run; whether the trace contains a `REVERT`.
    fn trace_call_reverts(
        &self,
        from: Address,
        to: Address,
        data: &[u8],
        gas: u64,
        balance_override: (Address, U256),
    ) -> impl Future<Output = Result<bool, MatrixClientError>> + Send;

    /// Fetch a transaction by hash; errors if the node does not know it.
    fn get_transaction(
        &self,
        hash: B256,
    ) -> impl Future<Output = Result<L1TransactionInfo, MatrixClientError>> + Send;
}
