//! The injected L1 broadcasting seam.

use core::future::Future;

use alloy_primitives::{Address, Bytes, B256, U256};

use super::MatrixClientError;

/// A fully formed L1 transaction handed to the injected sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1Transaction {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    /// Pre-estimated gas; `None` leaves estimation to the wallet backend.
    pub gas: Option<u64>,
    pub chain_id: u64,
}

/// Strategy for signing and broadcasting the L1 transaction that carries a
/// deposit. The pipelines never sign; whatever wallet backend the caller
/// uses implements this single method and returns the L1 transaction hash.
pub trait L1TransactionSender {
    fn send_transaction(
        &self,
        tx: L1Transaction,
    ) -> impl Future<Output = Result<B256, MatrixClientError>> + Send;
}
