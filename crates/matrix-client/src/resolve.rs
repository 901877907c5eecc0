//! Reverse resolution: recover the Matrix transaction hash from an L1
//! transaction hash. Verifier/indexer path; it never broadcasts.

use alloy_primitives::{Address, B256};

use matrix_protocol::{compute_matrix_transaction_hash, MinedDeposit};

use super::{L1TransactionInfo, MatrixClient, MatrixClientError, NodeProvider};

impl<P: NodeProvider> MatrixClient<P> {
    /// Fetch the named L1 transaction, check it targets the Matrix inbox,
    /// decode its calldata, and recompute the canonical Matrix hash.
    pub async fn matrix_tx_hash_from_l1_hash(
        &self,
        l1_tx_hash: B256,
    ) -> Result<B256, MatrixClientError> {
        let tx = self.l1.get_transaction(l1_tx_hash).await?;
        derive_matrix_hash(&tx, l1_tx_hash, self.pair.contracts.inbox)
    }
}

/// Pure core of reverse resolution, split out from the fetch.
pub(crate) fn derive_matrix_hash(
    tx: &L1TransactionInfo,
    l1_tx_hash: B256,
    inbox: Address,
) -> Result<B256, MatrixClientError> {
    if let Some(to) = tx.to {
        if to != inbox {
            return Err(MatrixClientError::WrongDestination(to));
        }
    }

    let mined = MinedDeposit::decode(&tx.input)?;

    Ok(compute_matrix_transaction_hash(
        l1_tx_hash,
        tx.from,
        mined.to,
        mined.value,
        &mined.data,
        mined.gas_limit,
        Some(mined.mint_amount),
    ))
}
