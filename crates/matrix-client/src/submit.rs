//! The deposit submission pipeline.
//!
//! Validate → estimate L2 gas (unlimited-balance override) → price (balance,
//! mint rate, payload bytes) → re-estimate with the realistic post-mint
//! balance → submit to the L1 inbox → derive the Matrix hash. Every
//! collaborator failure before the L1 broadcast aborts the run whole; after
//! the broadcast only pure hash derivation remains.

use alloy_primitives::{Address, Bytes, B256, U256};
use tracing::{debug, info};

use matrix_protocol::{
    compute_matrix_transaction_hash, quote_submission_mint, SubmissionPayload,
};

use super::{L1Transaction, L1TransactionSender, MatrixClient, MatrixClientError, NodeProvider};

/// Caller-facing deposit parameters. Everything defaults to empty/zero;
/// the gas limit is never caller-supplied here; it always comes from the
/// L2 estimate.
#[derive(Debug, Clone, Default)]
pub struct MatrixTransactionParams {
    /// L2 recipient; `None` for a contract-creation-like deposit.
    pub to: Option<Address>,
    /// Native value to credit on L2.
    pub value: U256,
    /// L2 calldata.
    pub data: Bytes,
    /// Optional extra bytes that raise the FCT mint amount.
    pub mine_boost: Bytes,
}

/// Parameters for a contract write routed through the deposit pipeline.
/// The calldata is pre-encoded by the caller; ABI encoding is out of scope.
#[derive(Debug, Clone)]
pub struct ContractWriteParams {
    pub address: Address,
    pub calldata: Bytes,
    /// Appended verbatim to the calldata (e.g. a router tag).
    pub data_suffix: Option<Bytes>,
    pub value: U256,
    pub mine_boost: Bytes,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositSubmission {
    pub l1_tx_hash: B256,
    pub matrix_tx_hash: B256,
    pub mint_amount: U256,
    pub mint_rate: u128,
}

impl<P: NodeProvider> MatrixClient<P> {
    /// Submit a deposit transaction end to end.
    pub async fn send_raw_transaction<S: L1TransactionSender>(
        &self,
        account: Address,
        params: MatrixTransactionParams,
        sender: &S,
    ) -> Result<DepositSubmission, MatrixClientError> {
        if account == Address::ZERO {
            return Err(MatrixClientError::InvalidInput("no sender account".into()));
        }

        let contracts = &self.pair.contracts;

        // Three independent reads. The gas estimate runs as if the sender
        // already held unlimited balance; a failure here means the call
        // itself reverts and is fatal.
        let (gas_limit, fct_balance, mint_rate) = tokio::try_join!(
            async {
                self.l2
                    .estimate_gas(
                        account,
                        params.to,
                        params.value,
                        &params.data,
                        Some((account, U256::MAX)),
                    )
                    .await
                    .map_err(MatrixClientError::into_simulation_failed)
            },
            self.l2.get_balance(account),
            self.l2.fct_mint_rate(contracts.mint_rate_oracle),
        )?;

        debug!(
            target: "matrix::submit",
            gas_limit,
            balance = %fct_balance,
            rate = mint_rate,
            "estimated L2 gas and priced deposit"
        );

        let payload = SubmissionPayload {
            l2_chain_id: self.pair.l2_chain_id,
            to: params.to,
            value: params.value,
            gas_limit,
            data: params.data.clone(),
            mine_boost: params.mine_boost,
        };
        let encoded = payload.to_bytes();
        let quote = quote_submission_mint(&encoded, mint_rate);

        // Re-estimate against the balance the account will actually hold
        // after the mint. This is where an under-funded deposit must fail,
        // before any L1 transaction exists.
        self.l2
            .estimate_gas(
                account,
                params.to,
                params.value,
                &params.data,
                Some((account, fct_balance + quote.amount)),
            )
            .await
            .map_err(MatrixClientError::into_insufficient_funds)?;

        let l1_gas = self
            .l1
            .estimate_gas(account, Some(contracts.inbox), U256::ZERO, &encoded, None)
            .await?;

        let l1_tx_hash = sender
            .send_transaction(L1Transaction {
                from: account,
                to: contracts.inbox,
                value: U256::ZERO,
                data: encoded,
                gas: Some(l1_gas),
                chain_id: self.pair.l1_chain_id,
            })
            .await?;

        let matrix_tx_hash = compute_matrix_transaction_hash(
            l1_tx_hash,
            account,
            params.to,
            params.value,
            &params.data,
            U256::from(gas_limit),
            Some(quote.amount),
        );

        info!(
            target: "matrix::submit",
            %l1_tx_hash,
            %matrix_tx_hash,
            mint = %quote.amount,
            "deposit submitted"
        );

        Ok(DepositSubmission {
            l1_tx_hash,
            matrix_tx_hash,
            mint_amount: quote.amount,
            mint_rate,
        })
    }

    /// Submit a contract write through the deposit pipeline. Thin wrapper:
    /// appends the optional data suffix and shares the whole submission
    /// core.
    pub async fn send_contract_write<S: L1TransactionSender>(
        &self,
        account: Address,
        params: ContractWriteParams,
        sender: &S,
    ) -> Result<DepositSubmission, MatrixClientError> {
        let data = match params.data_suffix {
            Some(suffix) => {
                let mut data = params.calldata.to_vec();
                data.extend_from_slice(&suffix);
                Bytes::from(data)
            }
            None => params.calldata,
        };

        self.send_raw_transaction(
            account,
            MatrixTransactionParams {
                to: Some(params.address),
                value: params.value,
                data,
                mine_boost: params.mine_boost,
            },
            sender,
        )
        .await
    }
}
