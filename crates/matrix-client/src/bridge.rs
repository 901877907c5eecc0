//! The bridge-and-call pipeline.
//!
//! Moves native value from L1 to L2 and invokes a contract there with that
//! value in one coordinated flow. The L2-side call is issued by the ether
//! bridge's aliased address against the wrapped native token contract, with
//! the target calldata run-length compressed to cut its mint cost. Before
//! any L1 value is spent, the call is dry-run via `debug_traceCall` with the
//! aliased bridge funded by a state override; a revert in the trace aborts
//! the whole run.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use tracing::{debug, info};

use matrix_protocol::{
    apply_l1_to_l2_alias, cd_compress, compute_matrix_transaction_hash, quote_bridge_mint,
    SubmissionPayload,
};

use super::{L1Transaction, L1TransactionSender, MatrixClient, MatrixClientError, NodeProvider};

/// Fixed L2 gas budget for bridge-and-call deposits. Deliberately
/// over-provisioned instead of estimated.
pub const BRIDGE_GAS_LIMIT: u64 = 50_000_000;

mod l2_abi {
    alloy_sol_types::sol! {
        /// Entry on the wrapped native token contract, credited by the
        /// aliased bridge.
        function bridgeAndCall(address account, uint256 value, address target, bytes data);
    }
}

mod l1_abi {
    alloy_sol_types::sol! {
        /// Entry on the L1 ether bridge, carrying the bridged value.
        function bridgeAndCall(address account, address target, bytes data, uint256 gasLimit);
    }
}

/// Caller-facing bridge parameters. `calldata` is the pre-encoded call to
/// execute on `target` with the bridged `value`.
#[derive(Debug, Clone)]
pub struct BridgeAndCallParams {
    pub target: Address,
    pub calldata: Bytes,
    /// Native value bridged from L1 and forwarded to the call.
    pub value: U256,
}

/// Outcome of a successful bridge-and-call submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeSubmission {
    pub l1_tx_hash: B256,
    pub matrix_tx_hash: B256,
    pub mint_amount: U256,
    pub mint_rate: u128,
}

impl<P: NodeProvider> MatrixClient<P> {
    /// Bridge native value to L2 and call a contract with it.
    pub async fn bridge_and_call<S: L1TransactionSender>(
        &self,
        account: Address,
        params: BridgeAndCallParams,
        sender: &S,
    ) -> Result<BridgeSubmission, MatrixClientError> {
        if account == Address::ZERO {
            return Err(MatrixClientError::InvalidInput("no sender account".into()));
        }

        let contracts = &self.pair.contracts;
        let mint_rate = self.l2.fct_mint_rate(contracts.mint_rate_oracle).await?;

        let zipped = cd_compress(&params.calldata);
        let l2_call = encode_l2_bridge_call(account, params.value, params.target, &zipped);
        let aliased_bridge = apply_l1_to_l2_alias(contracts.ether_bridge);

        debug!(
            target: "matrix::bridge",
            target_contract = %params.target,
            compressed = zipped.len(),
            uncompressed = params.calldata.len(),
            rate = mint_rate,
            "prepared bridge-and-call"
        );

        // Dry run against the L2 node with the aliased bridge funded. A
        // revert anywhere in the trace aborts before the L1 spend.
        let reverted = self
            .l2
            .trace_call_reverts(
                aliased_bridge,
                contracts.wrapped_native,
                &l2_call,
                BRIDGE_GAS_LIMIT,
                (aliased_bridge, U256::MAX),
            )
            .await?;
        if reverted {
            return Err(MatrixClientError::SimulationFailed(
                "bridge-and-call dry run reverted on L2".into(),
            ));
        }

        let payload = SubmissionPayload {
            l2_chain_id: self.pair.l2_chain_id,
            to: Some(contracts.wrapped_native),
            value: U256::ZERO,
            gas_limit: BRIDGE_GAS_LIMIT,
            data: Bytes::from(l2_call.clone()),
            mine_boost: Bytes::new(),
        };
        let quote = quote_bridge_mint(&payload.to_bytes(), mint_rate);

        let l1_data = encode_l1_bridge_call(account, params.target, &zipped, BRIDGE_GAS_LIMIT);
        let l1_tx_hash = sender
            .send_transaction(L1Transaction {
                from: account,
                to: contracts.ether_bridge,
                value: params.value,
                data: Bytes::from(l1_data),
                // The wallet backend estimates gas for the bridge call.
                gas: None,
                chain_id: self.pair.l1_chain_id,
            })
            .await?;

        let matrix_tx_hash = compute_matrix_transaction_hash(
            l1_tx_hash,
            aliased_bridge,
            Some(contracts.wrapped_native),
            U256::ZERO,
            &l2_call,
            U256::from(BRIDGE_GAS_LIMIT),
            Some(quote.amount),
        );

        info!(
            target: "matrix::bridge",
            %l1_tx_hash,
            %matrix_tx_hash,
            mint = %quote.amount,
            "bridge-and-call submitted"
        );

        Ok(BridgeSubmission {
            l1_tx_hash,
            matrix_tx_hash,
            mint_amount: quote.amount,
            mint_rate,
        })
    }
}

/// ABI-encode the L2-side `bridgeAndCall` executed on the wrapped native
/// token contract.
pub(crate) fn encode_l2_bridge_call(
    account: Address,
    value: U256,
    target: Address,
    zipped_data: &[u8],
) -> Vec<u8> {
    l2_abi::bridgeAndCallCall {
        account,
        value,
        target,
        data: Bytes::copy_from_slice(zipped_data),
    }
    .abi_encode()
}

/// ABI-encode the L1-side `bridgeAndCall` on the ether bridge.
pub(crate) fn encode_l1_bridge_call(
    account: Address,
    target: Address,
    zipped_data: &[u8],
    gas_limit: u64,
) -> Vec<u8> {
    l1_abi::bridgeAndCallCall {
        account,
        target,
        data: Bytes::copy_from_slice(zipped_data),
        gasLimit: U256::from(gas_limit),
    }
    .abi_encode()
}
