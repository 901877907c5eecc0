//! Tests for the client crate.

use std::sync::Mutex;

use alloy_primitives::{b256, hex, Address, Bytes, B256, U256};
use serde_json::json;

use matrix_protocol::{
    apply_l1_to_l2_alias, cd_compress, compute_matrix_transaction_hash, input_gas_cost,
    quote_bridge_mint, ChainPair, MinedDeposit, SubmissionPayload,
};

use super::{
    bridge::{encode_l1_bridge_call, encode_l2_bridge_call},
    resolve::derive_matrix_hash,
    rpc::{
        balance_override_object, call_object, parse_quantity_u256, parse_quantity_u64,
        trace_has_revert, transaction_from_json, L1TransactionInfo,
    },
    BridgeAndCallParams, L1Transaction, L1TransactionSender, MatrixClient, MatrixClientError,
    MatrixTransactionParams, NodeProvider, BRIDGE_GAS_LIMIT,
};

// =============================================================================
// RPC helper tests
// =============================================================================

#[test]
fn test_trace_revert_detection() {
    let reverting = json!({
        "structLogs": [
            { "op": "PUSH1", "depth": 1 },
            { "op": "CALL", "depth": 1 },
            { "op": "REVERT", "depth": 2 },
        ]
    });
    assert!(trace_has_revert(&reverting));

    let clean = json!({
        "structLogs": [
            { "op": "PUSH1", "depth": 1 },
            { "op": "RETURN", "depth": 1 },
        ]
    });
    assert!(!trace_has_revert(&clean));

    // Missing or malformed structLogs counts as no revert observed.
    assert!(!trace_has_revert(&json!({})));
    assert!(!trace_has_revert(&json!({ "structLogs": "oops" })));
}

#[test]
fn test_quantity_parsing() {
    assert_eq!(parse_quantity_u64(&json!("0x5208")).unwrap(), 21000);
    assert_eq!(parse_quantity_u64(&json!("0x0")).unwrap(), 0);
    assert_eq!(
        parse_quantity_u256(&json!("0xde0b6b3a7640000")).unwrap(),
        U256::from(10).pow(U256::from(18))
    );
    assert!(parse_quantity_u64(&json!(21000)).is_err());
    assert!(parse_quantity_u64(&json!("0xzz")).is_err());
}

#[test]
fn test_call_object_shape() {
    let call = call_object(
        Address::repeat_byte(0x11),
        Some(Address::repeat_byte(0x22)),
        U256::from(5),
        &[0xde, 0xad],
    );
    assert_eq!(call["from"], "0x1111111111111111111111111111111111111111");
    assert_eq!(call["to"], "0x2222222222222222222222222222222222222222");
    assert_eq!(call["value"], "0x5");
    assert_eq!(call["data"], "0xdead");

    // No recipient: the `to` key is absent, not null.
    let creation = call_object(Address::repeat_byte(0x11), None, U256::ZERO, &[]);
    assert!(creation.get("to").is_none());
}

#[test]
fn test_balance_override_shape() {
    let override_obj = balance_override_object(Address::repeat_byte(0xaa), U256::MAX);
    let entry = &override_obj["0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"];
    assert_eq!(
        entry["balance"],
        "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    );
}

#[test]
fn test_transaction_from_json() {
    let tx = transaction_from_json(&json!({
        "from": "0x1111111111111111111111111111111111111111",
        "to": "0x0000000000000000000000000000000000bbbb01",
        "input": "0xdeadbeef",
    }))
    .unwrap();
    assert_eq!(tx.from, Address::repeat_byte(0x11));
    assert_eq!(
        tx.to.unwrap(),
        "0x0000000000000000000000000000000000bbbb01".parse::<Address>().unwrap()
    );
    assert_eq!(tx.input.as_ref(), &[0xde, 0xad, 0xbe, 0xef]);

    // Contract creation: to is null.
    let creation = transaction_from_json(&json!({
        "from": "0x1111111111111111111111111111111111111111",
        "to": null,
        "input": "0x",
    }))
    .unwrap();
    assert_eq!(creation.to, None);
    assert!(creation.input.is_empty());

    assert!(transaction_from_json(&json!({ "to": null, "input": "0x" })).is_err());
}

// =============================================================================
// Client construction tests
// =============================================================================

#[test]
fn test_strict_l1_chain_validation() {
    assert!(MatrixClient::new(56).is_ok());
    assert!(MatrixClient::new(97).is_ok());

    // L2 ids and strangers are invalid input on the strict constructor.
    for id in [1, 55, 0xbbbb1, 0xbbbb2] {
        assert!(matches!(
            MatrixClient::new(id),
            Err(MatrixClientError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_either_side_construction_for_bridge() {
    let from_l2 = MatrixClient::for_chain(0xbbbb2).unwrap();
    assert_eq!(from_l2.chain_pair().l1_chain_id, 97);

    assert!(matches!(
        MatrixClient::for_chain(1),
        Err(MatrixClientError::UnsupportedNetwork(1))
    ));
}

// =============================================================================
// Reverse resolution tests
// =============================================================================

fn inbox() -> Address {
    MatrixClient::new(56).unwrap().chain_pair().contracts.inbox
}

#[test]
fn test_derive_matrix_hash_from_mined_calldata() {
    let tx = L1TransactionInfo {
        from: Address::repeat_byte(0x11),
        to: Some(inbox()),
        input: Bytes::from_static(&hex!(
            "46e7830bbbb19422222222222222222222222222222222222222220582520884deadbeef84075bcd15"
        )),
    };

    let hash = derive_matrix_hash(&tx, B256::repeat_byte(0xbb), inbox()).unwrap();
    assert_eq!(
        hash,
        b256!("326d7e1355d78a2150c97c765ca61f6419cca19f3bad1683bf0fb3925965faf0")
    );
}

#[test]
fn test_derive_rejects_wrong_destination() {
    let elsewhere = Address::repeat_byte(0x99);
    let tx = L1TransactionInfo {
        from: Address::repeat_byte(0x11),
        to: Some(elsewhere),
        input: Bytes::from_static(&hex!("46c6808080808080")),
    };

    assert!(matches!(
        derive_matrix_hash(&tx, B256::ZERO, inbox()),
        Err(MatrixClientError::WrongDestination(to)) if to == elsewhere
    ));
}

#[test]
fn test_derive_propagates_codec_errors() {
    let tx = L1TransactionInfo {
        from: Address::repeat_byte(0x11),
        to: Some(inbox()),
        input: Bytes::from_static(&[0x46]),
    };

    assert!(matches!(
        derive_matrix_hash(&tx, B256::ZERO, inbox()),
        Err(MatrixClientError::Codec(_))
    ));
}

// =============================================================================
// Bridge ABI encoding tests
// =============================================================================

#[test]
fn test_l2_bridge_call_selector_and_layout() {
    let encoded = encode_l2_bridge_call(
        Address::repeat_byte(0x11),
        U256::from(7),
        Address::repeat_byte(0x22),
        &[0xab, 0xcd],
    );

    // bridgeAndCall(address,uint256,address,bytes)
    assert_eq!(&encoded[..4], hex!("3e57ad95"));
    // head: account word, value word, target word, bytes offset
    assert_eq!(encoded[4 + 12..4 + 32], Address::repeat_byte(0x11)[..]);
    assert_eq!(U256::from_be_slice(&encoded[36..68]), U256::from(7));
    assert_eq!(encoded[68 + 12..68 + 32], Address::repeat_byte(0x22)[..]);
}

#[test]
fn test_l1_bridge_call_selector() {
    let encoded = encode_l1_bridge_call(
        Address::repeat_byte(0x11),
        Address::repeat_byte(0x22),
        &[0xab],
        50_000_000,
    );

    // bridgeAndCall(address,address,bytes,uint256)
    assert_eq!(&encoded[..4], hex!("e9a2d914"));
}

#[test]
fn test_mint_rate_call_selector() {
    use alloy_sol_types::SolCall;
    assert_eq!(super::rpc::fctMintRateCall::SELECTOR, hex!("14ea9f1f"));
}

// =============================================================================
// Sender seam tests
// =============================================================================

/// Captures the transaction it is asked to broadcast.
struct MockSender {
    sent: Mutex<Option<L1Transaction>>,
    hash: B256,
}

impl L1TransactionSender for MockSender {
    async fn send_transaction(&self, tx: L1Transaction) -> Result<B256, MatrixClientError> {
        *self.sent.lock().unwrap() = Some(tx);
        Ok(self.hash)
    }
}

#[tokio::test]
async fn test_mock_sender_captures_transaction() {
    let sender = MockSender { sent: Mutex::new(None), hash: B256::repeat_byte(0xcc) };

    let tx = L1Transaction {
        from: Address::repeat_byte(0x11),
        to: inbox(),
        value: U256::ZERO,
        data: Bytes::from_static(&[0x46, 0xc6]),
        gas: Some(60_000),
        chain_id: 56,
    };

    let hash = sender.send_transaction(tx.clone()).await.unwrap();
    assert_eq!(hash, B256::repeat_byte(0xcc));

    let sent = sender.sent.lock().unwrap().clone().unwrap();
    assert_eq!(sent, tx);
    assert_eq!(sent.to, inbox());
    assert_eq!(sent.value, U256::ZERO);
}

// =============================================================================
// Pipeline tests (stubbed node)
// =============================================================================

/// Canned node: fixed estimate, balance, rate, trace verdict. Records the
/// balance overrides of every estimate and the shape of every trace call.
#[derive(Default)]
struct MockNode {
    gas_estimate: u64,
    balance: U256,
    mint_rate: u128,
    fail_all_estimates: bool,
    fail_realistic_estimate: bool,
    trace_reverts: bool,
    transaction: Option<L1TransactionInfo>,
    estimate_overrides: Mutex<Vec<Option<(Address, U256)>>>,
    trace_calls: Mutex<Vec<(Address, Address, u64)>>,
}

impl NodeProvider for MockNode {
    async fn estimate_gas(
        &self,
        _from: Address,
        _to: Option<Address>,
        _value: U256,
        _data: &[u8],
        balance_override: Option<(Address, U256)>,
    ) -> Result<u64, MatrixClientError> {
        self.estimate_overrides.lock().unwrap().push(balance_override);
        if self.fail_all_estimates {
            return Err(MatrixClientError::Rpc("execution reverted".into()));
        }
        if self.fail_realistic_estimate
            && balance_override.is_some_and(|(_, balance)| balance != U256::MAX)
        {
            return Err(MatrixClientError::Rpc("insufficient balance for transfer".into()));
        }
        Ok(self.gas_estimate)
    }

    async fn get_balance(&self, _address: Address) -> Result<U256, MatrixClientError> {
        Ok(self.balance)
    }

    async fn fct_mint_rate(&self, _oracle: Address) -> Result<u128, MatrixClientError> {
        Ok(self.mint_rate)
    }

    async fn trace_call_reverts(
        &self,
        from: Address,
        to: Address,
        _data: &[u8],
        gas: u64,
        _balance_override: (Address, U256),
    ) -> Result<bool, MatrixClientError> {
        self.trace_calls.lock().unwrap().push((from, to, gas));
        Ok(self.trace_reverts)
    }

    async fn get_transaction(&self, hash: B256) -> Result<L1TransactionInfo, MatrixClientError> {
        self.transaction
            .clone()
            .ok_or_else(|| MatrixClientError::Rpc(format!("transaction {hash} not found")))
    }
}

fn mock_client(l1: MockNode, l2: MockNode) -> MatrixClient<MockNode> {
    MatrixClient { pair: ChainPair::mainnet(), l1, l2 }
}

fn fresh_sender() -> MockSender {
    MockSender { sent: Mutex::new(None), hash: B256::repeat_byte(0xcc) }
}

#[tokio::test]
async fn test_submission_gas_limit_comes_from_first_estimate() {
    let account = Address::repeat_byte(0x11);
    let recipient = Address::repeat_byte(0x22);
    let l2 = MockNode {
        gas_estimate: 777_000,
        balance: U256::from(5),
        mint_rate: 3,
        ..Default::default()
    };
    let l1 = MockNode { gas_estimate: 60_000, ..Default::default() };
    let client = mock_client(l1, l2);
    let sender = fresh_sender();

    let result = client
        .send_raw_transaction(
            account,
            MatrixTransactionParams {
                to: Some(recipient),
                value: U256::from(9),
                data: Bytes::from_static(&[0xde, 0xad]),
                mine_boost: Bytes::new(),
            },
            &sender,
        )
        .await
        .unwrap();

    let sent = sender.sent.lock().unwrap().clone().unwrap();
    assert_eq!(sent.from, account);
    assert_eq!(sent.to, client.chain_pair().contracts.inbox);
    assert_eq!(sent.value, U256::ZERO);
    assert_eq!(sent.gas, Some(60_000));
    assert_eq!(sent.chain_id, 56);

    // The broadcast payload carries the first L2 estimate as its gas limit.
    let mined = MinedDeposit::decode(&sent.data).unwrap();
    assert_eq!(mined.gas_limit, U256::from(777_000u64));
    assert_eq!(mined.to, Some(recipient));
    assert_eq!(mined.value, U256::from(9));

    // Mint amount recomputed from the exact broadcast bytes at rate 3.
    let expected_mint = input_gas_cost(&sent.data) * U256::from(3u64);
    assert_eq!(result.mint_amount, expected_mint);
    assert_eq!(result.mint_rate, 3);
    assert_eq!(result.l1_tx_hash, B256::repeat_byte(0xcc));

    // The canonical hash binds that same gas limit and the L1 hash.
    let expected_hash = compute_matrix_transaction_hash(
        B256::repeat_byte(0xcc),
        account,
        Some(recipient),
        U256::from(9),
        &[0xde, 0xad],
        U256::from(777_000u64),
        Some(expected_mint),
    );
    assert_eq!(result.matrix_tx_hash, expected_hash);

    // First estimate runs with unlimited balance, the re-estimate with the
    // post-mint balance.
    let overrides = client.l2.estimate_overrides.lock().unwrap();
    assert_eq!(overrides[0], Some((account, U256::MAX)));
    assert_eq!(overrides[1], Some((account, U256::from(5) + expected_mint)));
}

#[tokio::test]
async fn test_submission_rejects_zero_account_before_any_read() {
    let client = mock_client(MockNode::default(), MockNode::default());
    let sender = fresh_sender();

    let err = client
        .send_raw_transaction(Address::ZERO, MatrixTransactionParams::default(), &sender)
        .await
        .unwrap_err();

    assert!(matches!(err, MatrixClientError::InvalidInput(_)));
    assert!(client.l2.estimate_overrides.lock().unwrap().is_empty());
    assert!(sender.sent.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_submission_maps_first_estimate_rejection_to_simulation_failed() {
    let l2 = MockNode { fail_all_estimates: true, mint_rate: 1, ..Default::default() };
    let client = mock_client(MockNode::default(), l2);
    let sender = fresh_sender();

    let err = client
        .send_raw_transaction(
            Address::repeat_byte(0x11),
            MatrixTransactionParams::default(),
            &sender,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, MatrixClientError::SimulationFailed(_)));
    assert!(sender.sent.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_submission_maps_reestimate_rejection_to_insufficient_funds() {
    let l2 = MockNode {
        gas_estimate: 100_000,
        mint_rate: 1,
        fail_realistic_estimate: true,
        ..Default::default()
    };
    let client = mock_client(MockNode::default(), l2);
    let sender = fresh_sender();

    let err = client
        .send_raw_transaction(
            Address::repeat_byte(0x11),
            MatrixTransactionParams { value: U256::from(1), ..Default::default() },
            &sender,
        )
        .await
        .unwrap_err();

    // Under-funded deposits fail at the re-estimate, before any L1 spend.
    assert!(matches!(err, MatrixClientError::InsufficientFunds(_)));
    assert!(sender.sent.lock().unwrap().is_none());
    assert_eq!(client.l2.estimate_overrides.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_bridge_revert_in_dry_run_aborts_before_l1_spend() {
    let l2 = MockNode { mint_rate: 2, trace_reverts: true, ..Default::default() };
    let client = mock_client(MockNode::default(), l2);
    let sender = fresh_sender();

    let err = client
        .bridge_and_call(
            Address::repeat_byte(0x11),
            BridgeAndCallParams {
                target: Address::repeat_byte(0x44),
                calldata: Bytes::from_static(&hex!("a9059cbb")),
                value: U256::from(123),
            },
            &sender,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, MatrixClientError::SimulationFailed(_)));
    assert!(sender.sent.lock().unwrap().is_none());

    // The dry run impersonates the aliased bridge against the wrapped
    // native token with the fixed gas budget.
    let contracts = client.chain_pair().contracts;
    let traces = client.l2.trace_calls.lock().unwrap();
    assert_eq!(
        traces[0],
        (
            apply_l1_to_l2_alias(contracts.ether_bridge),
            contracts.wrapped_native,
            BRIDGE_GAS_LIMIT,
        )
    );
}

#[tokio::test]
async fn test_bridge_submits_value_carrying_l1_call() {
    let account = Address::repeat_byte(0x11);
    let target = Address::repeat_byte(0x44);
    let calldata = Bytes::from_static(&hex!("a9059cbb00000000000000000000000000000000"));
    let l2 = MockNode { mint_rate: 2, ..Default::default() };
    let client = mock_client(MockNode::default(), l2);
    let sender = fresh_sender();

    let result = client
        .bridge_and_call(
            account,
            BridgeAndCallParams { target, calldata: calldata.clone(), value: U256::from(123) },
            &sender,
        )
        .await
        .unwrap();

    let contracts = client.chain_pair().contracts;
    let sent = sender.sent.lock().unwrap().clone().unwrap();
    assert_eq!(sent.to, contracts.ether_bridge);
    assert_eq!(sent.value, U256::from(123));
    assert_eq!(sent.gas, None);
    assert_eq!(&sent.data[..4], hex!("e9a2d914"));

    // Flat-rate quote over the payload that would mine on L2.
    let zipped = cd_compress(&calldata);
    let l2_call = encode_l2_bridge_call(account, U256::from(123), target, &zipped);
    let payload = SubmissionPayload {
        l2_chain_id: client.chain_pair().l2_chain_id,
        to: Some(contracts.wrapped_native),
        value: U256::ZERO,
        gas_limit: BRIDGE_GAS_LIMIT,
        data: Bytes::from(l2_call.clone()),
        mine_boost: Bytes::new(),
    };
    assert_eq!(result.mint_amount, quote_bridge_mint(&payload.to_bytes(), 2).amount);

    // Hash binds the aliased bridge as sender and the wrapped token as
    // recipient.
    let expected_hash = compute_matrix_transaction_hash(
        B256::repeat_byte(0xcc),
        apply_l1_to_l2_alias(contracts.ether_bridge),
        Some(contracts.wrapped_native),
        U256::ZERO,
        &l2_call,
        U256::from(BRIDGE_GAS_LIMIT),
        Some(result.mint_amount),
    );
    assert_eq!(result.matrix_tx_hash, expected_hash);
}

#[tokio::test]
async fn test_resolver_runs_against_stub_node() {
    let l1 = MockNode {
        transaction: Some(L1TransactionInfo {
            from: Address::repeat_byte(0x11),
            to: Some(ChainPair::mainnet().contracts.inbox),
            input: Bytes::from_static(&hex!(
                "46e7830bbbb19422222222222222222222222222222222222222220582520884deadbeef84075bcd15"
            )),
        }),
        ..Default::default()
    };
    let client = mock_client(l1, MockNode::default());

    let hash = client.matrix_tx_hash_from_l1_hash(B256::repeat_byte(0xbb)).await.unwrap();
    assert_eq!(
        hash,
        b256!("326d7e1355d78a2150c97c765ca61f6419cca19f3bad1683bf0fb3925965faf0")
    );
}
