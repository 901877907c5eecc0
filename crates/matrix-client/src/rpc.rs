//! JSON-RPC transport for the L1 and L2 nodes.
//!
//! Raw `reqwest` + JSON bodies; only the handful of methods the pipelines
//! need. Timeouts and connection policy belong to the underlying HTTP
//! client, not to the pipelines.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall};
use reqwest::Client;
use serde_json::{json, Value};

use super::{MatrixClientError, NodeProvider};

sol! {
    /// Mint-rate getter on the L2 L1Block oracle.
    function fctMintRate() external view returns (uint128);
}

/// Fields of a fetched L1 transaction the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1TransactionInfo {
    pub from: Address,
    /// `None` for contract-creation transactions.
    pub to: Option<Address>,
    pub input: Bytes,
}

/// Minimal JSON-RPC client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: Client::new(), url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, MatrixClientError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let resp = self.client.post(&self.url).json(&body).send().await?;
        let json: Value = resp.json().await?;

        if let Some(err) = json.get("error") {
            let message = err
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown rpc error");
            return Err(MatrixClientError::Rpc(format!("{method}: {message}")));
        }

        json.get("result")
            .cloned()
            .ok_or_else(|| MatrixClientError::Rpc(format!("{method}: no result in response")))
    }
}

impl NodeProvider for RpcClient {
    async fn estimate_gas(
        &self,
        from: Address,
        to: Option<Address>,
        value: U256,
        data: &[u8],
        balance_override: Option<(Address, U256)>,
    ) -> Result<u64, MatrixClientError> {
        let call = call_object(from, to, value, data);
        let params = match balance_override {
            Some((addr, balance)) => json!([call, "latest", balance_override_object(addr, balance)]),
            None => json!([call, "latest"]),
        };

        let result = self.request("eth_estimateGas", params).await?;
        parse_quantity_u64(&result)
    }

    async fn get_balance(&self, address: Address) -> Result<U256, MatrixClientError> {
        let result = self
            .request("eth_getBalance", json!([format!("{address:?}"), "latest"]))
            .await?;
        parse_quantity_u256(&result)
    }

    async fn fct_mint_rate(&self, oracle: Address) -> Result<u128, MatrixClientError> {
        let calldata = fctMintRateCall {}.abi_encode();
        let call = json!({
            "to": format!("{oracle:?}"),
            "data": format!("0x{}", alloy_primitives::hex::encode(calldata)),
        });

        let result = self.request("eth_call", json!([call, "latest"])).await?;
        let word = parse_quantity_u256(&result)?;
        word.try_into()
            .map_err(|_| MatrixClientError::Rpc("fctMintRate: rate overflows uint128".into()))
    }

    async fn trace_call_reverts(
        &self,
        from: Address,
        to: Address,
        data: &[u8],
        gas: u64,
        balance_override: (Address, U256),
    ) -> Result<bool, MatrixClientError> {
        let (funded, balance) = balance_override;
        let call = json!({
            "from": format!("{from:?}"),
            "to": format!("{to:?}"),
            "data": format!("0x{}", alloy_primitives::hex::encode(data)),
            "gas": format!("0x{gas:x}"),
            "value": "0x0",
        });
        let config = json!({ "stateOverrides": balance_override_object(funded, balance) });

        let result = self.request("debug_traceCall", json!([call, "latest", config])).await?;
        Ok(trace_has_revert(&result))
    }

    async fn get_transaction(
        &self,
        hash: B256,
    ) -> Result<L1TransactionInfo, MatrixClientError> {
        let result = self
            .request("eth_getTransactionByHash", json!([format!("{hash:?}")]))
            .await?;
        if result.is_null() {
            return Err(MatrixClientError::Rpc(format!("transaction {hash} not found")));
        }
        transaction_from_json(&result)
    }
}

/// Build the JSON call object shared by gas estimation paths.
pub(crate) fn call_object(from: Address, to: Option<Address>, value: U256, data: &[u8]) -> Value {
    let mut call = json!({
        "from": format!("{from:?}"),
        "value": format!("0x{value:x}"),
        "data": format!("0x{}", alloy_primitives::hex::encode(data)),
    });
    if let Some(to) = to {
        call["to"] = json!(format!("{to:?}"));
    }
    call
}

/// `{ address: { "balance": hex } }` state override entry.
pub(crate) fn balance_override_object(address: Address, balance: U256) -> Value {
    json!({ format!("{address:?}"): { "balance": format!("0x{balance:x}") } })
}

/// Scan `structLogs` of a debug trace for a `REVERT` opcode.
pub(crate) fn trace_has_revert(trace: &Value) -> bool {
    trace
        .get("structLogs")
        .and_then(|logs| logs.as_array())
        .is_some_and(|logs| logs.iter().any(|log| log.get("op").and_then(|op| op.as_str()) == Some("REVERT")))
}

pub(crate) fn transaction_from_json(tx: &Value) -> Result<L1TransactionInfo, MatrixClientError> {
    let from = tx
        .get("from")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<Address>().ok())
        .ok_or_else(|| MatrixClientError::Json("missing transaction sender".into()))?;

    let to = match tx.get("to") {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            v.as_str()
                .and_then(|s| s.parse::<Address>().ok())
                .ok_or_else(|| MatrixClientError::Json("malformed transaction recipient".into()))?,
        ),
    };

    let input = tx
        .get("input")
        .and_then(|v| v.as_str())
        .and_then(|s| s.strip_prefix("0x"))
        .and_then(|s| alloy_primitives::hex::decode(s).ok())
        .map(Bytes::from)
        .ok_or_else(|| MatrixClientError::Json("missing transaction input".into()))?;

    Ok(L1TransactionInfo { from, to, input })
}

pub(crate) fn parse_quantity_u64(value: &Value) -> Result<u64, MatrixClientError> {
    let s = value
        .as_str()
        .ok_or_else(|| MatrixClientError::Json("expected hex quantity".into()))?;
    u64::from_str_radix(s.trim_start_matches("0x"), 16)
        .map_err(|e| MatrixClientError::Json(format!("bad hex quantity {s}: {e}")))
}

pub(crate) fn parse_quantity_u256(value: &Value) -> Result<U256, MatrixClientError> {
    let s = value
        .as_str()
        .ok_or_else(|| MatrixClientError::Json("expected hex quantity".into()))?;
    U256::from_str_radix(s.trim_start_matches("0x"), 16)
        .map_err(|e| MatrixClientError::Json(format!("bad hex quantity {s}: {e}")))
}
