//! Client construction and configuration.

use bon::Builder;

use matrix_protocol::{ChainPair, ContractOverrides};

use super::{MatrixClientError, NodeProvider, RpcClient};

/// Configuration for a [`MatrixClient`].
///
/// RPC URLs default to the pair's public endpoints; contract overrides merge
/// over the pair defaults once, here, not per call.
#[derive(Debug, Clone, Builder)]
pub struct MatrixClientConfig {
    /// Chain id of either side of a supported pair.
    pub chain_id: u64,
    /// L1 RPC endpoint override.
    pub l1_rpc_url: Option<String>,
    /// L2 RPC endpoint override.
    pub l2_rpc_url: Option<String>,
    /// Contract address overrides.
    #[builder(default)]
    pub contracts: ContractOverrides,
}

/// Entry point for the deposit pipelines. One instance per chain pair;
/// every pipeline run is independent and reentrant. Generic over the node
/// read surface so the pipelines can run against a stub in tests; the
/// default is the wire [`RpcClient`].
#[derive(Debug, Clone)]
pub struct MatrixClient<P = RpcClient> {
    pub(crate) pair: ChainPair,
    pub(crate) l1: P,
    pub(crate) l2: P,
}

impl MatrixClient {
    /// Client for a strict L1 chain id (56 or 97). Anything else is an
    /// input validation failure, never a silent default.
    pub fn new(l1_chain_id: u64) -> Result<Self, MatrixClientError> {
        if ChainPair::from_l1_chain_id(l1_chain_id).is_none() {
            return Err(MatrixClientError::InvalidInput(format!(
                "invalid L1 chain id {l1_chain_id}"
            )));
        }
        Self::from_config(MatrixClientConfig::builder().chain_id(l1_chain_id).build())
    }

    /// Client for either side of a pair; the bridge path accepts a
    /// connection to the L2 as well as the L1.
    pub fn for_chain(chain_id: u64) -> Result<Self, MatrixClientError> {
        Self::from_config(MatrixClientConfig::builder().chain_id(chain_id).build())
    }

    pub fn from_config(config: MatrixClientConfig) -> Result<Self, MatrixClientError> {
        let pair = ChainPair::from_chain_id(config.chain_id)
            .ok_or(MatrixClientError::UnsupportedNetwork(config.chain_id))?
            .with_overrides(&config.contracts);

        let l1 = RpcClient::new(config.l1_rpc_url.unwrap_or_else(|| pair.l1_rpc_url.to_string()));
        let l2 = RpcClient::new(config.l2_rpc_url.unwrap_or_else(|| pair.l2_rpc_url.to_string()));

        Ok(Self { pair, l1, l2 })
    }
}

impl<P: NodeProvider> MatrixClient<P> {
    /// The resolved chain pair (after override merging).
    pub fn chain_pair(&self) -> &ChainPair {
        &self.pair
    }

    /// Read the live FCT mint rate from the pair's L2 oracle.
    pub async fn fct_mint_rate(&self) -> Result<u128, MatrixClientError> {
        self.l2.fct_mint_rate(self.pair.contracts.mint_rate_oracle).await
    }
}
