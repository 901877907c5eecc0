//! Chain pairs and contract address configuration.
//!
//! Exactly two L1↔L2 pairs exist: BSC mainnet ↔ Matrix mainnet and BSC
//! testnet ↔ Matrix testnet. Any other chain id is rejected by the lookup
//! functions; there is no default pair.

use alloy_primitives::{address, Address};

pub const BSC_MAINNET_CHAIN_ID: u64 = 56;
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;
pub const MATRIX_MAINNET_CHAIN_ID: u64 = 0xbbbb1;
pub const MATRIX_TESTNET_CHAIN_ID: u64 = 0xbbbb2;

/// Matrix inbox on L1. Deposits are L1 transactions to this address with the
/// encoded payload as calldata. Same address on both networks.
const MATRIX_INBOX: Address = address!("0000000000000000000000000000000000bbbb01");

/// L1Block predeploy on L2; exposes the live FCT mint rate.
const L2_MINT_RATE_ORACLE: Address = address!("4200000000000000000000000000000000000015");

/// Wrapped native token predeploy on L2; target of bridge-and-call.
const L2_WRAPPED_NATIVE: Address = address!("4200000000000000000000000000000000000006");

const MAINNET_ETHER_BRIDGE: Address = address!("8F75466D69a52EF53C7363F38834bEfC027A2909");
const TESTNET_ETHER_BRIDGE: Address = address!("Ee49E40B2ef8C98011DB5B4999D93E8B766a7241");

pub const MAINNET_L1_RPC_URL: &str = "https://bsc-dataseed.binance.org";
pub const TESTNET_L1_RPC_URL: &str = "https://bsc-testnet.publicnode.com";
pub const MAINNET_L2_RPC_URL: &str = "https://mainnet.matrixlabs.app";
pub const TESTNET_L2_RPC_URL: &str = "https://testnet.matrixlabs.app";

/// Contract addresses relevant to one chain pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    /// Deposit inbox on L1.
    pub inbox: Address,
    /// Value bridge on L1 (bridge-and-call entry point).
    pub ether_bridge: Address,
    /// Mint-rate oracle on L2.
    pub mint_rate_oracle: Address,
    /// Wrapped native token on L2.
    pub wrapped_native: Address,
}

/// Per-call contract address overrides, merged over the pair defaults once
/// at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractOverrides {
    pub inbox: Option<Address>,
    pub ether_bridge: Option<Address>,
    pub mint_rate_oracle: Option<Address>,
    pub wrapped_native: Option<Address>,
}

/// A fixed association between one L1 chain and its paired Matrix L2 chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainPair {
    pub l1_chain_id: u64,
    pub l2_chain_id: u64,
    /// Default public L1 RPC endpoint.
    pub l1_rpc_url: &'static str,
    /// Default public L2 RPC endpoint.
    pub l2_rpc_url: &'static str,
    pub contracts: ContractAddresses,
}

impl ChainPair {
    pub const fn mainnet() -> Self {
        Self {
            l1_chain_id: BSC_MAINNET_CHAIN_ID,
            l2_chain_id: MATRIX_MAINNET_CHAIN_ID,
            l1_rpc_url: MAINNET_L1_RPC_URL,
            l2_rpc_url: MAINNET_L2_RPC_URL,
            contracts: ContractAddresses {
                inbox: MATRIX_INBOX,
                ether_bridge: MAINNET_ETHER_BRIDGE,
                mint_rate_oracle: L2_MINT_RATE_ORACLE,
                wrapped_native: L2_WRAPPED_NATIVE,
            },
        }
    }

    pub const fn testnet() -> Self {
        Self {
            l1_chain_id: BSC_TESTNET_CHAIN_ID,
            l2_chain_id: MATRIX_TESTNET_CHAIN_ID,
            l1_rpc_url: TESTNET_L1_RPC_URL,
            l2_rpc_url: TESTNET_L2_RPC_URL,
            contracts: ContractAddresses {
                inbox: MATRIX_INBOX,
                ether_bridge: TESTNET_ETHER_BRIDGE,
                mint_rate_oracle: L2_MINT_RATE_ORACLE,
                wrapped_native: L2_WRAPPED_NATIVE,
            },
        }
    }

    /// Resolve a pair from an L1 chain id. Unknown ids yield `None`, never a
    /// default.
    pub fn from_l1_chain_id(l1_chain_id: u64) -> Option<Self> {
        match l1_chain_id {
            BSC_MAINNET_CHAIN_ID => Some(Self::mainnet()),
            BSC_TESTNET_CHAIN_ID => Some(Self::testnet()),
            _ => None,
        }
    }

    /// Resolve a pair from either side's chain id (bridge-and-call accepts a
    /// connection to the L2 as well).
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            BSC_MAINNET_CHAIN_ID | MATRIX_MAINNET_CHAIN_ID => Some(Self::mainnet()),
            BSC_TESTNET_CHAIN_ID | MATRIX_TESTNET_CHAIN_ID => Some(Self::testnet()),
            _ => None,
        }
    }

    /// Merge per-call overrides over the pair defaults.
    pub fn with_overrides(mut self, overrides: &ContractOverrides) -> Self {
        if let Some(inbox) = overrides.inbox {
            self.contracts.inbox = inbox;
        }
        if let Some(bridge) = overrides.ether_bridge {
            self.contracts.ether_bridge = bridge;
        }
        if let Some(oracle) = overrides.mint_rate_oracle {
            self.contracts.mint_rate_oracle = oracle;
        }
        if let Some(weth) = overrides.wrapped_native {
            self.contracts.wrapped_native = weth;
        }
        self
    }
}
