//! Pure protocol logic for Matrix L1→L2 deposit transactions.
//!
//! This crate contains everything that is deterministic and I/O free:
//! - Deposit payload encoding/decoding (submission format, type `0x46`, and
//!   the mined on-chain format recovered from L1 calldata)
//! - Matrix transaction hash derivation (type `0x7d` preimage)
//! - FCT mint economics (calldata cost functions and mint quotes)
//! - L1→L2 address aliasing
//! - Calldata compaction (LibZip-compatible run-length coding)
//! - Chain pair and contract address configuration
//!
//! Network access (gas estimation, oracle reads, broadcasting) lives in
//! `matrix-client`.

mod alias;
mod chains;
mod compress;
mod hash;
mod mint;

pub mod deposit;


pub use alias::{apply_l1_to_l2_alias, undo_l1_to_l2_alias, L1_TO_L2_ALIAS_OFFSET};
pub use chains::{
    ChainPair, ContractAddresses, ContractOverrides, BSC_MAINNET_CHAIN_ID, BSC_TESTNET_CHAIN_ID,
    MATRIX_MAINNET_CHAIN_ID, MATRIX_TESTNET_CHAIN_ID,
};
pub use compress::{cd_compress, cd_decompress, DecompressError};
pub use deposit::{CodecError, MinedDeposit, SubmissionPayload, SUBMISSION_TX_TYPE};
pub use hash::{compute_matrix_transaction_hash, MATRIX_TX_HASH_TYPE};
pub use mint::{
    input_gas_cost, flat_input_cost, quote_bridge_mint, quote_submission_mint, MintQuote,
    CALLDATA_NONZERO_BYTE_GAS, CALLDATA_ZERO_BYTE_GAS, FLAT_CALLDATA_BYTE_GAS,
};
