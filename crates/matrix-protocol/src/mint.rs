//! FCT mint economics.
//!
//! An L1 deposit mints FCT on L2 proportional to the calldata cost of its
//! encoded payload: `amount = input_cost * mint_rate`, with the rate read
//! live from the L1Block oracle on L2.
//!
//! Two cost formulas are in force and they are NOT interchangeable:
//! - the plain submission path prices bytes like intrinsic calldata gas,
//!   4 per zero byte and 16 per non-zero byte ([`input_gas_cost`]);
//! - the bridge-and-call path prices every byte flat at 8
//!   ([`flat_input_cost`]).
//!
//! Each formula is pinned to its call site by [`quote_submission_mint`] and
//! [`quote_bridge_mint`]; both must match the on-chain verifier exactly.

use alloy_primitives::U256;

/// Calldata gas per zero byte (submission path).
pub const CALLDATA_ZERO_BYTE_GAS: u64 = 4;
/// Calldata gas per non-zero byte (submission path).
pub const CALLDATA_NONZERO_BYTE_GAS: u64 = 16;
/// Flat gas per byte (bridge-and-call path).
pub const FLAT_CALLDATA_BYTE_GAS: u64 = 8;

/// A mint amount quote derived from concrete payload bytes and a live rate.
///
/// Advisory until submission: it must be recomputed from the exact bytes
/// that are broadcast, since the gas limit (and so the encoded length) can
/// change between estimation and submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintQuote {
    /// Oracle rate at quote time (FCT wei per unit of input cost).
    pub rate: u128,
    /// Deterministic cost of the payload bytes.
    pub input_cost: U256,
    /// `input_cost * rate`.
    pub amount: U256,
}

/// Intrinsic-calldata-style cost: 4 per zero byte, 16 per non-zero byte.
pub fn input_gas_cost(bytes: &[u8]) -> U256 {
    let zeros = bytes.iter().filter(|&&b| b == 0).count() as u64;
    let nonzeros = bytes.len() as u64 - zeros;
    U256::from(zeros * CALLDATA_ZERO_BYTE_GAS + nonzeros * CALLDATA_NONZERO_BYTE_GAS)
}

/// Flat per-byte cost: 8 per byte regardless of content.
pub fn flat_input_cost(bytes: &[u8]) -> U256 {
    U256::from(bytes.len() as u64 * FLAT_CALLDATA_BYTE_GAS)
}

/// Quote the mint for a plain deposit submission payload.
pub fn quote_submission_mint(payload_bytes: &[u8], rate: u128) -> MintQuote {
    let input_cost = input_gas_cost(payload_bytes);
    MintQuote { rate, input_cost, amount: input_cost * U256::from(rate) }
}

/// Quote the mint for a bridge-and-call payload.
pub fn quote_bridge_mint(payload_bytes: &[u8], rate: u128) -> MintQuote {
    let input_cost = flat_input_cost(payload_bytes);
    MintQuote { rate, input_cost, amount: input_cost * U256::from(rate) }
}
