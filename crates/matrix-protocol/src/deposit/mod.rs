//! Deposit payload encoding and decoding for Matrix L1→L2 transactions.
//!
//! A Matrix deposit is an L1 transaction to the inbox contract whose calldata
//! is `0x46 || rlp([...])`. Two distinct field layouts share that envelope:
//!
//! - [`SubmissionPayload`]: what a client encodes before broadcasting. The
//!   last tuple slot carries the optional mine-boost bytes.
//! - [`MinedDeposit`]: what decoding already-submitted L1 calldata yields.
//!   The last tuple slot carries the realized FCT mint amount.
//!
//! The two layouts are not inverses of each other and are kept as separate
//! types on purpose.

pub mod decode;
pub mod encode;

use alloy_primitives::{Address, Bytes, U256};
use thiserror::Error;

pub use encode::SUBMISSION_TX_TYPE;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("matrix calldata too short: {0} bytes")]
    CalldataTooShort(usize),
    #[error("invalid RLP structure: {0}")]
    Rlp(#[from] alloy_rlp::Error),
    #[error("expected a list of at least 6 fields, got {0}")]
    TooFewFields(usize),
    #[error("recipient field must be empty or 20 bytes, got {0}")]
    InvalidRecipientLength(usize),
    #[error("scalar field `{0}` overflows its width")]
    ScalarOverflow(&'static str),
}

/// A deposit payload in submission form, encoded into L1 inbox calldata.
///
/// `gas_limit` is always the result of a prior L2 gas estimate; callers do
/// not supply it directly in the default flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    /// Target L2 chain id.
    pub l2_chain_id: u64,
    /// Recipient on L2. `None` encodes as the empty string.
    pub to: Option<Address>,
    /// Native value to credit on L2.
    pub value: U256,
    /// L2 execution gas budget.
    pub gas_limit: u64,
    /// L2 calldata.
    pub data: Bytes,
    /// Opaque extra bytes. No execution effect; only lengthens the payload
    /// and therefore raises the FCT mint amount.
    pub mine_boost: Bytes,
}

impl SubmissionPayload {
    /// Encode as `0x46 || rlp([chain_id, to, value, gas_limit, data, mine_boost])`
    /// into the provided buffer.
    #[inline]
    pub fn encode(&self, out: &mut Vec<u8>) {
        encode::encode_submission(self, out)
    }

    /// Encode and return as `Bytes`.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = Vec::with_capacity(128 + self.data.len() + self.mine_boost.len());
        self.encode(&mut buf);
        Bytes::from(buf)
    }
}

/// A deposit recovered from L1 calldata that was already submitted on-chain.
///
/// Field order differs from [`SubmissionPayload`]: the trailing slot holds
/// the realized FCT mint amount instead of the pre-submission mine boost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinedDeposit {
    pub l2_chain_id: u64,
    /// Recipient on L2. Empty field decodes to `None`.
    pub to: Option<Address>,
    pub value: U256,
    pub gas_limit: U256,
    pub data: Bytes,
    pub mint_amount: U256,
}

impl MinedDeposit {
    /// Decode full L1 inbox calldata (type tag included).
    #[inline]
    pub fn decode(calldata: &[u8]) -> Result<Self, CodecError> {
        decode::decode_mined(calldata)
    }
}
