//! Matrix transaction hash derivation.
//!
//! The canonical L2-side identifier of a deposit is
//! `keccak256(0x7d || rlp([source_hash, from, to, "", value, gas_limit, "", data]))`
//! where `source_hash` is the L1 transaction hash that carried the payload.
//! The two empty slots are reserved positions in the preimage format. The tag
//! differs from the submission tag (`0x46`): this marks a hash preimage, not
//! transmittable calldata.

use alloy_primitives::{keccak256, Address, B256, U256};

use crate::deposit::encode::{encode_list_header, encode_string, rlp_string_len, trim_leading_zeros};

/// Type tag for the Matrix transaction hash preimage.
pub const MATRIX_TX_HASH_TYPE: u8 = 0x7d;

/// Compute the canonical Matrix transaction hash for a deposit.
///
/// `mint` is accepted to keep one signature across every call site but does
/// not participate in the hash: varying it never changes the output. This is
/// deliberate and must not be "fixed".
pub fn compute_matrix_transaction_hash(
    source_hash: B256,
    from: Address,
    to: Option<Address>,
    value: U256,
    data: &[u8],
    gas_limit: U256,
    _mint: Option<U256>,
) -> B256 {
    let value_be = value.to_be_bytes::<32>();
    let gas_be = gas_limit.to_be_bytes::<32>();

    let value_trimmed = trim_leading_zeros(&value_be);
    let gas_trimmed = trim_leading_zeros(&gas_be);

    let to_bytes: &[u8] = match &to {
        Some(addr) => addr.as_slice(),
        None => &[],
    };

    let payload_len = rlp_string_len(source_hash.as_slice())
        + rlp_string_len(from.as_slice())
        + rlp_string_len(to_bytes)
        + rlp_string_len(&[])
        + rlp_string_len(value_trimmed)
        + rlp_string_len(gas_trimmed)
        + rlp_string_len(&[])
        + rlp_string_len(data);

    let mut buf = Vec::with_capacity(2 + 9 + payload_len);
    buf.push(MATRIX_TX_HASH_TYPE);
    encode_list_header(&mut buf, payload_len);

    encode_string(&mut buf, source_hash.as_slice());
    encode_string(&mut buf, from.as_slice());
    encode_string(&mut buf, to_bytes);
    encode_string(&mut buf, &[]);
    encode_string(&mut buf, value_trimmed);
    encode_string(&mut buf, gas_trimmed);
    encode_string(&mut buf, &[]);
    encode_string(&mut buf, data);

    keccak256(&buf)
}
