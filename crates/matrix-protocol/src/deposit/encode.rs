//! RLP encoding for the submission payload format.
//!
//! Format: `0x46 || rlp([l2_chain_id, to, value, gas_limit, data, mine_boost])`
//! where every scalar is its minimal big-endian byte string and zero encodes
//! as the empty string. The same low-level helpers back the hash preimage
//! encoding in [`crate::hash`].

use super::SubmissionPayload;

/// Type tag for a Matrix deposit in submission form.
pub const SUBMISSION_TX_TYPE: u8 = 0x46;

/// Encode a submission payload into the provided buffer.
pub fn encode_submission(payload: &SubmissionPayload, out: &mut Vec<u8>) {
    out.push(SUBMISSION_TX_TYPE);

    let chain_id_be = payload.l2_chain_id.to_be_bytes();
    let value_be = payload.value.to_be_bytes::<32>();
    let gas_be = payload.gas_limit.to_be_bytes();

    let chain_id_trimmed = trim_leading_zeros(&chain_id_be);
    let value_trimmed = trim_leading_zeros(&value_be);
    let gas_trimmed = trim_leading_zeros(&gas_be);

    // `to` field: empty when there is no recipient, 20 bytes otherwise
    let to_bytes: &[u8] = match &payload.to {
        Some(addr) => addr.as_slice(),
        None => &[],
    };

    let payload_len = rlp_string_len(chain_id_trimmed)
        + rlp_string_len(to_bytes)
        + rlp_string_len(value_trimmed)
        + rlp_string_len(gas_trimmed)
        + rlp_string_len(&payload.data)
        + rlp_string_len(&payload.mine_boost);

    encode_list_header(out, payload_len);

    encode_string(out, chain_id_trimmed);
    encode_string(out, to_bytes);
    encode_string(out, value_trimmed);
    encode_string(out, gas_trimmed);
    encode_string(out, &payload.data);
    encode_string(out, &payload.mine_boost);
}

/// Trim leading zero bytes from a big-endian encoded integer.
/// Returns empty slice for zero values.
#[inline]
pub(crate) fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b != 0) {
        Some(idx) => &bytes[idx..],
        None => &[],
    }
}

/// Calculate the RLP-encoded length of a string/bytes.
#[inline]
pub(crate) const fn rlp_string_len(data: &[u8]) -> usize {
    let len = data.len();
    if len == 1 && data[0] < 0x80 {
        1
    } else if len < 56 {
        1 + len
    } else {
        1 + len_of_length(len) + len
    }
}

/// Calculate bytes needed to encode a length value.
#[inline]
const fn len_of_length(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (usize::BITS as usize - len.leading_zeros() as usize + 7) / 8
    }
}

/// Encode an RLP list header.
#[inline]
pub(crate) fn encode_list_header(out: &mut Vec<u8>, payload_len: usize) {
    if payload_len < 56 {
        out.push(0xC0 + payload_len as u8);
    } else {
        let len_bytes = len_of_length(payload_len);
        out.push(0xF7 + len_bytes as u8);
        out.extend_from_slice(&payload_len.to_be_bytes()[8 - len_bytes..]);
    }
}

/// Encode an RLP string (bytes).
#[inline]
pub(crate) fn encode_string(out: &mut Vec<u8>, data: &[u8]) {
    let len = data.len();

    if len == 1 && data[0] < 0x80 {
        // Single byte < 0x80: encoded as itself
        out.push(data[0]);
    } else if len < 56 {
        // Short string: 0x80 + len, then data
        out.push(0x80 + len as u8);
        out.extend_from_slice(data);
    } else {
        // Long string: 0xB7 + len_of_len, then len, then data
        let len_bytes = len_of_length(len);
        out.push(0xB7 + len_bytes as u8);
        out.extend_from_slice(&len.to_be_bytes()[8 - len_bytes..]);
        out.extend_from_slice(data);
    }
}
