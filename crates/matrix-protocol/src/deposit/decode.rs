//! Decoding of already-mined Matrix deposit calldata.
//!
//! Input is the raw `input` field of an L1 transaction to the inbox:
//! `0x46 || rlp([l2_chain_id, to, value, gas_limit, data, mint_amount])`.
//! Empty scalar fields decode to zero, an empty recipient to `None`.

use alloy_primitives::{Address, Bytes, U256};
use alloy_rlp::Header;

use super::{CodecError, MinedDeposit};

/// Minimum positional fields in the mined tuple.
const MIN_FIELDS: usize = 6;

/// Decode full inbox calldata (type tag included) into a [`MinedDeposit`].
pub fn decode_mined(calldata: &[u8]) -> Result<MinedDeposit, CodecError> {
    // Tag byte plus at least one body byte.
    if calldata.len() < 2 {
        return Err(CodecError::CalldataTooShort(calldata.len()));
    }

    let mut buf = &calldata[1..];
    let header = Header::decode(&mut buf)?;
    if !header.list {
        return Err(CodecError::Rlp(alloy_rlp::Error::UnexpectedString));
    }
    if buf.len() < header.payload_length {
        return Err(CodecError::Rlp(alloy_rlp::Error::InputTooShort));
    }

    let mut items = &buf[..header.payload_length];
    let mut fields: Vec<&[u8]> = Vec::with_capacity(MIN_FIELDS);
    while !items.is_empty() {
        let h = Header::decode(&mut items)?;
        if h.list {
            return Err(CodecError::Rlp(alloy_rlp::Error::UnexpectedList));
        }
        if items.len() < h.payload_length {
            return Err(CodecError::Rlp(alloy_rlp::Error::InputTooShort));
        }
        let (payload, rest) = items.split_at(h.payload_length);
        fields.push(payload);
        items = rest;
    }

    if fields.len() < MIN_FIELDS {
        return Err(CodecError::TooFewFields(fields.len()));
    }

    // Positional layout: [l2_chain_id, to, value, gas_limit, data, mint_amount]
    let l2_chain_id = decode_u64(fields[0], "l2_chain_id")?;
    let to = decode_recipient(fields[1])?;
    let value = decode_u256(fields[2], "value")?;
    let gas_limit = decode_u256(fields[3], "gas_limit")?;
    let data = Bytes::copy_from_slice(fields[4]);
    let mint_amount = decode_u256(fields[5], "mint_amount")?;

    Ok(MinedDeposit { l2_chain_id, to, value, gas_limit, data, mint_amount })
}

/// Empty field means no recipient; anything else must be a 20-byte address.
fn decode_recipient(field: &[u8]) -> Result<Option<Address>, CodecError> {
    match field.len() {
        0 => Ok(None),
        20 => Ok(Some(Address::from_slice(field))),
        n => Err(CodecError::InvalidRecipientLength(n)),
    }
}

/// Minimal big-endian scalar; the empty string decodes to zero.
fn decode_u256(field: &[u8], name: &'static str) -> Result<U256, CodecError> {
    U256::try_from_be_slice(field).ok_or(CodecError::ScalarOverflow(name))
}

fn decode_u64(field: &[u8], name: &'static str) -> Result<u64, CodecError> {
    if field.len() > 8 {
        return Err(CodecError::ScalarOverflow(name));
    }
    let mut be = [0u8; 8];
    be[8 - field.len()..].copy_from_slice(field);
    Ok(u64::from_be_bytes(be))
}
