//! L1→L2 address aliasing.
//!
//! When an L1 contract triggers an L2-side call, its address is shifted by a
//! fixed offset before it appears as the L2 sender. This keeps an L1
//! contract distinguishable from an unrelated L2 account at the same
//! address. The transform is a wrapping add over the 160-bit address space
//! and must match the on-chain inverse check bit for bit.

use alloy_primitives::{address, aliases::U160, Address};

/// Offset applied to an L1 address to obtain its L2 alias.
pub const L1_TO_L2_ALIAS_OFFSET: Address = address!("1111000000000000000000000000000000001111");

/// Alias an L1 contract address into its L2-visible sender address.
pub fn apply_l1_to_l2_alias(l1_address: Address) -> Address {
    let offset = U160::from_be_bytes(L1_TO_L2_ALIAS_OFFSET.0 .0);
    Address::from(U160::from_be_bytes(l1_address.0 .0).wrapping_add(offset))
}

/// Invert [`apply_l1_to_l2_alias`].
pub fn undo_l1_to_l2_alias(l2_address: Address) -> Address {
    let offset = U160::from_be_bytes(L1_TO_L2_ALIAS_OFFSET.0 .0);
    Address::from(U160::from_be_bytes(l2_address.0 .0).wrapping_sub(offset))
}
