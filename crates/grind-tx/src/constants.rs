//! where: grind-tx defaults; what: transfer parameters used when nothing overrides them; why: reproduce the reference run

use alloy_primitives::{address, Address};

/// Burn address receiving the calldata transfer.
pub const DEFAULT_TO: Address = address!("0x000000000000000000000000000000000000dEaD");
/// Holesky.
pub const DEFAULT_CHAIN_ID: u64 = 17_000;
pub const DEFAULT_GAS_LIMIT: u64 = 29_967_996;
pub const DEFAULT_MAX_FEE_PER_GAS: u64 = 40;
pub const DEFAULT_MAX_PRIORITY_FEE_PER_GAS: u64 = 40;
pub const DEFAULT_TX_COUNT: u64 = 1;
