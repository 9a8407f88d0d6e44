//! where: grind-core shared constants; what: calldata budget and grind defaults; why: one place to retune a run

/// Upper bound on the weighted calldata size.
pub const DEFAULT_CALLDATA_SIZE: u64 = 17_000_000;
/// Share of the budget spent on zero bytes.
pub const DEFAULT_ZERO_RATE: f64 = 0.29;

// EIP-2028 calldata pricing
pub const ZERO_BYTE_COST: u64 = 4;
pub const NONZERO_BYTE_COST: u64 = 16;
pub const TX_BASE_GAS: u64 = 21_000;

pub const DEFAULT_ROUNDS: usize = 20;
pub const DEFAULT_TRIALS_PER_ROUND: usize = 1;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
