//! where: grind-tx unit helpers; what: ether <-> wei conversion; why: config and logs speak ether

use alloy_primitives::utils::UnitsError;
use alloy_primitives::U256;

pub fn parse_ether(value: &str) -> Result<U256, UnitsError> {
    alloy_primitives::utils::parse_ether(value.trim())
}

pub fn format_ether(wei: U256) -> String {
    alloy_primitives::utils::format_ether(wei)
}
