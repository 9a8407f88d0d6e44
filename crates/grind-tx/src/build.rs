//! where: tx assembly; what: EIP-1559 transfer carrying the ground calldata; why: one place maps params to alloy fields

use crate::constants::{
    DEFAULT_CHAIN_ID, DEFAULT_GAS_LIMIT, DEFAULT_MAX_FEE_PER_GAS, DEFAULT_MAX_PRIORITY_FEE_PER_GAS,
    DEFAULT_TO,
};
use alloy_consensus::TxEip1559;
use alloy_primitives::{Address, Bytes, TxKind, U256};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxParams {
    pub chain_id: u64,
    pub nonce: u64,
    pub to: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
    pub input: Bytes,
}

impl TxParams {
    pub fn new(nonce: u64, input: impl Into<Bytes>) -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            nonce,
            to: DEFAULT_TO,
            value: U256::ZERO,
            gas_limit: DEFAULT_GAS_LIMIT,
            max_fee_per_gas: u128::from(DEFAULT_MAX_FEE_PER_GAS),
            max_priority_fee_per_gas: u128::from(DEFAULT_MAX_PRIORITY_FEE_PER_GAS),
            input: input.into(),
        }
    }

    /// Same params with the nonce advanced by `offset`.
    pub fn nonce_offset(&self, offset: u64) -> Self {
        Self {
            nonce: self.nonce.saturating_add(offset),
            ..self.clone()
        }
    }
}

pub fn build_eip1559(params: &TxParams) -> TxEip1559 {
    TxEip1559 {
        chain_id: params.chain_id,
        nonce: params.nonce,
        gas_limit: params.gas_limit,
        max_fee_per_gas: params.max_fee_per_gas,
        max_priority_fee_per_gas: params.max_priority_fee_per_gas,
        to: TxKind::Call(params.to),
        value: params.value,
        input: params.input.clone(),
        ..Default::default()
    }
}
