//! where: calldata sizing; what: zero/non-zero byte counts under a weighted cap; why: stay inside the block budget

use crate::constants::{NONZERO_BYTE_COST, TX_BASE_GAS, ZERO_BYTE_COST};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BudgetError {
    #[error("zero rate must be within [0, 1], got {0}")]
    InvalidRate(f64),
    #[error("byte costs must be non-zero")]
    ZeroCost,
    #[error("weighted size {weighted} exceeds cap {cap}")]
    ExceedsCap { weighted: u64, cap: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalldataBudget {
    pub size: u64,
    pub zero_rate: f64,
    pub zero_cost: u64,
    pub nonzero_cost: u64,
    pub zeros: usize,
    pub nonzeros: usize,
}

impl CalldataBudget {
    pub fn new(size: u64, zero_rate: f64) -> Result<Self, BudgetError> {
        Self::with_costs(size, zero_rate, ZERO_BYTE_COST, NONZERO_BYTE_COST)
    }

    pub fn with_costs(
        size: u64,
        zero_rate: f64,
        zero_cost: u64,
        nonzero_cost: u64,
    ) -> Result<Self, BudgetError> {
        if !zero_rate.is_finite() || !(0.0..=1.0).contains(&zero_rate) {
            return Err(BudgetError::InvalidRate(zero_rate));
        }
        if zero_cost == 0 || nonzero_cost == 0 {
            return Err(BudgetError::ZeroCost);
        }
        // float-to-int casts truncate, matching floor for non-negative inputs
        let zeros = (size as f64 / zero_cost as f64 * zero_rate) as usize;
        let nonzeros = (size as f64 / nonzero_cost as f64 * (1.0 - zero_rate)) as usize;
        Self {
            size,
            zero_rate,
            zero_cost,
            nonzero_cost,
            zeros,
            nonzeros,
        }
        .checked()
    }

    /// Budget with explicit byte counts under the default costs.
    pub fn from_counts(size: u64, zeros: usize, nonzeros: usize) -> Result<Self, BudgetError> {
        let zero_rate = if size == 0 {
            0.0
        } else {
            (zeros as f64 * ZERO_BYTE_COST as f64 / size as f64).min(1.0)
        };
        Self {
            size,
            zero_rate,
            zero_cost: ZERO_BYTE_COST,
            nonzero_cost: NONZERO_BYTE_COST,
            zeros,
            nonzeros,
        }
        .checked()
    }

    fn checked(self) -> Result<Self, BudgetError> {
        let weighted = self.weighted_size();
        if weighted > self.size {
            return Err(BudgetError::ExceedsCap {
                weighted,
                cap: self.size,
            });
        }
        Ok(self)
    }

    pub fn weighted_size(&self) -> u64 {
        (self.zeros as u64)
            .saturating_mul(self.zero_cost)
            .saturating_add((self.nonzeros as u64).saturating_mul(self.nonzero_cost))
    }

    pub fn total_len(&self) -> usize {
        self.zeros + self.nonzeros
    }
}

/// Calldata gas of `data` under EIP-2028 pricing.
pub fn calldata_gas(data: &[u8]) -> u64 {
    data.iter().fold(0u64, |acc, byte| {
        let cost = if *byte == 0 {
            ZERO_BYTE_COST
        } else {
            NONZERO_BYTE_COST
        };
        acc.saturating_add(cost)
    })
}

/// Base transaction cost plus calldata gas.
pub fn intrinsic_gas(data: &[u8]) -> u64 {
    TX_BASE_GAS.saturating_add(calldata_gas(data))
}
