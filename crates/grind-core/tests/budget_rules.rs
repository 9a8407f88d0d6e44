//! where: grind-core budget tests; what: counts, cap and gas pricing; why: the weighted cap is the only hard limit

use grind_core::budget::{calldata_gas, intrinsic_gas, BudgetError, CalldataBudget};
use grind_core::constants::{DEFAULT_CALLDATA_SIZE, DEFAULT_ZERO_RATE, TX_BASE_GAS};

#[test]
fn default_budget_fills_the_cap() {
    let budget = CalldataBudget::new(DEFAULT_CALLDATA_SIZE, DEFAULT_ZERO_RATE).expect("budget");
    assert_eq!(budget.zeros, 1_232_500);
    assert_eq!(budget.nonzeros, 754_375);
    assert_eq!(budget.weighted_size(), DEFAULT_CALLDATA_SIZE);
    assert_eq!(budget.total_len(), 1_986_875);
}

#[test]
fn counts_truncate_toward_zero() {
    let budget = CalldataBudget::new(1_000, 0.5).expect("budget");
    assert_eq!(budget.zeros, 125);
    assert_eq!(budget.nonzeros, 31);
    assert!(budget.weighted_size() <= 1_000);
}

#[test]
fn rejects_rates_outside_unit_interval() {
    assert_eq!(
        CalldataBudget::new(1_000, 1.5).err(),
        Some(BudgetError::InvalidRate(1.5))
    );
    assert!(matches!(
        CalldataBudget::new(1_000, f64::NAN),
        Err(BudgetError::InvalidRate(_))
    ));
    assert_eq!(
        CalldataBudget::with_costs(1_000, 0.5, 0, 16).err(),
        Some(BudgetError::ZeroCost)
    );
}

#[test]
fn explicit_counts_over_cap_are_rejected() {
    assert_eq!(
        CalldataBudget::from_counts(100, 10, 5).err(),
        Some(BudgetError::ExceedsCap {
            weighted: 120,
            cap: 100
        })
    );
    let ok = CalldataBudget::from_counts(120, 10, 5).expect("fits");
    assert_eq!(ok.weighted_size(), 120);
}

#[test]
fn calldata_gas_prices_zero_and_nonzero_bytes() {
    assert_eq!(calldata_gas(&[]), 0);
    assert_eq!(calldata_gas(&[0, 0, 1, 255]), 4 + 4 + 16 + 16);
    assert_eq!(intrinsic_gas(&[0]), TX_BASE_GAS + 4);
}
