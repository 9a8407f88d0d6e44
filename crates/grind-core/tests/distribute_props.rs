//! where: grind-core property tests; what: distributor keeps the multiset and spacing; why: the shaping must not alter composition

use grind_core::distribute::{distribute_evenly, value_positions};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn histogram(bytes: &[u8]) -> BTreeMap<u8, usize> {
    let mut out = BTreeMap::new();
    for byte in bytes {
        *out.entry(*byte).or_insert(0) += 1;
    }
    out
}

proptest! {
    #[test]
    fn preserves_every_value_count(
        arr in proptest::collection::vec(0u8..4, 0..512),
        value in 0u8..4,
    ) {
        let out = distribute_evenly(&arr, value);
        prop_assert_eq!(out.len(), arr.len());
        prop_assert_eq!(histogram(&out), histogram(&arr));
    }

    #[test]
    fn target_positions_are_spaced_by_stride(
        arr in proptest::collection::vec(0u8..3, 1..512),
    ) {
        let out = distribute_evenly(&arr, 0);
        let count = arr.iter().filter(|b| **b == 0).count();
        prop_assume!(count < arr.len());
        let stride = arr.len() / (count + 1);
        let positions: Vec<usize> = out
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == 0)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(positions.len(), count);
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert!(pair[1] - pair[0] >= stride);
        }
    }

    #[test]
    fn other_values_keep_relative_order(
        arr in proptest::collection::vec(0u8..8, 0..256),
    ) {
        let out = distribute_evenly(&arr, 0);
        let before: Vec<u8> = arr.iter().copied().filter(|b| *b != 0).collect();
        let after: Vec<u8> = out.iter().copied().filter(|b| *b != 0).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn positions_match_layout(len in 1usize..2048, count_seed in any::<usize>()) {
        let count = count_seed % len;
        let positions: Vec<usize> = value_positions(len, count).collect();
        let mut arr = vec![1u8; len];
        for slot in arr.iter_mut().take(count) {
            *slot = 0;
        }
        let out = distribute_evenly(&arr, 0);
        for position in positions {
            prop_assert_eq!(out[position], 0);
        }
    }
}

#[test]
fn works_for_non_byte_values() {
    let arr = ["a", "x", "x", "b", "c", "x"];
    let out = distribute_evenly(&arr, "x");
    // stride = 6 / 4 -> positions 0, 1, 3
    assert_eq!(out, vec!["x", "x", "a", "x", "b", "c"]);
}
