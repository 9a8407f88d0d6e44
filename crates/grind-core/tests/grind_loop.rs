//! where: grind-core loop tests; what: winner selection and candidate shape; why: the payload must be the largest output

use grind_core::budget::CalldataBudget;
use grind_core::codec::Codec;
use grind_core::generate::generate_data;
use grind_core::grind::{grind, grind_round, GrindConfig, GrindError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_config(rounds: usize, trials: usize) -> GrindConfig {
    let budget = CalldataBudget::new(64_000, 0.29).expect("budget");
    GrindConfig {
        budget,
        rounds,
        trials_per_round: trials,
        codec: Codec::Snappy,
    }
}

#[test]
fn generated_data_has_requested_composition() {
    let mut rng = StdRng::seed_from_u64(7);
    let data = generate_data(300, 700, &mut rng);
    assert_eq!(data.len(), 1_000);
    assert_eq!(data.iter().filter(|b| **b == 0).count(), 300);
    // stride = 1000 / 301 = 3, so no two zeros are adjacent
    assert!(data.windows(2).all(|pair| pair[0] != 0 || pair[1] != 0));
}

#[test]
fn winner_is_the_largest_round() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = small_config(6, 2);
    let outcome = grind(&config, &mut rng).expect("grind");
    assert_eq!(outcome.rounds.len(), 6);
    let max = outcome
        .rounds
        .iter()
        .map(|summary| summary.compressed_len)
        .max()
        .expect("rounds");
    assert_eq!(outcome.best.compressed_len(), max);
    let first_max = outcome
        .rounds
        .iter()
        .find(|summary| summary.compressed_len == max)
        .expect("max round");
    assert_eq!(outcome.best_round, first_max.round);
}

#[test]
fn ties_resolve_to_the_first_round() {
    // zero rate 1.0 yields an all-zero buffer, so every round compresses identically
    let budget = CalldataBudget::new(4_000, 1.0).expect("budget");
    let config = GrindConfig {
        budget,
        rounds: 5,
        trials_per_round: 1,
        codec: Codec::Snappy,
    };
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = grind(&config, &mut rng).expect("grind");
    assert_eq!(outcome.best_round, 1);
    assert_eq!(outcome.best.zero_count, 1_000);
}

#[test]
fn best_candidate_decompresses_to_budget_shape() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = small_config(2, 1);
    let outcome = grind(&config, &mut rng).expect("grind");
    let raw = config
        .codec
        .decompress(&outcome.best.compressed)
        .expect("decompress");
    assert_eq!(raw.len(), config.budget.total_len());
    assert_eq!(outcome.best.raw_len, raw.len());
    assert_eq!(
        raw.iter().filter(|b| **b == 0).count(),
        config.budget.zeros
    );
}

#[test]
fn zstd_candidates_decompress_too() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut config = small_config(1, 1);
    config.codec = Codec::Zstd { level: 1 };
    let candidate = grind_round(&config, &mut rng).expect("round");
    let raw = config.codec.decompress(&candidate.compressed).expect("decompress");
    assert_eq!(raw.len(), candidate.raw_len);
}

#[test]
fn zero_rounds_or_trials_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        grind(&small_config(0, 1), &mut rng),
        Err(GrindError::NoTrials)
    ));
    assert!(matches!(
        grind(&small_config(3, 0), &mut rng),
        Err(GrindError::NoTrials)
    ));
}
