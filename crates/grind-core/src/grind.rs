//! where: grind loop; what: keep the largest compressed candidate across rounds; why: maximise the on-chain footprint

use crate::budget::CalldataBudget;
use crate::codec::{Codec, CodecError};
use crate::constants::{BYTES_PER_MB, DEFAULT_ROUNDS, DEFAULT_TRIALS_PER_ROUND};
use crate::generate::generate_data;
use rand::Rng;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum GrindError {
    #[error("grind needs at least one round and one trial")]
    NoTrials,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrindConfig {
    pub budget: CalldataBudget,
    pub rounds: usize,
    pub trials_per_round: usize,
    pub codec: Codec,
}

impl GrindConfig {
    pub fn new(budget: CalldataBudget) -> Self {
        Self {
            budget,
            rounds: DEFAULT_ROUNDS,
            trials_per_round: DEFAULT_TRIALS_PER_ROUND,
            codec: Codec::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub compressed: Vec<u8>,
    pub zero_count: usize,
    pub raw_len: usize,
}

impl Candidate {
    pub fn compressed_len(&self) -> usize {
        self.compressed.len()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: usize,
    pub compressed_len: usize,
    pub zero_count: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrindOutcome {
    pub best: Candidate,
    /// 1-based round that produced `best`.
    pub best_round: usize,
    pub rounds: Vec<RoundSummary>,
}

/// Runs `trials_per_round` generate-and-compress trials and keeps the
/// strictly largest compressed output.
pub fn grind_round<R: Rng + ?Sized>(
    config: &GrindConfig,
    rng: &mut R,
) -> Result<Candidate, GrindError> {
    if config.trials_per_round == 0 {
        return Err(GrindError::NoTrials);
    }
    let budget = &config.budget;
    let mut best: Option<Candidate> = None;
    for trial in 0..config.trials_per_round {
        let data = generate_data(budget.zeros, budget.nonzeros, rng);
        let compressed = config.codec.compress(&data)?;
        let improved = best
            .as_ref()
            .map_or(true, |current| compressed.len() > current.compressed_len());
        debug!(trial, compressed_len = compressed.len(), improved, "grind trial");
        if !improved {
            continue;
        }
        let zero_count = data.iter().filter(|byte| **byte == 0).count();
        if budget.zeros > 0 {
            info!(
                zero_count,
                raw_mb = data.len() as f64 / BYTES_PER_MB,
                compressed_mb = compressed.len() as f64 / BYTES_PER_MB,
                "new largest candidate"
            );
        }
        best = Some(Candidate {
            compressed,
            zero_count,
            raw_len: data.len(),
        });
    }
    best.ok_or(GrindError::NoTrials)
}

/// Runs every round and returns the largest candidate. Ties go to the
/// earliest round.
pub fn grind<R: Rng + ?Sized>(config: &GrindConfig, rng: &mut R) -> Result<GrindOutcome, GrindError> {
    if config.rounds == 0 || config.trials_per_round == 0 {
        return Err(GrindError::NoTrials);
    }
    let mut summaries = Vec::with_capacity(config.rounds);
    let mut best: Option<(usize, Candidate)> = None;
    for round in 1..=config.rounds {
        let candidate = grind_round(config, rng)?;
        summaries.push(RoundSummary {
            round,
            compressed_len: candidate.compressed_len(),
            zero_count: candidate.zero_count,
        });
        let replace = best
            .as_ref()
            .map_or(true, |(_, current)| candidate.compressed_len() > current.compressed_len());
        if replace {
            best = Some((round, candidate));
        }
    }
    let (best_round, best) = best.ok_or(GrindError::NoTrials)?;
    info!(
        best_round,
        rounds = config.rounds,
        compressed_len = best.compressed_len(),
        "round {best_round} had the max size block"
    );
    Ok(GrindOutcome {
        best,
        best_round,
        rounds: summaries,
    })
}
