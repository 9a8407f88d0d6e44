//! where: grind-core entry; what: calldata shaping, compression and the grind loop; why: keep the search free of chain deps

pub mod budget;
pub mod codec;
pub mod constants;
pub mod distribute;
pub mod generate;
pub mod grind;

pub use budget::{calldata_gas, intrinsic_gas, BudgetError, CalldataBudget};
pub use codec::{Codec, CodecError};
pub use distribute::distribute_evenly;
pub use generate::generate_data;
pub use grind::{grind, grind_round, Candidate, GrindConfig, GrindError, GrindOutcome, RoundSummary};
