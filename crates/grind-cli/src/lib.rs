//! where: calldata-grind binary support; what: config, logging, rpc lookup and the run pipeline; why: keep main.rs a thin shell

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod rpc;
pub mod run;

pub use cli::Cli;
pub use config::{Config, RunPlan};
pub use run::{run, RunReport};
