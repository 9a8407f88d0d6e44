//! where: calldata-grind configuration; what: TOML file + flag overrides resolved into a run plan; why: validate everything before grinding

use crate::cli::Cli;
use alloy_primitives::{Address, U256};
use anyhow::{anyhow, bail, Context};
use grind_core::constants::{
    DEFAULT_CALLDATA_SIZE, DEFAULT_ROUNDS, DEFAULT_TRIALS_PER_ROUND, DEFAULT_ZERO_RATE,
};
use grind_core::{CalldataBudget, Codec, GrindConfig};
use grind_tx::constants::{
    DEFAULT_CHAIN_ID, DEFAULT_GAS_LIMIT, DEFAULT_MAX_FEE_PER_GAS,
    DEFAULT_MAX_PRIORITY_FEE_PER_GAS, DEFAULT_TO, DEFAULT_TX_COUNT,
};
use grind_tx::units::parse_ether;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_KEY_FILE: &str = "sepolia_pk.txt";
pub const DEFAULT_OUT_FILE: &str = "nice_tx.txt";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub grind: GrindSection,
    pub tx: TxSection,
    pub io: IoSection,
    pub log: LogSection,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GrindSection {
    pub calldata_size: u64,
    pub zero_rate: f64,
    pub rounds: usize,
    pub trials: usize,
    pub codec: String,
    pub seed: Option<u64>,
}

impl Default for GrindSection {
    fn default() -> Self {
        Self {
            calldata_size: DEFAULT_CALLDATA_SIZE,
            zero_rate: DEFAULT_ZERO_RATE,
            rounds: DEFAULT_ROUNDS,
            trials: DEFAULT_TRIALS_PER_ROUND,
            codec: Codec::Snappy.to_string(),
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TxSection {
    pub rpc_url: Option<String>,
    pub nonce: Option<u64>,
    pub to: String,
    pub value_ether: String,
    pub gas_limit: u64,
    // toml integers are i64; widened to u128 in `resolve`
    pub max_fee_per_gas: u64,
    pub max_priority_fee_per_gas: u64,
    pub chain_id: u64,
    pub tx_count: u64,
}

impl Default for TxSection {
    fn default() -> Self {
        Self {
            rpc_url: None,
            nonce: None,
            to: DEFAULT_TO.to_string(),
            value_ether: "0".to_string(),
            gas_limit: DEFAULT_GAS_LIMIT,
            max_fee_per_gas: DEFAULT_MAX_FEE_PER_GAS,
            max_priority_fee_per_gas: DEFAULT_MAX_PRIORITY_FEE_PER_GAS,
            chain_id: DEFAULT_CHAIN_ID,
            tx_count: DEFAULT_TX_COUNT,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IoSection {
    pub key_file: PathBuf,
    pub out: PathBuf,
}

impl Default for IoSection {
    fn default() -> Self {
        Self {
            key_file: PathBuf::from(DEFAULT_KEY_FILE),
            out: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub filter: Option<String>,
    pub json: bool,
}

/// Fully validated settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunPlan {
    pub grind: GrindConfig,
    pub seed: Option<u64>,
    pub rpc_url: Option<Url>,
    pub nonce: Option<u64>,
    pub to: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
    pub chain_id: u64,
    pub tx_count: u64,
    pub key_file: PathBuf,
    pub out: PathBuf,
}

impl Config {
    /// Defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Flags set on the command line win over file values.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        let grind = &mut self.grind;
        override_with(&mut grind.calldata_size, cli.calldata_size);
        override_with(&mut grind.zero_rate, cli.zero_rate);
        override_with(&mut grind.rounds, cli.rounds);
        override_with(&mut grind.trials, cli.trials);
        override_with(&mut grind.codec, cli.codec.clone());
        if cli.seed.is_some() {
            grind.seed = cli.seed;
        }

        let tx = &mut self.tx;
        if cli.rpc_url.is_some() {
            tx.rpc_url = cli.rpc_url.clone();
        }
        if cli.nonce.is_some() {
            tx.nonce = cli.nonce;
        }
        override_with(&mut tx.to, cli.to.clone());
        override_with(&mut tx.value_ether, cli.value_ether.clone());
        override_with(&mut tx.gas_limit, cli.gas_limit);
        override_with(&mut tx.max_fee_per_gas, cli.max_fee_per_gas);
        override_with(&mut tx.max_priority_fee_per_gas, cli.max_priority_fee_per_gas);
        override_with(&mut tx.chain_id, cli.chain_id);
        override_with(&mut tx.tx_count, cli.tx_count);

        override_with(&mut self.io.key_file, cli.key_file.clone());
        override_with(&mut self.io.out, cli.out.clone());

        if cli.log_filter.is_some() {
            self.log.filter = cli.log_filter.clone();
        }
        self.log.json |= cli.log_json;
        self
    }

    pub fn resolve(&self) -> anyhow::Result<RunPlan> {
        let budget = CalldataBudget::new(self.grind.calldata_size, self.grind.zero_rate)
            .context("invalid calldata budget")?;
        let codec: Codec = self.grind.codec.parse()?;
        if self.grind.rounds == 0 || self.grind.trials == 0 {
            bail!("rounds and trials must both be at least 1");
        }
        if self.tx.tx_count == 0 {
            bail!("tx_count must be at least 1");
        }

        let rpc_url = self
            .tx
            .rpc_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Url::parse(value).with_context(|| format!("invalid rpc url: {value}")))
            .transpose()?;
        if rpc_url.is_none() && self.tx.nonce.is_none() {
            bail!("no nonce source: set --nonce or --rpc-url");
        }

        let to: Address = self
            .tx
            .to
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid recipient address: {}", self.tx.to))?;
        let value = parse_ether(&self.tx.value_ether)
            .map_err(|err| anyhow!("invalid value {}: {err}", self.tx.value_ether))?;

        Ok(RunPlan {
            grind: GrindConfig {
                budget,
                rounds: self.grind.rounds,
                trials_per_round: self.grind.trials,
                codec,
            },
            seed: self.grind.seed,
            rpc_url,
            nonce: self.tx.nonce,
            to,
            value,
            gas_limit: self.tx.gas_limit,
            max_fee_per_gas: u128::from(self.tx.max_fee_per_gas),
            max_priority_fee_per_gas: u128::from(self.tx.max_priority_fee_per_gas),
            chain_id: self.tx.chain_id,
            tx_count: self.tx.tx_count,
            key_file: self.io.key_file.clone(),
            out: self.io.out.clone(),
        })
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_KEY_FILE};
    use crate::cli::Cli;
    use clap::Parser;
    use grind_core::Codec;
    use grind_tx::constants::DEFAULT_TO;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse("").expect("parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.io.key_file.to_str(), Some(DEFAULT_KEY_FILE));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
[grind]
rounds = 3
codec = "zstd:5"

[tx]
nonce = 12
max_fee_per_gas = 2000000000
"#,
        )
        .expect("parse");
        assert_eq!(config.grind.rounds, 3);
        assert_eq!(config.grind.trials, 1);
        assert_eq!(config.tx.nonce, Some(12));
        assert_eq!(config.tx.max_fee_per_gas, 2_000_000_000);

        let plan = config.resolve().expect("resolve");
        assert_eq!(plan.grind.codec, Codec::Zstd { level: 5 });
        assert_eq!(plan.to, DEFAULT_TO);
        assert_eq!(plan.grind.budget.zeros, 1_232_500);
        assert_eq!(plan.max_fee_per_gas, 2_000_000_000u128);
        assert_eq!(plan.max_priority_fee_per_gas, 40u128);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[grind]\nrouns = 3\n").is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let config = Config::parse("[grind]\nrounds = 3\n[tx]\nchain_id = 1\n").expect("parse");
        let cli = Cli::try_parse_from([
            "calldata-grind",
            "--rounds",
            "5",
            "--nonce",
            "4",
            "--out",
            "custom.txt",
            "--log-json",
        ])
        .expect("cli");
        let config = config.with_cli(&cli);
        assert_eq!(config.grind.rounds, 5);
        assert_eq!(config.tx.chain_id, 1);
        assert_eq!(config.tx.nonce, Some(4));
        assert_eq!(config.io.out.to_str(), Some("custom.txt"));
        assert!(config.log.json);
    }

    #[test]
    fn missing_nonce_source_is_an_error() {
        let err = Config::default().resolve().expect_err("no nonce source");
        assert!(err.to_string().contains("no nonce source"));
    }

    #[test]
    fn rpc_url_alone_is_a_nonce_source() {
        let mut config = Config::default();
        config.tx.rpc_url = Some("http://127.0.0.1:8545".to_string());
        let plan = config.resolve().expect("resolve");
        assert!(plan.rpc_url.is_some());
        assert_eq!(plan.nonce, None);
    }

    #[test]
    fn invalid_values_are_reported() {
        let mut config = Config::default();
        config.tx.nonce = Some(0);
        config.grind.zero_rate = 2.0;
        assert!(config.resolve().is_err());

        let mut config = Config::default();
        config.tx.nonce = Some(0);
        config.tx.to = "0xdead".to_string();
        assert!(config.resolve().is_err());

        let mut config = Config::default();
        config.tx.nonce = Some(0);
        config.grind.codec = "brotli".to_string();
        assert!(config.resolve().is_err());
    }
}
