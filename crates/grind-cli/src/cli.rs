//! where: calldata-grind flags; what: clap definitions mirroring the config file; why: every config key can be set per run

use clap::Parser;
use std::path::PathBuf;

/// Grind hard-to-compress calldata and sign it into raw EIP-1559 transactions.
#[derive(Parser, Debug, Default)]
#[command(name = "calldata-grind", version)]
pub struct Cli {
    /// TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File holding the hex private key
    #[arg(long)]
    pub key_file: Option<PathBuf>,

    /// Where the signed raw transaction hex is written
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// JSON-RPC endpoint for nonce and balance lookups
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Use this nonce instead of asking the node
    #[arg(long)]
    pub nonce: Option<u64>,

    #[arg(long)]
    pub to: Option<String>,

    /// Transfer value in ether
    #[arg(long)]
    pub value_ether: Option<String>,

    #[arg(long)]
    pub gas_limit: Option<u64>,

    /// Max fee per gas in wei
    #[arg(long)]
    pub max_fee_per_gas: Option<u64>,

    /// Max priority fee per gas in wei
    #[arg(long)]
    pub max_priority_fee_per_gas: Option<u64>,

    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Number of transactions signed with consecutive nonces
    #[arg(long)]
    pub tx_count: Option<u64>,

    /// Outer grind rounds
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Generate-and-compress trials per round
    #[arg(long)]
    pub trials: Option<usize>,

    /// Weighted calldata cap
    #[arg(long)]
    pub calldata_size: Option<u64>,

    /// Share of the cap spent on zero bytes
    #[arg(long)]
    pub zero_rate: Option<f64>,

    /// snappy, zstd or zstd:<level>
    #[arg(long)]
    pub codec: Option<String>,

    /// Seed for a reproducible grind
    #[arg(long)]
    pub seed: Option<u64>,

    /// tracing filter directive, e.g. "info,grind_core=debug"
    #[arg(long, env = "LOG_FILTER")]
    pub log_filter: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
