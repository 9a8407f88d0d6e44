//! where: calldata-grind entry; what: parse flags, load config, run once; why: one-shot operator tool

use anyhow::Context;
use clap::Parser;
use grind_cli::{logging, run, Cli, Config};

#[tokio::main]
async fn main() {
    if let Err(err) = real_main().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_cli(&cli);
    logging::init_tracing(config.log.filter.as_deref(), config.log.json);

    let plan = config.resolve()?;
    let report = run(&plan).await?;
    println!("{}", report.out.display());
    Ok(())
}
