//! synth-prices entry point.

use anyhow::Result;
use clap::Parser;
use synth_cli::{execute, init_tracing, Args};
use synth_engine::config::{build_config, CliOverrides};

fn main() -> Result<()> {
    let args = Args::parse();
    let cli: CliOverrides = args.into();
    let config = build_config(&cli)?;

    init_tracing(config.log_level);

    tracing::info!(
        steps = config.steps,
        models = config.models.len(),
        seed = ?config.seed,
        output = ?config.output,
        "Scenario configuration loaded"
    );

    let report = execute(&config)?;
    tracing::info!(steps = report.steps, "Done");

    Ok(())
}
