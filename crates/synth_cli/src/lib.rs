//! Synthetic price generator CLI.
//!
//! Loads a scenario, builds the seeded ensemble and streams the series to a
//! file or stdout, one value per line. Logs go to stderr so stdout stays a
//! clean series.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use synth_engine::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Generate a synthetic price series from a weighted model ensemble
#[derive(Parser, Debug, Default)]
#[command(name = "synth-prices")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Scenario file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of steps to simulate
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Master seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        CliOverrides {
            config_file: args.config,
            steps: args.steps,
            seed: args.seed,
            output: args.output,
            log_level: args.log_level,
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Values written
    pub steps: usize,
    /// Where they went; `None` for stdout
    pub output: Option<PathBuf>,
    /// Statistics of the produced series
    pub summary: Option<SeriesSummary>,
}

/// Installs the stderr tracing subscriber; `RUST_LOG` wins over `log_level`.
pub fn init_tracing(log_level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.filter().into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Runs the scenario and writes the series.
pub fn execute(config: &ScenarioConfig) -> Result<RunReport> {
    let ensemble = build_ensemble(config).context("Failed to build ensemble")?;
    let mut driver = Driver::new(ensemble);

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let mut lines = LineSink::new(writer);
    let mut summary = SummarySink::new();
    driver
        .run_into(config.steps, (&mut lines, &mut summary))
        .context("Simulation failed")?;

    let steps = lines.written();
    let summary = summary.summary();
    if let Some(s) = &summary {
        tracing::info!(
            steps,
            first = s.first,
            last = s.last,
            min = s.min,
            max = s.max,
            mean = s.mean,
            non_finite = s.non_finite,
            "Series summary"
        );
    }

    Ok(RunReport {
        steps,
        output: config.output.clone(),
        summary,
    })
}
