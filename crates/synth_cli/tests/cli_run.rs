//! Runs the CLI pipeline against temporary scenario and output files.

use std::io::Write;

use clap::Parser;
use synth_cli::{execute, Args};
use synth_engine::config::{build_config, CliOverrides};

fn read_series(path: &std::path::Path) -> Vec<f64> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect()
}

#[test]
fn writes_one_value_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("synthetic_prices.txt");

    let args = Args::parse_from([
        "synth-prices",
        "--steps",
        "25",
        "--seed",
        "3",
        "--output",
        output.to_str().unwrap(),
    ]);
    let config = build_config(&CliOverrides::from(args)).unwrap();
    let report = execute(&config).unwrap();

    assert_eq!(report.steps, 25);
    let values = read_series(&output);
    assert_eq!(values.len(), 25);
    let summary = report.summary.unwrap();
    assert_eq!(summary.count, 25);
    assert_eq!(summary.first, values[0]);
    assert_eq!(summary.last, values[24]);
    assert_eq!(summary.min, values.iter().copied().fold(f64::INFINITY, f64::min));
    assert_eq!(summary.max, values.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    assert!((summary.mean - mean).abs() < 1e-9 * mean.abs());
}

#[test]
fn seeded_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut scenario = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        scenario,
        r#"
steps = 40
seed = 8

[[models]]
kind = "ou"
weight = 1.0
initial_price = 10.0
time_step = 0.01
long_run_mean = 12.0
mean_reversion_rate = 3.0
volatility = 0.5
"#
    )
    .unwrap();

    let run = |name: &str| {
        let output = dir.path().join(name);
        let cli = CliOverrides {
            config_file: Some(scenario.path().to_path_buf()),
            output: Some(output.clone()),
            ..Default::default()
        };
        execute(&build_config(&cli).unwrap()).unwrap();
        read_series(&output)
    };

    let a = run("a.txt");
    let b = run("b.txt");
    assert_eq!(a.len(), 40);
    assert_eq!(a, b);
}

#[test]
fn zero_steps_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty.txt");
    let cli = CliOverrides {
        steps: Some(0),
        output: Some(output.clone()),
        ..Default::default()
    };
    let report = execute(&build_config(&cli).unwrap()).unwrap();
    assert_eq!(report.steps, 0);
    assert!(report.summary.is_none());
    assert!(std::fs::read_to_string(&output).unwrap().is_empty());
}

#[test]
fn invalid_model_aborts_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.txt");
    let mut scenario = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        scenario,
        r#"
[[models]]
kind = "gbm"
weight = 1.0
initial_price = 100.0
time_step = 0.0
drift = 0.05
volatility = 0.2
"#
    )
    .unwrap();

    let cli = CliOverrides {
        config_file: Some(scenario.path().to_path_buf()),
        output: Some(output.clone()),
        ..Default::default()
    };
    assert!(execute(&build_config(&cli).unwrap()).is_err());
    assert!(!output.exists());
}
