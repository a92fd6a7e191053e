//! Scenario configuration management.
//!
//! A scenario is loaded from a TOML file, then overridden by environment
//! variables, then by CLI arguments. [`ScenarioConfig::default`] is the
//! reference scenario: a jump-diffusion and an OU model at equal weight,
//! 1000 steps.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use synth_core::rng::RandomSampler;
use synth_models::models::{
    GbmModel, GbmParams, JumpDiffusionModel, JumpDiffusionParams, ModelKind, OuModel, OuParams,
    PricingModelEnum,
};
use synth_models::ModelError;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::Level;

/// Environment variable overriding [`ScenarioConfig::steps`].
pub const ENV_STEPS: &str = "SYNTH_STEPS";
/// Environment variable overriding [`ScenarioConfig::seed`].
pub const ENV_SEED: &str = "SYNTH_SEED";
/// Environment variable overriding [`ScenarioConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "SYNTH_LOG_LEVEL";
/// Environment variable overriding [`ScenarioConfig::output`].
pub const ENV_OUTPUT: &str = "SYNTH_OUTPUT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// File could not be read
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// File is not valid TOML for a scenario
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Environment variable held an unusable value
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// Scenario is structurally invalid
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Verbosity of the run's diagnostics.
///
/// Parsed case-insensitively by `tracing`, so `"warn"`, `"WARN"` and the
/// numeric forms `1` (error) to `5` (trace) are all accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct LogLevel(Level);

impl LogLevel {
    /// Per-step tracing
    pub const TRACE: Self = Self(Level::TRACE);
    /// Model construction and seeding
    pub const DEBUG: Self = Self(Level::DEBUG);
    /// Run start and end
    pub const INFO: Self = Self(Level::INFO);
    /// Numerical warnings only
    pub const WARN: Self = Self(Level::WARN);
    /// Errors only
    pub const ERROR: Self = Self(Level::ERROR);

    /// Filter admitting this level and everything more severe.
    pub fn filter(&self) -> LevelFilter {
        LevelFilter::from_level(self.0)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Level>()
            .map(Self)
            .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

/// Model-specific parameters, tagged by `kind` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Geometric Brownian Motion
    Gbm {
        /// Drift
        drift: f64,
        /// Volatility
        volatility: f64,
    },
    /// Ornstein-Uhlenbeck
    Ou {
        /// Long-run mean
        long_run_mean: f64,
        /// Mean reversion rate
        mean_reversion_rate: f64,
        /// Volatility
        volatility: f64,
    },
    /// Jump-diffusion
    JumpDiffusion {
        /// Drift
        drift: f64,
        /// Volatility
        volatility: f64,
        /// Expected jumps per unit time
        jump_intensity: f64,
        /// Mean log jump size
        jump_mean: f64,
        /// Log jump size standard deviation
        jump_std_dev: f64,
    },
}

impl ModelSpec {
    /// Which model this spec builds.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelSpec::Gbm { .. } => ModelKind::Gbm,
            ModelSpec::Ou { .. } => ModelKind::Ou,
            ModelSpec::JumpDiffusion { .. } => ModelKind::JumpDiffusion,
        }
    }
}

/// One `[[models]]` entry: weight, common state and model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ModelEntry {
    /// Ensemble weight
    pub weight: f64,
    /// Starting price
    pub initial_price: f64,
    /// Time step per advance
    pub time_step: f64,
    /// Fixed seed for this model, overriding the derived one
    #[serde(default)]
    pub seed: Option<u64>,
    /// Model parameters
    #[serde(flatten)]
    pub spec: ModelSpec,
}

impl ModelEntry {
    /// Builds the model around `sampler`.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidParameter` for any rejected parameter.
    pub fn build<S: RandomSampler>(&self, sampler: S) -> Result<PricingModelEnum<S>, ModelError> {
        let model: PricingModelEnum<S> = match self.spec {
            ModelSpec::Gbm { drift, volatility } => GbmModel::new(
                self.initial_price,
                self.time_step,
                GbmParams::new(drift, volatility)?,
                sampler,
            )?
            .into(),
            ModelSpec::Ou {
                long_run_mean,
                mean_reversion_rate,
                volatility,
            } => OuModel::new(
                self.initial_price,
                self.time_step,
                OuParams::new(long_run_mean, mean_reversion_rate, volatility)?,
                sampler,
            )?
            .into(),
            ModelSpec::JumpDiffusion {
                drift,
                volatility,
                jump_intensity,
                jump_mean,
                jump_std_dev,
            } => JumpDiffusionModel::new(
                self.initial_price,
                self.time_step,
                JumpDiffusionParams::new(
                    drift,
                    volatility,
                    jump_intensity,
                    jump_mean,
                    jump_std_dev,
                )?,
                sampler,
            )?
            .into(),
        };
        Ok(model)
    }
}

/// Scenario configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of steps to simulate
    pub steps: usize,
    /// Master seed; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Log level
    pub log_level: LogLevel,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    /// Ensemble members in order
    pub models: Vec<ModelEntry>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            seed: None,
            log_level: LogLevel::INFO,
            output: None,
            models: vec![
                ModelEntry {
                    weight: 0.5,
                    initial_price: 100.0,
                    time_step: 0.001,
                    seed: None,
                    spec: ModelSpec::JumpDiffusion {
                        drift: 0.01,
                        volatility: 0.01,
                        jump_intensity: 0.05,
                        jump_mean: 0.1,
                        jump_std_dev: 0.01,
                    },
                },
                ModelEntry {
                    weight: 0.5,
                    initial_price: 100.0,
                    time_step: 0.001,
                    seed: None,
                    spec: ModelSpec::Ou {
                        long_run_mean: 0.01,
                        mean_reversion_rate: 0.01,
                        volatility: 0.01,
                    },
                },
            ],
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(steps) = lookup(ENV_STEPS) {
            self.steps = steps.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a step count", ENV_STEPS, steps))
            })?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            let parsed = seed.trim().parse::<u64>().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not a u64 seed", ENV_SEED, seed))
            })?;
            self.seed = Some(parsed);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = Some(PathBuf::from(output));
        }
        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(steps) = cli.steps {
            self.steps = steps;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        Ok(())
    }

    /// Validate the scenario structure.
    ///
    /// Model parameters are checked later by the model constructors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.models.is_empty() {
            errors.push("at least one [[models]] entry is required".to_string());
        }
        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                errors.push("output cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Scenario file path
    pub config_file: Option<PathBuf>,
    /// Step count override
    pub steps: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output path override
    pub output: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Scenario file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<ScenarioConfig, ConfigError> {
    let config = match &cli.config_file {
        Some(path) => ScenarioConfig::from_file(path)?,
        None => ScenarioConfig::default(),
    };

    let mut config = config.with_env_override()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
