//! # synth_engine: Ensemble and Series Driver
//!
//! Composes pricing models into one synthetic price series:
//!
//! ```text
//! Driver
//! └── Ensemble
//!     ├── (PricingModelEnum, weight)
//!     ├── (PricingModelEnum, weight)
//!     └── ...
//! ```
//!
//! - [`ensemble::Ensemble`]: weighted sum of every member's next price
//! - [`driver::Driver`]: runs the ensemble for `n` steps into a [`series::Series`] or a sink
//! - [`config::ScenarioConfig`]: TOML scenario with environment and CLI overrides
//! - [`assembly::build_ensemble`]: turns a scenario into seeded models
//!
//! ## Usage
//!
//! ```rust
//! use synth_engine::prelude::*;
//!
//! let config = ScenarioConfig {
//!     seed: Some(42),
//!     ..ScenarioConfig::default()
//! };
//! let mut driver = Driver::new(build_ensemble(&config).unwrap());
//! let series = driver.run(10).unwrap();
//! assert_eq!(series.len(), 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assembly;
pub mod config;
pub mod driver;
pub mod ensemble;
pub mod error;
pub mod series;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assembly::build_ensemble;
    pub use crate::config::{
        build_config, CliOverrides, LogLevel, ModelEntry, ModelSpec, ScenarioConfig,
    };
    pub use crate::driver::Driver;
    pub use crate::ensemble::Ensemble;
    pub use crate::error::{EngineError, EnsembleError};
    pub use crate::series::{LineSink, Series, SeriesSink, SeriesSummary, SummarySink};
}
