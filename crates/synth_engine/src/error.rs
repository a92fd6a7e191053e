//! Error types for the engine layer.

use synth_models::ModelError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by [`Ensemble`](crate::ensemble::Ensemble).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnsembleError {
    /// A price was requested before any model was registered.
    #[error("Ensemble has no models; add at least one before stepping")]
    Empty,
}

/// Top-level engine error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Model construction error
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Ensemble error
    #[error("Ensemble error: {0}")]
    Ensemble(#[from] EnsembleError),

    /// Sink IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
