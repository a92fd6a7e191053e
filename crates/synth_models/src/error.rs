//! Error types for model construction.

use thiserror::Error;

/// Construction-time model errors.
///
/// Models never fail once built; every check happens here, before the first
/// step is taken.
///
/// # Examples
/// ```
/// use synth_models::ModelError;
///
/// let err = ModelError::invalid("time_step", "must be positive, got 0");
/// assert_eq!(err.to_string(), "Invalid parameter 'time_step': must be positive, got 0");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A parameter is outside its admissible domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ModelError {
    /// Create an invalid parameter error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects NaN and infinite values.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}
