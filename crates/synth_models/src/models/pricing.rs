//! PricingModel trait and the shared running-price state.

use crate::error::{ensure_finite, ModelError};

/// A stateful price process advanced one fixed time step at a time.
///
/// Implementors own their running price and their random source, so two
/// models never share draws. Calling [`advance`](Self::advance) is the only
/// way to move a model forward; there is no reset.
pub trait PricingModel {
    /// Advances the internal price by one time step and returns the new price.
    fn advance(&mut self) -> f64;

    /// Current price, without stepping.
    fn current_price(&self) -> f64;

    /// Fixed simulated duration of one step.
    fn time_step(&self) -> f64;

    /// Model name for logging and debugging.
    fn model_name(&self) -> &'static str;
}

/// Running price and fixed time step common to every model.
///
/// `current` is deliberately unbounded: it may become negative or non-finite
/// as the model evolves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceState {
    current: f64,
    time_step: f64,
}

impl PriceState {
    /// Creates a validated state.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidParameter` if `initial_price` is NaN or
    /// infinite, or if `time_step` is not a finite positive number.
    pub fn new(initial_price: f64, time_step: f64) -> Result<Self, ModelError> {
        let current = ensure_finite("initial_price", initial_price)?;
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ModelError::invalid(
                "time_step",
                format!("must be finite and positive, got {}", time_step),
            ));
        }
        Ok(Self { current, time_step })
    }

    /// Current price.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Time step `dt`.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Replaces the running price and returns it.
    #[inline]
    pub(crate) fn store(&mut self, next: f64) -> f64 {
        self.current = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_state_valid() {
        let state = PriceState::new(100.0, 0.001).unwrap();
        assert_eq!(state.current(), 100.0);
        assert_eq!(state.time_step(), 0.001);
    }

    #[test]
    fn test_price_state_allows_non_positive_price() {
        assert!(PriceState::new(0.0, 0.001).is_ok());
        assert!(PriceState::new(-5.0, 0.001).is_ok());
    }

    #[test]
    fn test_price_state_rejects_non_finite_price() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = PriceState::new(bad, 0.001).unwrap_err();
            assert!(matches!(
                err,
                ModelError::InvalidParameter {
                    name: "initial_price",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_price_state_rejects_bad_time_step() {
        for bad in [0.0, -0.001, f64::NAN, f64::INFINITY] {
            let err = PriceState::new(100.0, bad).unwrap_err();
            assert!(matches!(
                err,
                ModelError::InvalidParameter {
                    name: "time_step",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_store_replaces_current() {
        let mut state = PriceState::new(100.0, 0.01).unwrap();
        assert_eq!(state.store(101.5), 101.5);
        assert_eq!(state.current(), 101.5);
        assert_eq!(state.time_step(), 0.01);
    }
}
