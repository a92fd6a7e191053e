//! Ornstein-Uhlenbeck (OU) mean-reverting model.
//!
//! ```text
//! dX = kappa * (theta - X) * dt + sigma * dW
//! ```
//! where:
//! - theta = long-run mean (same units as the price)
//! - kappa = mean reversion rate
//! - sigma = absolute volatility (not scaled by the price)
//!
//! Discretised with one Euler-Maruyama step per call. The process is
//! Gaussian, so it can cross zero.

use synth_core::rng::{RandomSampler, SynthRng};

use super::pricing::{PriceState, PricingModel};
use crate::error::{ensure_finite, ModelError};

/// OU model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OuParams {
    /// Long-run mean the price reverts to
    pub long_run_mean: f64,
    /// Mean reversion rate
    pub mean_reversion_rate: f64,
    /// Absolute volatility
    pub volatility: f64,
}

impl OuParams {
    /// Create new OU parameters.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidParameter` if any value is non-finite.
    pub fn new(
        long_run_mean: f64,
        mean_reversion_rate: f64,
        volatility: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            long_run_mean: ensure_finite("long_run_mean", long_run_mean)?,
            mean_reversion_rate: ensure_finite("mean_reversion_rate", mean_reversion_rate)?,
            volatility: ensure_finite("volatility", volatility)?,
        })
    }

    /// One Euler-Maruyama step from `current` given the normal draw `z`.
    #[inline]
    pub fn evolve_step(&self, current: f64, dt: f64, z: f64) -> f64 {
        current
            + self.mean_reversion_rate * (self.long_run_mean - current) * dt
            + self.volatility * dt.sqrt() * z
    }
}

/// Ornstein-Uhlenbeck price process.
#[derive(Clone, Debug)]
pub struct OuModel<S = SynthRng> {
    state: PriceState,
    params: OuParams,
    sampler: S,
}

impl<S: RandomSampler> OuModel<S> {
    /// Create a new OU model owning `sampler`.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidParameter` if `initial_price` is non-finite
    /// or `time_step` is not positive.
    pub fn new(
        initial_price: f64,
        time_step: f64,
        params: OuParams,
        sampler: S,
    ) -> Result<Self, ModelError> {
        let state = PriceState::new(initial_price, time_step)?;
        tracing::debug!(
            initial_price,
            time_step,
            long_run_mean = params.long_run_mean,
            mean_reversion_rate = params.mean_reversion_rate,
            volatility = params.volatility,
            "OU model constructed"
        );
        Ok(Self {
            state,
            params,
            sampler,
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &OuParams {
        &self.params
    }

    /// The owned sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

impl<S: RandomSampler> PricingModel for OuModel<S> {
    fn advance(&mut self) -> f64 {
        let z = self.sampler.sample_standard_normal();
        let next = self
            .params
            .evolve_step(self.state.current(), self.state.time_step(), z);
        self.state.store(next)
    }

    fn current_price(&self) -> f64 {
        self.state.current()
    }

    fn time_step(&self) -> f64 {
        self.state.time_step()
    }

    fn model_name(&self) -> &'static str {
        "OU"
    }
}
