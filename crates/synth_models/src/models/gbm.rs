//! Geometric Brownian Motion (GBM) model.
//!
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//!
//! ## Discretisation
//!
//! A plain Euler-Maruyama step, not the log-space exact solution:
//! ```text
//! S(t+dt) = S(t) + mu*S(t)*dt + sigma*S(t)*sqrt(dt)*Z,   Z ~ N(0, 1)
//! ```
//! The step is additive, so a large negative shock can push the price below
//! zero. That is kept as is.

use synth_core::rng::{RandomSampler, SynthRng};

use super::pricing::{PriceState, PricingModel};
use crate::error::{ensure_finite, ModelError};

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Drift `mu` per unit time (any sign)
    pub drift: f64,
    /// Volatility `sigma` per square-root unit time (conventionally >= 0)
    pub volatility: f64,
}

impl GbmParams {
    /// Create new GBM parameters.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidParameter` if either value is non-finite.
    pub fn new(drift: f64, volatility: f64) -> Result<Self, ModelError> {
        Ok(Self {
            drift: ensure_finite("drift", drift)?,
            volatility: ensure_finite("volatility", volatility)?,
        })
    }

    /// One Euler-Maruyama step from `current` given the normal draw `z`.
    #[inline]
    pub fn evolve_step(&self, current: f64, dt: f64, z: f64) -> f64 {
        current + self.drift * current * dt + self.volatility * current * dt.sqrt() * z
    }
}

/// Geometric Brownian Motion price process.
///
/// # Example
///
/// ```
/// use synth_core::rng::ScriptedSampler;
/// use synth_models::models::{GbmModel, GbmParams, PricingModel};
///
/// let params = GbmParams::new(0.01, 0.2).unwrap();
/// let mut gbm = GbmModel::new(100.0, 0.001, params, ScriptedSampler::constant(0.0, 0.0)).unwrap();
/// assert!((gbm.advance() - 100.001).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct GbmModel<S = SynthRng> {
    state: PriceState,
    params: GbmParams,
    sampler: S,
}

impl<S: RandomSampler> GbmModel<S> {
    /// Create a new GBM model owning `sampler`.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidParameter` if `initial_price` is non-finite
    /// or `time_step` is not positive.
    pub fn new(
        initial_price: f64,
        time_step: f64,
        params: GbmParams,
        sampler: S,
    ) -> Result<Self, ModelError> {
        let state = PriceState::new(initial_price, time_step)?;
        tracing::debug!(
            initial_price,
            time_step,
            drift = params.drift,
            volatility = params.volatility,
            "GBM model constructed"
        );
        Ok(Self {
            state,
            params,
            sampler,
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &GbmParams {
        &self.params
    }

    /// The owned sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

impl<S: RandomSampler> PricingModel for GbmModel<S> {
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
        "GBM"
    }
}
