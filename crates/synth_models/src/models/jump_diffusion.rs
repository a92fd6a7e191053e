//! Jump-diffusion model: GBM diffusion plus lognormal jumps.
//!
//! Each step draws, in this order:
//! 1. `U ~ Uniform[0, 1)` deciding whether a jump occurs,
//! 2. `Z ~ N(0, 1)` for the diffusion,
//! 3. `Y ~ N(jump_mean, jump_std_dev^2)` for the log jump size, only on a jump.
//!
//! ```text
//! jump = if U < lambda*dt { (exp(Y) - 1) * S(t) } else { 0 }
//! S(t+dt) = S(t) + mu*S(t)*dt + sigma*S(t)*sqrt(dt)*Z + jump
//! ```
//!
//! ## Jump arrival approximation
//!
//! `lambda * dt` is used directly as the per-step jump probability. This is a
//! Bernoulli approximation of Poisson arrivals: at most one jump per step, and
//! only accurate while `lambda * dt` is much smaller than one. Construction
//! logs a warning once the product reaches [`JUMP_PROBABILITY_WARN_THRESHOLD`].
//! The jump is sized against the pre-diffusion price `S(t)`.

use synth_core::rng::{RandomSampler, SynthRng};

use super::pricing::{PriceState, PricingModel};
use crate::error::{ensure_finite, ModelError};

/// Per-step jump probability above which the Bernoulli approximation is flagged.
pub const JUMP_PROBABILITY_WARN_THRESHOLD: f64 = 0.1;

/// Jump-diffusion model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpDiffusionParams {
    /// Diffusion drift `mu`
    pub drift: f64,
    /// Diffusion volatility `sigma`
    pub volatility: f64,
    /// Expected jumps per unit time `lambda`
    pub jump_intensity: f64,
    /// Mean of the log jump size
    pub jump_mean: f64,
    /// Standard deviation of the log jump size
    pub jump_std_dev: f64,
}

impl JumpDiffusionParams {
    /// Create new jump-diffusion parameters.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidParameter` if any value is non-finite.
    pub fn new(
        drift: f64,
        volatility: f64,
        jump_intensity: f64,
        jump_mean: f64,
        jump_std_dev: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            drift: ensure_finite("drift", drift)?,
            volatility: ensure_finite("volatility", volatility)?,
            jump_intensity: ensure_finite("jump_intensity", jump_intensity)?,
            jump_mean: ensure_finite("jump_mean", jump_mean)?,
            jump_std_dev: ensure_finite("jump_std_dev", jump_std_dev)?,
        })
    }

    /// Probability of a jump within one step of length `dt`.
    #[inline]
    pub fn jump_probability(&self, dt: f64) -> f64 {
        self.jump_intensity * dt
    }

    /// One step from `current` given the diffusion draw `z` and, when a jump
    /// fired, its log size.
    #[inline]
    pub fn evolve_step(&self, current: f64, dt: f64, z: f64, log_jump: Option<f64>) -> f64 {
        let jump = match log_jump {
            Some(y) => (y.exp() - 1.0) * current,
            None => 0.0,
        };
        current + self.drift * current * dt + self.volatility * current * dt.sqrt() * z + jump
    }
}

/// Jump-diffusion price process.
#[derive(Clone, Debug)]
pub struct JumpDiffusionModel<S = SynthRng> {
    state: PriceState,
    params: JumpDiffusionParams,
    sampler: S,
    jumps: usize,
}

impl<S: RandomSampler> JumpDiffusionModel<S> {
    /// Create a new jump-diffusion model owning `sampler`.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidParameter` if `initial_price` is non-finite
    /// or `time_step` is not positive.
    pub fn new(
        initial_price: f64,
        time_step: f64,
        params: JumpDiffusionParams,
        sampler: S,
    ) -> Result<Self, ModelError> {
        let state = PriceState::new(initial_price, time_step)?;
        let jump_probability = params.jump_probability(time_step);
        if jump_probability >= JUMP_PROBABILITY_WARN_THRESHOLD {
            tracing::warn!(
                jump_intensity = params.jump_intensity,
                time_step,
                jump_probability,
                "jump_intensity * time_step is not small; per-step Bernoulli jumps understate Poisson arrivals"
            );
        }
        tracing::debug!(
            initial_price,
            time_step,
            drift = params.drift,
            volatility = params.volatility,
            jump_intensity = params.jump_intensity,
            jump_mean = params.jump_mean,
            jump_std_dev = params.jump_std_dev,
            "Jump-diffusion model constructed"
        );
        Ok(Self {
            state,
            params,
            sampler,
            jumps: 0,
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &JumpDiffusionParams {
        &self.params
    }

    /// The owned sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Per-step jump probability `jump_intensity * time_step`.
    pub fn jump_probability(&self) -> f64 {
        self.params.jump_probability(self.state.time_step())
    }

    /// Number of steps on which a jump fired.
    pub fn jump_count(&self) -> usize {
        self.jumps
    }
}

impl<S: RandomSampler> PricingModel for JumpDiffusionModel<S> {
    fn advance(&mut self) -> f64 {
        let u = self.sampler.sample_uniform(0.0, 1.0);
        let z = self.sampler.sample_standard_normal();
        let log_jump = if u < self.jump_probability() {
            self.jumps += 1;
            Some(
                self.sampler
                    .sample_normal(self.params.jump_mean, self.params.jump_std_dev),
            )
        } else {
            None
        };
        let next =
            self.params
                .evolve_step(self.state.current(), self.state.time_step(), z, log_jump);
        self.state.store(next)
    }

    fn current_price(&self) -> f64 {
        self.state.current()
    }

    fn time_step(&self) -> f64 {
        self.state.time_step()
    }

    fn model_name(&self) -> &'static str {
        "JumpDiffusion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use synth_core::rng::ScriptedSampler;

    fn params(jump_mean: f64) -> JumpDiffusionParams {
        JumpDiffusionParams::new(0.01, 0.2, 0.05, jump_mean, 0.01).unwrap()
    }

    #[test]
    fn test_no_jump_when_uniform_above_threshold() {
        for z in [-3.0, 0.0, 0.7, 3.0] {
            let mut jd = JumpDiffusionModel::new(
                100.0,
                0.001,
                params(0.1),
                ScriptedSampler::constant(z, 1.0),
            )
            .unwrap();
            let gbm_step = 100.0 + 0.01 * 100.0 * 0.001 + 0.2 * 100.0 * 0.001_f64.sqrt() * z;
            assert_relative_eq!(jd.advance(), gbm_step, epsilon = 1e-12);
            assert_eq!(jd.jump_count(), 0);
            // U and Z only
            assert_eq!(jd.sampler().draws(), 2);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        // U == lambda*dt does not trigger
        let p = JumpDiffusionParams::new(0.0, 0.0, 1.0, 0.5, 0.0).unwrap();
        let mut jd =
            JumpDiffusionModel::new(100.0, 0.5, p, ScriptedSampler::constant(0.0, 0.5)).unwrap();
        assert_eq!(jd.advance(), 100.0);
        assert_eq!(jd.jump_count(), 0);
    }

    #[test]
    fn test_zero_log_jump_contributes_nothing() {
        // Z = 0 and jump_mean = 0 give Y = 0, J = 1
        let mut jd = JumpDiffusionModel::new(
            100.0,
            0.001,
            params(0.0),
            ScriptedSampler::constant(0.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(jd.advance(), 100.001, epsilon = 1e-12);
        assert_eq!(jd.jump_count(), 1);
        // U, Z and Y
        assert_eq!(jd.sampler().draws(), 3);
    }

    #[test]
    fn test_jump_sized_against_pre_diffusion_price() {
        let p = JumpDiffusionParams::new(0.01, 0.2, 0.05, 0.1, 0.01).unwrap();
        // normals: Z = 0.5, then Y = 0.1 + 0.01 * 2.0
        let sampler = ScriptedSampler::new(vec![0.5, 2.0], vec![0.0]);
        let mut jd = JumpDiffusionModel::new(100.0, 0.001, p, sampler).unwrap();

        let y: f64 = 0.1 + 0.01 * 2.0;
        let expected = 100.0
            + 0.01 * 100.0 * 0.001
            + 0.2 * 100.0 * 0.001_f64.sqrt() * 0.5
            + (y.exp() - 1.0) * 100.0;
        assert_relative_eq!(jd.advance(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_jump_probability() {
        let jd = JumpDiffusionModel::new(
            100.0,
            0.001,
            params(0.1),
            ScriptedSampler::default(),
        )
        .unwrap();
        assert_relative_eq!(jd.jump_probability(), 0.05 * 0.001, epsilon = 1e-18);
    }

    #[test]
    fn test_large_intensity_still_constructs() {
        let p = JumpDiffusionParams::new(0.0, 0.1, 200.0, 0.0, 0.1).unwrap();
        let jd = JumpDiffusionModel::new(100.0, 0.01, p, ScriptedSampler::default()).unwrap();
        assert_relative_eq!(jd.jump_probability(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_params_reject_non_finite() {
        assert!(JumpDiffusionParams::new(0.0, 0.1, f64::NAN, 0.0, 0.1).is_err());
        assert!(JumpDiffusionParams::new(0.0, 0.1, 1.0, f64::INFINITY, 0.1).is_err());
        assert!(JumpDiffusionParams::new(0.0, 0.1, 1.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_evolve_step_without_jump_equals_gbm_step() {
        let p = params(0.1);
        let gbm = crate::models::GbmParams::new(0.01, 0.2).unwrap();
        assert_eq!(
            p.evolve_step(100.0, 0.001, 1.2, None),
            gbm.evolve_step(100.0, 0.001, 1.2)
        );
    }
}
