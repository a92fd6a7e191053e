//! Static dispatch enum for pricing models.
//!
//! `PricingModelEnum` gives the ensemble a homogeneous member type without a
//! vtable. Every variant owns a sampler of the same type `S`.
//!
//! ```
//! use synth_core::rng::SynthRng;
//! use synth_models::models::{ModelKind, OuModel, OuParams, PricingModelEnum};
//!
//! let params = OuParams::new(100.0, 0.5, 1.0).unwrap();
//! let model: PricingModelEnum =
//!     OuModel::new(100.0, 0.01, params, SynthRng::from_seed(3)).unwrap().into();
//! assert_eq!(model.kind(), ModelKind::Ou);
//! ```

use std::fmt;

use synth_core::rng::{RandomSampler, SynthRng};

use super::gbm::GbmModel;
use super::jump_diffusion::JumpDiffusionModel;
use super::ou::OuModel;
use super::pricing::PricingModel;

/// Discriminant of a [`PricingModelEnum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Geometric Brownian Motion
    Gbm,
    /// Ornstein-Uhlenbeck
    Ou,
    /// Jump-diffusion
    JumpDiffusion,
}

impl ModelKind {
    /// Lowercase identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Gbm => "gbm",
            ModelKind::Ou => "ou",
            ModelKind::JumpDiffusion => "jump_diffusion",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static dispatch enum over all pricing models.
#[derive(Clone, Debug)]
pub enum PricingModelEnum<S = SynthRng> {
    /// Geometric Brownian Motion model
    Gbm(GbmModel<S>),
    /// Ornstein-Uhlenbeck model
    Ou(OuModel<S>),
    /// Jump-diffusion model
    JumpDiffusion(JumpDiffusionModel<S>),
}

impl<S> PricingModelEnum<S> {
    /// Which variant this is.
    pub fn kind(&self) -> ModelKind {
        match self {
            PricingModelEnum::Gbm(_) => ModelKind::Gbm,
            PricingModelEnum::Ou(_) => ModelKind::Ou,
            PricingModelEnum::JumpDiffusion(_) => ModelKind::JumpDiffusion,
        }
    }
}

impl<S: RandomSampler> PricingModel for PricingModelEnum<S> {
    #[inline]
    fn advance(&mut self) -> f64 {
        match self {
            PricingModelEnum::Gbm(m) => m.advance(),
            PricingModelEnum::Ou(m) => m.advance(),
            PricingModelEnum::JumpDiffusion(m) => m.advance(),
        }
    }

    fn current_price(&self) -> f64 {
        match self {
            PricingModelEnum::Gbm(m) => m.current_price(),
            PricingModelEnum::Ou(m) => m.current_price(),
            PricingModelEnum::JumpDiffusion(m) => m.current_price(),
        }
    }

    fn time_step(&self) -> f64 {
        match self {
            PricingModelEnum::Gbm(m) => m.time_step(),
            PricingModelEnum::Ou(m) => m.time_step(),
            PricingModelEnum::JumpDiffusion(m) => m.time_step(),
        }
    }

    fn model_name(&self) -> &'static str {
        match self {
            PricingModelEnum::Gbm(m) => m.model_name(),
            PricingModelEnum::Ou(m) => m.model_name(),
            PricingModelEnum::JumpDiffusion(m) => m.model_name(),
        }
    }
}

impl<S> From<GbmModel<S>> for PricingModelEnum<S> {
    fn from(model: GbmModel<S>) -> Self {
        PricingModelEnum::Gbm(model)
    }
}

impl<S> From<OuModel<S>> for PricingModelEnum<S> {
    fn from(model: OuModel<S>) -> Self {
        PricingModelEnum::Ou(model)
    }
}

impl<S> From<JumpDiffusionModel<S>> for PricingModelEnum<S> {
    fn from(model: JumpDiffusionModel<S>) -> Self {
        PricingModelEnum::JumpDiffusion(model)
    }
}
