//! # synth_models: Stochastic Pricing Models
//!
//! Single-asset price processes that each advance one private price by one
//! fixed time step per call:
//!
//! - [`models::GbmModel`]: geometric Brownian motion
//! - [`models::OuModel`]: Ornstein-Uhlenbeck mean reversion
//! - [`models::JumpDiffusionModel`]: GBM diffusion with Bernoulli-timed lognormal jumps
//!
//! All variants implement [`models::PricingModel`] and are gathered into the
//! static-dispatch [`models::PricingModelEnum`].
//!
//! ## Numerical characteristics
//!
//! No price floor is enforced. Extreme parameters can drive a price negative,
//! to infinity or to NaN; such values propagate under IEEE-754 rules and are
//! never clamped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod models;

pub use error::ModelError;
