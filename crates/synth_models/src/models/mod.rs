//! Stochastic price models.
//!
//! - [`PricingModel`]: the single `advance` capability shared by all models
//! - [`PriceState`]: validated running price and time step
//! - [`GbmModel`], [`OuModel`], [`JumpDiffusionModel`]: the model variants
//! - [`PricingModelEnum`]: static dispatch over the variants
//!
//! ## Example
//!
//! ```
//! use synth_core::rng::SynthRng;
//! use synth_models::models::{GbmModel, GbmParams, PricingModel, PricingModelEnum};
//!
//! let params = GbmParams::new(0.05, 0.2).unwrap();
//! let gbm = GbmModel::new(100.0, 1.0 / 252.0, params, SynthRng::from_seed(1)).unwrap();
//! let mut model = PricingModelEnum::from(gbm);
//!
//! let next = model.advance();
//! assert_eq!(model.current_price(), next);
//! assert_eq!(model.model_name(), "GBM");
//! ```

pub mod gbm;
pub mod jump_diffusion;
pub mod model_enum;
pub mod ou;
pub mod pricing;

pub use gbm::{GbmModel, GbmParams};
pub use jump_diffusion::{JumpDiffusionModel, JumpDiffusionParams};
pub use model_enum::{ModelKind, PricingModelEnum};
pub use ou::{OuModel, OuParams};
pub use pricing::{PriceState, PricingModel};
