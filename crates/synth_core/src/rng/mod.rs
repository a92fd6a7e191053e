//! # Random Number Generation
//!
//! Every pricing model owns exactly one sampler, injected at construction.
//! Nothing in this workspace seeds itself; the outermost assembly point
//! decides between a fixed seed and process entropy.
//!
//! ## Module Structure
//!
//! - [`sampler`]: the [`RandomSampler`] trait
//! - [`prng`]: [`SynthRng`], the production sampler
//! - [`scripted`]: [`ScriptedSampler`], a deterministic replay sampler
//!
//! ## Reproducibility
//!
//! ```rust
//! use synth_core::rng::{RandomSampler, SynthRng};
//!
//! let mut a = SynthRng::from_seed(12345);
//! let mut b = SynthRng::from_seed(12345);
//! assert_eq!(a.sample_standard_normal(), b.sample_standard_normal());
//! ```

mod prng;
mod sampler;
mod scripted;

pub use prng::SynthRng;
pub use sampler::RandomSampler;
pub use scripted::ScriptedSampler;
