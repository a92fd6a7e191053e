//! # synth_core: Random Sampling Foundation
//!
//! Bottom layer of the synthetic price engine. It owns the only source of
//! randomness in the workspace:
//!
//! - [`rng::RandomSampler`]: the draw interface every pricing model consumes
//! - [`rng::SynthRng`]: seeded PRNG wrapper around `rand::rngs::StdRng`
//! - [`rng::ScriptedSampler`]: replays fixed draw sequences
//!
//! ## Usage
//!
//! ```rust
//! use synth_core::rng::{RandomSampler, SynthRng};
//!
//! let mut rng = SynthRng::from_seed(7);
//! let z = rng.sample_standard_normal();
//! let u = rng.sample_uniform(0.0, 1.0);
//! assert!(z.is_finite());
//! assert!((0.0..1.0).contains(&u));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rng;
