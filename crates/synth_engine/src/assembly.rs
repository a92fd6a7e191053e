//! Turns a [`ScenarioConfig`] into a ready-to-run [`Ensemble`].
//!
//! This is the only place in the workspace that decides how samplers are
//! seeded:
//!
//! - With a master `seed`, a master [`SynthRng`] hands out one child seed per
//!   model in order, so every model has its own reproducible stream.
//! - Without one, each model gets a fresh entropy seed.
//! - A per-model `seed` always wins. The master still hands out a child seed
//!   for that slot, so the streams of the other models do not shift.

use synth_core::rng::SynthRng;

use crate::config::ScenarioConfig;
use crate::ensemble::Ensemble;
use crate::error::EngineError;

/// Builds every configured model and registers it with its weight.
///
/// # Errors
///
/// Returns `EngineError::Model` for the first model whose parameters are
/// rejected. Nothing is simulated in that case.
pub fn build_ensemble(config: &ScenarioConfig) -> Result<Ensemble, EngineError> {
    let mut master = config.seed.map(SynthRng::from_seed);
    let mut ensemble = Ensemble::new();

    for (index, entry) in config.models.iter().enumerate() {
        let derived = master.as_mut().map(SynthRng::next_seed);
        let sampler = match entry.seed.or(derived) {
            Some(seed) => SynthRng::from_seed(seed),
            None => SynthRng::from_entropy(),
        };
        tracing::debug!(
            index,
            kind = %entry.spec.kind(),
            seed = sampler.seed(),
            "Seeding model"
        );

        let model = entry.build(sampler)?;
        ensemble.add_model(model, entry.weight);
    }

    Ok(ensemble)
}
