//! Deterministic sampler replaying caller-supplied draws.

use super::sampler::RandomSampler;

/// Sampler that cycles through fixed sequences of draws.
///
/// Normal and uniform draws come from separate sequences. Uniform values are
/// scripted on the unit interval and mapped onto `[lo, hi)` at draw time;
/// [`sample_normal`](RandomSampler::sample_normal) scales the next scripted
/// standard normal value. An empty sequence always yields `0.0`.
///
/// # Examples
///
/// ```rust
/// use synth_core::rng::{RandomSampler, ScriptedSampler};
///
/// let mut sampler = ScriptedSampler::new(vec![1.0, -1.0], vec![0.25]);
/// assert_eq!(sampler.sample_standard_normal(), 1.0);
/// assert_eq!(sampler.sample_standard_normal(), -1.0);
/// assert_eq!(sampler.sample_standard_normal(), 1.0);
/// assert_eq!(sampler.sample_uniform(0.0, 2.0), 0.5);
/// assert_eq!(sampler.draws(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSampler {
    normals: Vec<f64>,
    uniforms: Vec<f64>,
    normal_cursor: usize,
    uniform_cursor: usize,
    draws: usize,
}

impl ScriptedSampler {
    /// Creates a sampler cycling through the given draw sequences.
    pub fn new(normals: Vec<f64>, uniforms: Vec<f64>) -> Self {
        Self {
            normals,
            uniforms,
            ..Self::default()
        }
    }

    /// Creates a sampler returning the same normal and unit-uniform draw forever.
    pub fn constant(normal: f64, uniform: f64) -> Self {
        Self::new(vec![normal], vec![uniform])
    }

    /// Total number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    fn next_from(values: &[f64], cursor: &mut usize) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let value = values[*cursor % values.len()];
        *cursor += 1;
        value
    }
}

impl RandomSampler for ScriptedSampler {
    fn sample_standard_normal(&mut self) -> f64 {
        self.draws += 1;
        Self::next_from(&self.normals, &mut self.normal_cursor)
    }

    fn sample_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.draws += 1;
        let u = Self::next_from(&self.uniforms, &mut self.uniform_cursor);
        lo + (hi - lo) * u
    }
}
