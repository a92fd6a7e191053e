//! Draw interface shared by all samplers.

/// Source of random draws for a single pricing model.
///
/// Each call consumes exactly one unit of randomness and advances the
/// sampler's internal state. There are no error conditions.
pub trait RandomSampler {
    /// Draws one value from the standard normal distribution N(0, 1).
    fn sample_standard_normal(&mut self) -> f64;

    /// Draws one value uniformly from `[lo, hi)`.
    fn sample_uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Draws one value from N(mean, std_dev²).
    ///
    /// Used for log jump sizes. The default maps a standard normal draw,
    /// so it consumes the same single unit of randomness.
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.sample_standard_normal()
    }
}

impl<S: RandomSampler + ?Sized> RandomSampler for &mut S {
    #[inline]
    fn sample_standard_normal(&mut self) -> f64 {
        (**self).sample_standard_normal()
    }

    #[inline]
    fn sample_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).sample_uniform(lo, hi)
    }

    #[inline]
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).sample_normal(mean, std_dev)
    }
}
