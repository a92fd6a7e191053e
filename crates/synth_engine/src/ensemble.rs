//! Weighted linear combination of pricing models.
//!
//! Every call to [`Ensemble::next_price`] advances *every* member by one step,
//! in registration order, and returns `sum(weight_i * price_i)`. Weights are
//! not normalised and may have any sign.

use synth_models::models::{PricingModel, PricingModelEnum};

use crate::error::EnsembleError;

/// One ensemble member.
#[derive(Clone, Debug)]
pub struct WeightedModel<M> {
    model: M,
    weight: f64,
}

impl<M> WeightedModel<M> {
    /// The member model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The member weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Ordered, append-only collection of `(model, weight)` pairs.
///
/// # Examples
///
/// ```rust
/// use synth_core::rng::SynthRng;
/// use synth_engine::ensemble::Ensemble;
/// use synth_models::models::{GbmModel, GbmParams};
///
/// let mut ensemble: Ensemble = Ensemble::new();
/// let gbm = GbmModel::new(100.0, 0.01, GbmParams::new(0.05, 0.2).unwrap(), SynthRng::from_seed(1)).unwrap();
/// ensemble.add_model(gbm.into(), 1.0);
///
/// let price = ensemble.next_price().unwrap();
/// assert!(price.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct Ensemble<M = PricingModelEnum> {
    members: Vec<WeightedModel<M>>,
}

impl<M> Default for Ensemble<M> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<M: PricingModel> Ensemble<M> {
    /// Creates an empty ensemble.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a model with its weight. The weight is not validated.
    pub fn add_model(&mut self, model: M, weight: f64) {
        tracing::debug!(
            index = self.members.len(),
            model = model.model_name(),
            weight,
            initial_price = model.current_price(),
            "Model added to ensemble"
        );
        self.members.push(WeightedModel { model, weight });
    }

    /// Builder-style [`add_model`](Self::add_model).
    pub fn with_model(mut self, model: M, weight: f64) -> Self {
        self.add_model(model, weight);
        self
    }

    /// Advances every model by one step and returns the weighted sum.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::Empty`] if no model has been added.
    pub fn next_price(&mut self) -> Result<f64, EnsembleError> {
        if self.members.is_empty() {
            return Err(EnsembleError::Empty);
        }
        Ok(self
            .members
            .iter_mut()
            .fold(0.0, |acc, member| acc + member.model.advance() * member.weight))
    }

    /// Weighted sum of the members' current prices, without stepping.
    pub fn current_price(&self) -> f64 {
        self.members
            .iter()
            .fold(0.0, |acc, member| acc + member.model.current_price() * member.weight)
    }
}

impl<M> Ensemble<M> {
    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no model has been registered.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.members.iter().map(|m| m.weight).sum()
    }

    /// Members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WeightedModel<M>> {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// Model returning a fixed price and counting its steps.
    struct Fixed {
        price: f64,
        steps: usize,
    }

    impl Fixed {
        fn new(price: f64) -> Self {
            Self { price, steps: 0 }
        }
    }

    impl PricingModel for Fixed {
        fn advance(&mut self) -> f64 {
            self.steps += 1;
            self.price
        }

        fn current_price(&self) -> f64 {
            self.price
        }

        fn time_step(&self) -> f64 {
            1.0
        }

        fn model_name(&self) -> &'static str {
            "Fixed"
        }
    }

    #[test]
    fn test_empty_ensemble_errors() {
        let mut ensemble: Ensemble<Fixed> = Ensemble::new();
        assert!(ensemble.is_empty());
        assert_eq!(ensemble.next_price(), Err(EnsembleError::Empty));
    }

    #[test]
    fn test_equal_weights_average() {
        let mut ensemble = Ensemble::new()
            .with_model(Fixed::new(100.0), 0.5)
            .with_model(Fixed::new(200.0), 0.5);

        for _ in 0..5 {
            assert_eq!(ensemble.next_price().unwrap(), 150.0);
        }
    }

    #[test]
    fn test_every_model_steps_once_per_call() {
        let mut ensemble = Ensemble::new()
            .with_model(Fixed::new(1.0), 1.0)
            .with_model(Fixed::new(2.0), 0.0)
            .with_model(Fixed::new(3.0), -1.0);

        for _ in 0..4 {
            ensemble.next_price().unwrap();
        }
        assert!(ensemble.iter().all(|m| m.model().steps == 4));
    }

    #[test]
    fn test_weights_unnormalised() {
        let mut ensemble = Ensemble::new()
            .with_model(Fixed::new(100.0), 2.0)
            .with_model(Fixed::new(50.0), -1.0);

        assert_eq!(ensemble.total_weight(), 1.0);
        assert_eq!(ensemble.next_price().unwrap(), 150.0);
    }

    #[test]
    fn test_current_price_does_not_step() {
        let ensemble = Ensemble::new()
            .with_model(Fixed::new(100.0), 0.25)
            .with_model(Fixed::new(200.0), 0.75);

        assert_relative_eq!(ensemble.current_price(), 175.0);
        assert!(ensemble.iter().all(|m| m.model().steps == 0));
    }

    #[test]
    fn test_members_keep_registration_order() {
        let ensemble = Ensemble::new()
            .with_model(Fixed::new(1.0), 0.1)
            .with_model(Fixed::new(2.0), 0.2);

        let weights: Vec<f64> = ensemble.iter().map(|m| m.weight()).collect();
        assert_eq!(weights, vec![0.1, 0.2]);
        assert_eq!(ensemble.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_next_price_is_weighted_sum(
            members in prop::collection::vec((-1e6f64..1e6, -10.0f64..10.0), 1..8)
        ) {
            let mut ensemble = Ensemble::new();
            for &(price, weight) in &members {
                ensemble.add_model(Fixed::new(price), weight);
            }
            let expected = members.iter().fold(0.0, |acc, &(p, w)| acc + p * w);
            prop_assert_eq!(ensemble.next_price().unwrap(), expected);
        }
    }
}
