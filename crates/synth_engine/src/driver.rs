//! Runs an ensemble for a fixed number of steps.

use synth_models::models::{PricingModel, PricingModelEnum};

use crate::ensemble::Ensemble;
use crate::error::{EngineError, EnsembleError};
use crate::series::{Series, SeriesSink};

/// Upper bound on the values reserved up front by [`Driver::run`].
const MAX_RESERVED_STEPS: usize = 1 << 20;

/// Step loop over an owned [`Ensemble`].
///
/// A run calls [`Ensemble::next_price`] exactly `steps` times. There is no
/// retry and no early termination; `steps == 0` produces nothing and leaves
/// every model untouched. Model state carries over between runs.
///
/// Non-finite prices are passed through unchanged. The first one seen in a
/// run is reported with a warning.
#[derive(Clone, Debug)]
pub struct Driver<M = PricingModelEnum> {
    ensemble: Ensemble<M>,
}

impl<M: PricingModel> Driver<M> {
    /// Creates a driver owning `ensemble`.
    pub fn new(ensemble: Ensemble<M>) -> Self {
        Self { ensemble }
    }

    /// Runs `steps` steps and collects the prices.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::Empty`] if `steps > 0` and the ensemble has
    /// no models. No value is produced in that case.
    pub fn run(&mut self, steps: usize) -> Result<Series, EnsembleError> {
        let mut series = Series::with_capacity(steps.min(MAX_RESERVED_STEPS));
        self.drive(steps, |price| {
            series.push(price);
            Ok::<(), EnsembleError>(())
        })?;
        Ok(series)
    }

    /// Runs `steps` steps, handing each price to `sink` as it is produced.
    ///
    /// Nothing is retained by the driver. `sink.finish()` is called after the
    /// last step.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Ensemble` for an empty ensemble and
    /// `EngineError::Io` if the sink fails.
    pub fn run_into<S: SeriesSink>(
        &mut self,
        steps: usize,
        mut sink: S,
    ) -> Result<(), EngineError> {
        self.drive(steps, |price| sink.accept(price).map_err(EngineError::from))?;
        sink.finish()?;
        Ok(())
    }

    fn drive<E, F>(&mut self, steps: usize, mut emit: F) -> Result<(), E>
    where
        E: From<EnsembleError>,
        F: FnMut(f64) -> Result<(), E>,
    {
        tracing::info!(steps, models = self.ensemble.len(), "Starting run");

        let mut reported_non_finite = false;
        for step in 0..steps {
            let price = self.ensemble.next_price()?;
            tracing::trace!(step, price, "Step");
            if !price.is_finite() && !reported_non_finite {
                tracing::warn!(
                    step,
                    price,
                    "Non-finite synthetic price; propagating unchanged"
                );
                reported_non_finite = true;
            }
            emit(price)?;
        }

        tracing::info!(
            steps,
            current_price = self.ensemble.current_price(),
            "Run complete"
        );
        Ok(())
    }

    /// The driven ensemble.
    pub fn ensemble(&self) -> &Ensemble<M> {
        &self.ensemble
    }
}
