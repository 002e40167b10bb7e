use thiserror::Error;

use zeroin_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solver once an evaluated residual falls below a tolerance.
///
/// Failed evaluations report a `NaN` residual and never trigger a stop.
/// Stopping is deferred until at least `min_events` events have been seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualThreshold {
    tolerance: f64,
    min_events: usize,
    seen: usize,
}

/// Error returned for a tolerance that could never be met.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("residual threshold must be finite and positive")]
pub struct ThresholdError;

impl ResidualThreshold {
    /// Creates an observer that stops when `|residual| < tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ThresholdError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ThresholdError);
        }

        Ok(Self {
            tolerance,
            min_events: 0,
            seen: 0,
        })
    }

    /// Returns a copy that waits for at least `min_events` events before stopping.
    #[must_use]
    pub fn after(self, min_events: usize) -> Self {
        Self { min_events, ..self }
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for ResidualThreshold {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.seen >= self.min_events && event.residual().abs() < self.tolerance {
            return Some(A::stop_early());
        }
        None
    }
}
