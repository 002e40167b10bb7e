use std::fmt::Debug;

use log::Level;

use zeroin_core::{EquationProblem, Model, Observer};
use zeroin_solvers::equation::brent;

/// Reports solver events through the [`log`] facade.
///
/// Successful evaluations are logged at the configured level (default
/// [`Level::Debug`]); failed evaluations are always logged at
/// [`Level::Warn`]. The observer never changes the solver's control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
    events: usize,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogObserver {
    /// Creates an observer that logs evaluations at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: module_path!(),
            events: 0,
        }
    }

    /// Returns a copy that logs under a different target.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<M, P> Observer<brent::Event<'_, M, P>, brent::Action> for LogObserver
where
    M: Model,
    M::Input: Debug,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &brent::Event<'_, M, P>) -> Option<brent::Action> {
        self.events += 1;
        let n = self.events;

        match event {
            brent::Event::Evaluated {
                point,
                input,
                step,
                contrapoint,
                ..
            } => {
                log::log!(
                    target: self.target,
                    self.level,
                    "brent #{n}: {step:?} x = {:e}, f = {:e}, contrapoint = {:e}, input = {input:?}",
                    point.x,
                    point.residual,
                    contrapoint.x,
                );
            }
            brent::Event::ModelFailed { x, error, .. } => {
                log::warn!(target: self.target, "brent #{n}: model failed at x = {x:e}: {error}");
            }
            brent::Event::ProblemFailed { x, error, .. } => {
                log::warn!(target: self.target, "brent #{n}: problem failed at x = {x:e}: {error}");
            }
        }

        None
    }
}
