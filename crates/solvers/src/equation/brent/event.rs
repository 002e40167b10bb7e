use zeroin_core::{EquationProblem, Model, Observer};

use crate::equation::EvalError;

use super::{Action, Point, Step};

/// Events emitted by the Brent solver.
///
/// One event is emitted per iteration, after the new point is evaluated and
/// before the bracket is updated. `best` is the estimate the solver would
/// return if it stopped now, and `contrapoint` is the opposite end of the
/// bracket.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of a new point.
    Evaluated {
        /// The evaluated point (x and residual).
        point: Point,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,

        /// The rule that chose this point.
        ///
        /// Interpolation steps shorter than the tolerance keep their label
        /// but move by exactly the tolerance (see [`Step`]).
        step: Step,

        /// Best estimate before this evaluation.
        best: Point,

        /// The bracket end opposite `best`.
        contrapoint: Point,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The x value where evaluation failed.
        x: f64,

        /// Best estimate before this evaluation.
        best: Point,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or residual computation).
    ProblemFailed {
        /// The x value where evaluation failed.
        x: f64,

        /// Best estimate before this evaluation.
        best: Point,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the best estimate before this evaluation.
    #[must_use]
    pub fn best(&self) -> Point {
        match self {
            Self::Evaluated { best, .. }
            | Self::ModelFailed { best, .. }
            | Self::ProblemFailed { best, .. } => *best,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        x: f64,
        best: Point,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed { x, best, error: e };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed { x, best, error: e };
                observer.observe(&event)
            }
        }
    }
}
