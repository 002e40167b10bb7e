use zeroin_core::{EquationProblem, Model, Observer, Snapshot};

use crate::equation::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, Point, Solution, Step,
    bracket::{Bounds, check_sign_change},
    solution::Status,
    state::{Entry, State},
};

type Tracked<M> = Entry<Snapshot<<M as Model>::Input, <M as Model>::Output>>;

/// Core Brent iteration.
///
/// Evaluates both endpoints, returns early if either is already a root,
/// checks the sign change, then iterates until the bracket is within
/// tolerance, a root is hit, the observer stops, or `max_iters` is reached.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let [first, second] = Bounds::new(bracket)?.as_array();

    let first = evaluate_endpoint(model, problem, first)?;
    if first.point.residual.abs() <= config.residual_tol() {
        log::debug!("brent: endpoint x = {} is a root", first.point.x);
        return Ok(Solution::from_entry(first, Status::Converged, 0));
    }

    let second = evaluate_endpoint(model, problem, second)?;
    if second.point.residual.abs() <= config.residual_tol() {
        log::debug!("brent: endpoint x = {} is a root", second.point.x);
        return Ok(Solution::from_entry(second, Status::Converged, 0));
    }

    check_sign_change(&first.point, &second.point)?;

    let mut state = State::new(first, second);
    let mut iters = 0;

    loop {
        state.rotate();
        let tol = state.tolerance(config.x_abs_tol());
        let m = state.half_width();

        if state.is_converged(tol, m, config.residual_tol()) {
            let best = state.best();
            log::debug!(
                "brent: converged to x = {} (f = {}) after {iters} iterations",
                best.x,
                best.residual
            );
            return Ok(Solution::from_entry(
                state.into_best(),
                Status::Converged,
                iters,
            ));
        }

        if iters == config.max_iters() {
            let best = state.best();
            log::debug!(
                "brent: iteration limit {iters} reached at x = {} (f = {})",
                best.x,
                best.residual
            );
            return Ok(Solution::from_entry(
                state.into_best(),
                Status::MaxIters,
                iters,
            ));
        }

        iters += 1;
        let step = state.select_step(tol, m);
        let x = state.next_x(tol, m);

        let outcome = eval_and_observe(model, problem, x, step, &state, &mut observer)?;
        match outcome {
            EvalOutcome::Continue(entry) => {
                log::trace!(
                    "brent: iter {iters}: {step:?} to x = {} (f = {})",
                    entry.point.x,
                    entry.point.residual
                );
                state.accept(entry);
            }
            EvalOutcome::StopEarly(candidate) => {
                log::debug!("brent: stopped by observer after {iters} iterations");
                let best = match candidate {
                    Some(entry) if entry.point.is_better_than(&state.best()) => entry,
                    _ => state.into_best(),
                };
                return Ok(Solution::from_entry(
                    best,
                    Status::StoppedByObserver,
                    iters,
                ));
            }
        }
    }
}

/// Evaluates a bracket endpoint, rejecting non-finite residuals.
fn evaluate_endpoint<M, P>(model: &M, problem: &P, x: f64) -> Result<Tracked<M>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, x)?;
    check_finite(&eval)?;
    Ok(Entry::from(eval))
}

fn check_finite<I, O>(eval: &Evaluation<I, O>) -> Result<(), Error> {
    if eval.residual.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x,
            residual: eval.residual,
        })
    }
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum EvalOutcome<T> {
    Continue(T),
    /// Carries the new entry when the evaluation succeeded.
    StopEarly(Option<T>),
}

/// Evaluate at `x`, emit event, and handle observer action.
fn eval_and_observe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    step: Step,
    state: &State<Snapshot<M::Input, M::Output>>,
    observer: &mut Obs,
) -> Result<EvalOutcome<Tracked<M>>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match evaluate(model, problem, x) {
        Ok(eval) => {
            check_finite(&eval)?;
            let point = Point::new(eval.x, eval.residual);
            let event = Event::Evaluated {
                point,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                step,
                best: state.best(),
                contrapoint: state.contrapoint(),
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly(Some(Entry::from(eval)))),
                None => Ok(EvalOutcome::Continue(Entry::from(eval))),
            }
        }
        Err(e) => match Event::emit_failure(x, state.best(), &e, observer) {
            Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly(None)),
            None => Err(e.into()),
        },
    }
}
