//! Brent's method for single-variable root finding.
//!
//! # Algorithm
//!
//! Brent's method finds a zero of a continuous function on an interval whose
//! endpoints have residuals of opposite sign. It keeps a best estimate `b`
//! and a contrapoint `c` that together bracket the root. Each iteration tries
//! a secant or inverse quadratic interpolation step, and falls back to
//! bisection whenever the interpolated point would leave the bracket or the
//! steps stop shrinking fast enough.
//!
//! The result is accurate to within `6 * f64::EPSILON * |x| + 2 * x_abs_tol`.
//! Convergence is never slower than bisection by more than a bounded factor,
//! and is usually superlinear.
//!
//! # When to Use
//!
//! Brent's method is appropriate when:
//! - A bracketing interval with a sign change is known
//! - Derivatives are unavailable or expensive
//! - The function may be rough or not smooth, but is continuous
//!
//! # Limitations
//!
//! - **Single variable only**: Works with [`EquationProblem<1>`]
//! - **One root**: Returns one zero inside the bracket, not all of them
//! - **Discontinuities**: A sign change across a jump or pole is reported
//!   like a root
//!
//! # Entry Points
//!
//! - [`find_root`] / [`find_root_default`]: plain `Fn(f64) -> f64` closures
//! - [`solve`] / [`solve_unobserved`]: a [`Model`] paired with an
//!   [`EquationProblem`], returning a [`Solution`] with a snapshot
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the endpoints:
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::ModelFailed`]: model returned an error
//! - [`Event::ProblemFailed`]: problem returned an error (input or residual)
//!
//! Observers can return [`Action::StopEarly`] to halt and receive the best
//! estimate found so far.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod point;
mod search;
mod solution;
mod state;
mod step;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_X_ABS_TOL};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};
pub use step::Step;

use zeroin_core::{EquationProblem, FnModel, Model, Observer, ZeroOf};

use search::search;

/// Finds a root of the equation using Brent's method.
///
/// The endpoints of `bracket` may be given in either order. If either
/// endpoint is already a root it is returned with zero iterations.
///
/// The observer receives an [`Event`] for each evaluation after the endpoints.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change,
/// a residual is non-finite, or the model or problem fails during evaluation
/// and the observer does not stop the solver.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, observer)
}

/// Finds a root of the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change,
/// a residual is non-finite, or the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Finds a zero of `f` between `a` and `b` to within `6 * f64::EPSILON * |x| + 2 * tol`.
///
/// `f(a)` and `f(b)` must have opposite signs, or one of them must be exactly
/// zero. The iteration is capped at [`DEFAULT_MAX_ITERS`], which well-posed
/// inputs never reach, even with `tol = 0`.
///
/// # Example
///
/// ```
/// use zeroin_solvers::equation::brent::find_root;
///
/// let root = find_root(|x| x * x - 2.0, 0.0, 2.0, 1e-10).unwrap();
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-8);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `tol` is negative or non-finite,
/// [`Error::InvalidBracket`] if the endpoints are non-finite, equal, or do not
/// bracket a sign change, [`Error::NonFiniteResidual`] if `f` returns NaN or
/// infinity, and [`Error::MaxIters`] if the iteration limit is reached.
pub fn find_root<F>(f: F, a: f64, b: f64, tol: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let config = Config::default().with_x_abs_tol(tol)?;
    let solution = solve_unobserved(&FnModel::new(f), &ZeroOf, [a, b], &config)?;

    if solution.status == Status::Converged {
        Ok(solution.x)
    } else {
        Err(Error::MaxIters {
            x: solution.x,
            residual: solution.residual,
            iters: solution.iters,
        })
    }
}

/// Finds a zero of `f` between `a` and `b` using [`DEFAULT_X_ABS_TOL`].
///
/// # Errors
///
/// See [`find_root`].
pub fn find_root_default<F>(f: F, a: f64, b: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    find_root(f, a, b, DEFAULT_X_ABS_TOL)
}
