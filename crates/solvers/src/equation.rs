//! Solvers for equation problems: finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive
//! that residual toward zero.
//!
//! # Solvers
//!
//! - [`brent`]: guaranteed convergence on a bracketed interval, with
//!   secant and inverse quadratic steps when they are safe
//!
//! [`EquationProblem`]: zeroin_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod brent;
