//! Core traits and types for bracketed root finding.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`]: adapts solver variables to model inputs and
//!   computes residuals from model outputs
//! - [`FnModel`] and [`ZeroOf`]: adapters that turn a plain `Fn(f64) -> f64`
//!   into a model/problem pair

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{EquationProblem, ZeroOf};
pub use {model::FnModel, model::Model, model::Snapshot};
