//! Numerical solvers built on the `zeroin-core` abstractions.
//!
//! # Modules
//!
//! - [`equation`]: root finding for equation problems, including
//!   [`equation::brent`] and its scalar entry points
//!   [`find_root`](equation::brent::find_root) and
//!   [`find_root_default`](equation::brent::find_root_default)

pub mod equation;
