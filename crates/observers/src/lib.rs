//! Reusable observers for zeroin solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: reports every evaluation through the `log` facade
//! - [`ResidualThreshold`]: stops a solver once the residual is small enough
//!
//! [`Observer`]: zeroin_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log_observer;
mod threshold;

pub use log_observer::LogObserver;
pub use threshold::{ResidualThreshold, ThresholdError};
