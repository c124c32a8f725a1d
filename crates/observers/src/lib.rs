//! Reusable observers for the Daisyworld solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `daisyworld-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//! - [`LogObserver`] — forwards solver progress to the `log` facade
//!
//! [`Observer`]: daisyworld_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log_observer;

pub use log_observer::{LogObserver, Residual, Steps};
