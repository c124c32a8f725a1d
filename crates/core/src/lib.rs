//! Core traits and types for the Daisyworld workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`IterationProblem`], [`FixedPointProblem`] — problem traits that turn a
//!   model into a discrete map and measure how far an iterate is from a
//!   fixed point

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{FixedPointProblem, IterationProblem};
pub use {model::Model, model::Snapshot};
