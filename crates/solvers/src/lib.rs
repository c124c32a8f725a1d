//! Solvers for discrete iteration problems.
//!
//! - [`fixed_point`] — iterates a map until the per-step change falls within
//!   tolerance, with an explicit iteration cap
//! - [`iterate`] — steps a map a fixed number of times and keeps the history

pub mod fixed_point;
pub mod iterate;
