//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasStep`] — events that know how far the solver has progressed
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use daisyworld_core::Observer;
//! use daisyworld_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use daisyworld_solvers::{fixed_point, iterate};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event tagged with the solver's progress.
pub trait HasStep {
    /// Returns the iteration or step number of this event.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- fixed_point ---

impl<I, O> HasResidual for fixed_point::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl<I, O> HasStep for fixed_point::Event<'_, I, O> {
    fn step(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- iterate ---

impl<I, O> HasStep for iterate::Event<I, O> {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for iterate::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
