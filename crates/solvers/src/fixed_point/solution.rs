use daisyworld_core::Snapshot;

/// Indicates how the fixed-point solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual fell within the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a fixed-point solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,
    /// Residual of the final model call.
    pub residual: f64,
    /// Input and output of the final model call.
    pub snapshot: Snapshot<I, O>,
    /// Number of model calls made.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
