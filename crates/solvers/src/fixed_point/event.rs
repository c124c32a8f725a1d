use daisyworld_core::Snapshot;

/// Event emitted by the fixed-point solver after each model call.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Change produced by this model call.
    pub residual: f64,
    /// Input and output of this model call.
    pub snapshot: &'a Snapshot<I, O>,
}
