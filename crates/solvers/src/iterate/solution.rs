use daisyworld_core::Snapshot;

/// Indicates how the iterator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step iteration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the iterator terminated.
    pub status: Status,

    /// Snapshots from each step, including the initial input.
    pub history: Vec<Snapshot<I, O>>,

    /// Number of steps completed.
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the model inputs in step order.
    pub fn inputs(&self) -> impl Iterator<Item = &I> {
        self.history.iter().map(|snapshot| &snapshot.input)
    }
}
