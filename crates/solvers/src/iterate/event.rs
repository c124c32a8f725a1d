use daisyworld_core::Snapshot;

/// Event emitted by the iterator for each snapshot.
///
/// Step 0 is the initial input before any iteration.
/// Steps 1..N are emitted after each step.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number (0 for initial, 1..N for iteration steps).
    pub step: usize,

    /// Snapshot of the model input and output at this step.
    pub snapshot: Snapshot<I, O>,
}
