/// Control actions supported by the fixed-step iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the iterator early and return the history so far.
    StopEarly,
}
