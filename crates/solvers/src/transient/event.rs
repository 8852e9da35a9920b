use repressilator_core::Snapshot;

/// A point of the trajectory reported to the observer.
///
/// Step 0 is the initial input. Later steps are spaced by the solver's
/// reporting interval: every integration step for [`rk4`](super::rk4), every
/// sample for [`dopri5`](super::dopri5).
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// Index of the reported point, counted from the initial input.
    pub step: usize,

    /// Model input and output at this point.
    pub snapshot: Snapshot<I, O>,
}

/// Control actions an observer can return to a transient solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the trajectory recorded so far.
    StopEarly,
}
