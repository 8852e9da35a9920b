use repressilator_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the span.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Step and evaluation counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Steps whose error estimate was accepted.
    pub accepted: usize,

    /// Trial steps rejected and retried with a smaller step.
    pub rejected: usize,

    /// Model calls, including dense-output samples.
    pub evaluations: usize,
}

/// The result of a Dormand–Prince integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Snapshots at each sample, starting with the initial state.
    pub history: Vec<Snapshot<I, O>>,

    /// Number of samples emitted after the initial one.
    pub samples: usize,

    /// Step and evaluation counts.
    pub stats: Stats,
}

impl<I, O> Solution<I, O> {
    /// Returns the last recorded snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot<I, O>> {
        self.history.last()
    }
}
