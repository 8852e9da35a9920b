use std::error::Error as StdError;

use crate::transient::SpanError;

/// Errors that can occur during Dormand–Prince integration.
///
/// Non-finite error estimates are not errors: the step is accepted and the
/// values propagate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    Span(#[from] SpanError),

    #[error("step size became too small at offset {elapsed}")]
    StepSizeTooSmall { elapsed: f64 },

    #[error("gave up after {0} attempted steps")]
    MaxStepsExceeded(usize),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }

    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
