use repressilator_core::{DerivativeOf, ErrorNorm, Model, OdeProblem, Snapshot, StepIntegrable};

use super::{
    Error,
    tableau::{A, B_LOW, C, STAGES, dense_weights},
};

/// One trial step: the stage derivatives and both embedded solutions.
pub(super) struct Trial<S: StepIntegrable<f64>> {
    start: S,
    stages: Vec<S::Derivative>,
    high: S,
    low: S,
    size: f64,
}

impl<S> Trial<S>
where
    S: StepIntegrable<f64> + Clone,
    S::Derivative: Clone,
{
    /// Evaluates all stages of a step of `size` from `current`, which sits at
    /// `elapsed` past `origin`.
    pub(super) fn evaluate<M, P>(
        model: &M,
        problem: &P,
        origin: &M::Input,
        current: &Snapshot<M::Input, M::Output>,
        elapsed: f64,
        size: f64,
    ) -> Result<Self, Error>
    where
        M: Model,
        P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64, State = S>,
    {
        let start = problem.state(&current.input).map_err(Error::problem)?;

        let mut stages = Vec::with_capacity(STAGES);
        stages.push(
            problem
                .derivative(&current.input, &current.output)
                .map_err(Error::problem)?,
        );

        let mut high = start.clone();
        for (c, weights) in C.iter().zip(A).skip(1) {
            let state = combine(&start, &stages, weights, size);
            stages.push(slope(model, problem, origin, &state, elapsed + c * size)?);
            high = state;
        }

        let low = combine(&start, &stages, &B_LOW, size);

        Ok(Self {
            start,
            stages,
            high,
            low,
            size,
        })
    }

    /// Returns the 5th-order solution at the end of the step.
    pub(super) fn high(&self) -> &S {
        &self.high
    }

    /// Returns the scaled difference between the 5th- and 4th-order solutions.
    pub(super) fn error(&self, abs_tol: f64, rel_tol: f64) -> f64
    where
        S: ErrorNorm,
    {
        self.high
            .error_norm(&self.low, &self.start, abs_tol, rel_tol)
    }

    /// Returns the dense-output state at fraction `theta` of the step.
    pub(super) fn interpolate(&self, theta: f64) -> S {
        combine(&self.start, &self.stages, &dense_weights(theta), self.size)
    }

    /// Number of model calls made while evaluating the stages.
    pub(super) fn evaluations(&self) -> usize {
        self.stages.len() - 1
    }
}

/// Steps `start` by each stage derivative in turn, weighted by `weights * h`.
fn combine<S>(start: &S, stages: &[S::Derivative], weights: &[f64], h: f64) -> S
where
    S: StepIntegrable<f64> + Clone,
    S::Derivative: Clone,
{
    stages
        .iter()
        .zip(weights)
        .fold(start.clone(), |state, (k, w)| state.step(k.clone(), w * h))
}

/// Evaluates the derivative of a trial state at the given offset.
fn slope<M, P>(
    model: &M,
    problem: &P,
    origin: &M::Input,
    state: &P::State,
    at: f64,
) -> Result<DerivativeOf<P::State, f64>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
{
    let input = problem
        .build_input(origin, state, &at)
        .map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    problem.derivative(&input, &output).map_err(Error::problem)
}
