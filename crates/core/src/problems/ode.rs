use crate::{DerivativeOf, StepIntegrable};

/// Defines an ODE (ordinary differential equation) problem to be solved.
///
/// An ODE problem extracts a state from model input, computes derivatives from
/// model input and output, and reconstructs model input from a stepped state.
/// This trait enables generic ODE solvers to integrate any model by working
/// with a state type that implements [`StepIntegrable`].
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state from model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the derivative of the state from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds model input for `state` located `offset` past `origin`.
    ///
    /// Solvers pass the input the trajectory started from as `origin` and the
    /// total elapsed offset, so the independent variable is computed as
    /// `origin + offset` rather than accumulated step by step.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the state.
    fn build_input(
        &self,
        origin: &Self::Input,
        state: &Self::State,
        offset: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;

    /// Finalizes input after a successful integration step.
    ///
    /// This is called only for accepted steps, never for intermediate stage
    /// evaluations or rejected trial steps. It is the hook for constraint
    /// enforcement or discrete adjustments between steps.
    ///
    /// The default implementation returns the input unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if finalization fails.
    fn finalize_step(
        &self,
        next_input: Self::Input,
        _prev_input: &Self::Input,
        _prev_output: &Self::Output,
        _step_delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error> {
        Ok(next_input)
    }
}
