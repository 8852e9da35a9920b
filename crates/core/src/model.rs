/// A callable model that maps a typed input to a typed output.
///
/// For ODE work the input usually carries the state and the current value of
/// the independent variable, and the output carries the derivative. Models
/// must be deterministic: solvers evaluate the same model at several trial
/// points per step and rely on repeated calls agreeing.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
///
/// Solvers record one snapshot per retained point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Calls `model` with `input` and captures the result.
    ///
    /// # Errors
    ///
    /// Returns the model's error if the call fails.
    pub fn capture<M>(model: &M, input: I) -> Result<Self, M::Error>
    where
        M: Model<Input = I, Output = O>,
    {
        let output = model.call(&input)?;
        Ok(Self { input, output })
    }
}
