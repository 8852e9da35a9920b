use std::convert::Infallible;

use repressilator_core::OdeProblem;

use crate::{
    model::Input,
    state::{Rates, State},
};

/// Integrates the six concentrations of a [`Repressilator`](crate::Repressilator).
#[derive(Debug, Clone, Copy, Default)]
pub struct RepressilatorProblem;

impl OdeProblem for RepressilatorProblem {
    type Input = Input;
    type Output = Rates;
    type Delta = f64;
    type State = State;
    type Error = Infallible;

    fn state(&self, input: &Input) -> Result<State, Infallible> {
        Ok(input.state)
    }

    fn derivative(&self, _input: &Input, output: &Rates) -> Result<Rates, Infallible> {
        Ok(*output)
    }

    fn build_input(
        &self,
        origin: &Input,
        state: &State,
        offset: &f64,
    ) -> Result<Input, Infallible> {
        Ok(Input {
            time: origin.time + offset,
            state: *state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn built_inputs_are_offset_from_the_origin() {
        let origin = Input {
            time: 10.0,
            ..Input::initial()
        };
        let state = State::from_array([1.0; 6]);

        let input = RepressilatorProblem
            .build_input(&origin, &state, &2.5)
            .unwrap();

        assert_relative_eq!(input.time, 12.5);
        assert_eq!(input.state, state);
    }
}
