use std::convert::Infallible;

use repressilator_core::Model;
use repressilator_observers::Tabular;

use crate::{
    gene::{Gene, GeneRate},
    parameters::Parameters,
    state::{Rates, State},
};

/// Model input: the gene concentrations at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub time: f64,
    pub state: State,
}

impl Input {
    /// The simulation start: [`State::initial`] at `t = 0`.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            time: 0.0,
            state: State::initial(),
        }
    }
}

/// One output row per input: time, then the LacI, TetR, and cI proteins.
impl Tabular<3> for Input {
    fn time(&self) -> f64 {
        self.time
    }

    fn columns(&self) -> [f64; 3] {
        self.state.proteins()
    }
}

/// The repressilator rate equations.
///
/// Time does not appear in the equations; it is carried in [`Input`] only so
/// solvers can report it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Repressilator {
    params: Parameters,
}

impl Repressilator {
    #[must_use]
    pub const fn new(params: Parameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &Parameters {
        &self.params
    }

    /// Computes the rate of change of every concentration.
    ///
    /// Any input is accepted, including negative and non-finite values, which
    /// propagate through the arithmetic.
    #[must_use]
    pub fn rates(&self, state: &State) -> Rates {
        let Parameters {
            alpha,
            alpha0,
            hill,
            beta,
        } = self.params;

        Rates::new(Gene::ALL.map(|gene| {
            let unit = state[gene];
            let repressor = state[gene.repressor()].protein;

            GeneRate {
                d_mrna: -unit.mrna + alpha / (1.0 + repressor.powf(hill)) + alpha0,
                d_protein: -beta * (unit.protein - unit.mrna),
            }
        }))
    }
}

impl Model for Repressilator {
    type Input = Input;
    type Output = Rates;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Rates, Infallible> {
        Ok(self.rates(&input.state))
    }
}
