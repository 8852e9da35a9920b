use std::ops::Index;

use repressilator_core::{ErrorNorm, StepIntegrable, rms_error_norm};

use crate::gene::{Gene, GeneRate, GeneUnit};

/// Concentrations of all three genes.
///
/// The flat form is `[m_LacI, p_LacI, m_TetR, p_TetR, m_cI, p_cI]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    genes: [GeneUnit; 3],
}

impl State {
    /// Creates a state from per-gene units in [`Gene::ALL`] order.
    #[must_use]
    pub const fn new(genes: [GeneUnit; 3]) -> Self {
        Self { genes }
    }

    /// The starting point of the simulation: 20 units of TetR mRNA, nothing else.
    #[must_use]
    pub const fn initial() -> Self {
        Self::from_array([0.0, 0.0, 20.0, 0.0, 0.0, 0.0])
    }

    /// Creates a state from its flat form.
    #[must_use]
    pub const fn from_array(x: [f64; 6]) -> Self {
        Self::new([
            GeneUnit {
                mrna: x[0],
                protein: x[1],
            },
            GeneUnit {
                mrna: x[2],
                protein: x[3],
            },
            GeneUnit {
                mrna: x[4],
                protein: x[5],
            },
        ])
    }

    /// Returns the flat form of the state.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        let [a, b, c] = self.genes;
        [a.mrna, a.protein, b.mrna, b.protein, c.mrna, c.protein]
    }

    /// Returns the protein concentrations in [`Gene::ALL`] order.
    #[must_use]
    pub fn proteins(&self) -> [f64; 3] {
        self.genes.map(|unit| unit.protein)
    }
}

impl Index<Gene> for State {
    type Output = GeneUnit;

    fn index(&self, gene: Gene) -> &GeneUnit {
        &self.genes[gene.index()]
    }
}

/// Time derivative of a [`State`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates {
    genes: [GeneRate; 3],
}

impl Rates {
    /// Creates rates from per-gene rates in [`Gene::ALL`] order.
    #[must_use]
    pub const fn new(genes: [GeneRate; 3]) -> Self {
        Self { genes }
    }

    /// Returns the flat form, ordered like [`State::to_array`].
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        let [a, b, c] = self.genes;
        [
            a.d_mrna,
            a.d_protein,
            b.d_mrna,
            b.d_protein,
            c.d_mrna,
            c.d_protein,
        ]
    }
}

impl Index<Gene> for Rates {
    type Output = GeneRate;

    fn index(&self, gene: Gene) -> &GeneRate {
        &self.genes[gene.index()]
    }
}

impl StepIntegrable<f64> for State {
    type Derivative = Rates;

    fn step(&self, rates: Rates, dt: f64) -> Self {
        let mut genes = self.genes;
        for (unit, rate) in genes.iter_mut().zip(rates.genes) {
            unit.mrna += rate.d_mrna * dt;
            unit.protein += rate.d_protein * dt;
        }
        Self { genes }
    }
}

impl ErrorNorm for State {
    fn error_norm(&self, other: &Self, reference: &Self, abs_tol: f64, rel_tol: f64) -> f64 {
        rms_error_norm(
            &self.to_array(),
            &other.to_array(),
            &reference.to_array(),
            abs_tol,
            rel_tol,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn flat_form_keeps_gene_order() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let state = State::from_array(x);

        assert_eq!(state[Gene::LacI], GeneUnit { mrna: 1.0, protein: 2.0 });
        assert_eq!(state[Gene::TetR], GeneUnit { mrna: 3.0, protein: 4.0 });
        assert_eq!(state[Gene::CI], GeneUnit { mrna: 5.0, protein: 6.0 });
        assert_eq!(state.to_array(), x);
        assert_eq!(state.proteins(), [2.0, 4.0, 6.0]);
    }

    #[test]
    fn initial_state_seeds_tetr_mrna() {
        let state = State::initial();

        assert_eq!(state.to_array(), [0.0, 0.0, 20.0, 0.0, 0.0, 0.0]);
        assert_eq!(state.proteins(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn step_moves_every_component() {
        let state = State::from_array([1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let rates = Rates::new([
            GeneRate {
                d_mrna: 10.0,
                d_protein: -10.0,
            },
            GeneRate {
                d_mrna: 0.0,
                d_protein: 5.0,
            },
            GeneRate {
                d_mrna: -2.0,
                d_protein: 0.0,
            },
        ]);

        let next = state.step(rates, 0.1);

        let expected = [2.0, 0.0, 1.0, 1.5, 0.8, 1.0];
        for (got, want) in next.to_array().iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn error_norm_compares_all_six_components() {
        let reference = State::from_array([0.0; 6]);
        let a = State::from_array([0.0; 6]);
        let b = State::from_array([0.0, 0.0, 0.0, 0.0, 0.0, 6e-6]);

        // One component off by six tolerance units: sqrt(36 / 6).
        let norm = a.error_norm(&b, &reference, 1e-6, 0.0);

        assert_relative_eq!(norm, 6.0_f64.sqrt(), max_relative = 1e-9);
    }
}
