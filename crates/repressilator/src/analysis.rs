//! Checks on a simulated trajectory.

use repressilator_core::Snapshot;

use crate::{gene::Gene, model::Input};

/// Returns the arithmetic mean, or NaN for an empty series.
#[must_use]
pub fn mean(series: &[f64]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = series.len() as f64;
    series.iter().sum::<f64>() / n
}

/// Counts how many times a series crosses its own mean.
///
/// A crossing is a sign change of `x - mean` between consecutive samples;
/// samples lying exactly on the mean are skipped.
#[must_use]
pub fn mean_crossings(series: &[f64]) -> usize {
    let center = mean(series);

    let signs: Vec<bool> = series
        .iter()
        .map(|x| x - center)
        .filter(|d| *d != 0.0 && !d.is_nan())
        .map(|d| d > 0.0)
        .collect();

    signs.windows(2).filter(|w| w[0] != w[1]).count()
}

/// The three protein columns of a trajectory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinSeries {
    columns: [Vec<f64>; 3],
}

impl ProteinSeries {
    /// Collects protein concentrations from solver snapshots.
    pub fn from_history<O>(history: &[Snapshot<Input, O>]) -> Self {
        let mut columns: [Vec<f64>; 3] =
            std::array::from_fn(|_| Vec::with_capacity(history.len()));
        for snapshot in history {
            for (column, value) in columns.iter_mut().zip(snapshot.input.state.proteins()) {
                column.push(value);
            }
        }
        Self { columns }
    }

    /// Returns the series for one gene's protein.
    #[must_use]
    pub fn protein(&self, gene: Gene) -> &[f64] {
        &self.columns[gene.index()]
    }

    /// Returns the mean crossings of each protein in [`Gene::ALL`] order.
    #[must_use]
    pub fn crossings(&self) -> [usize; 3] {
        Gene::ALL.map(|gene| mean_crossings(self.protein(gene)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::state::State;

    #[test]
    fn mean_of_values() {
        assert_relative_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn counts_sign_changes_around_the_mean() {
        // Mean is 0.5; the series goes low, high, low, high.
        assert_eq!(mean_crossings(&[0.0, 1.0, 0.0, 1.0]), 3);
        assert_eq!(mean_crossings(&[0.0, 0.0, 1.0, 1.0]), 1);
    }

    #[test]
    fn monotone_and_flat_series() {
        assert_eq!(mean_crossings(&[1.0, 2.0, 3.0, 4.0, 5.0]), 1);
        assert_eq!(mean_crossings(&[2.0, 2.0, 2.0]), 0);
        assert_eq!(mean_crossings(&[]), 0);
    }

    #[test]
    fn samples_on_the_mean_are_skipped() {
        // Mean is 0; the zero in the middle neither starts nor ends a crossing.
        assert_eq!(mean_crossings(&[-1.0, 0.0, 1.0]), 1);
    }

    #[test]
    fn collects_protein_columns() {
        let history: Vec<Snapshot<Input, ()>> = (0..3)
            .map(|i| {
                let x = f64::from(i);
                let input = Input {
                    time: x,
                    state: State::from_array([0.0, x, 0.0, 2.0 * x, 0.0, -x]),
                };
                Snapshot::new(input, ())
            })
            .collect();

        let series = ProteinSeries::from_history(&history);

        assert_eq!(series.protein(Gene::LacI), [0.0, 1.0, 2.0]);
        assert_eq!(series.protein(Gene::TetR), [0.0, 2.0, 4.0]);
        assert_eq!(series.protein(Gene::CI), [0.0, -1.0, -2.0]);
        assert_eq!(series.crossings(), [1, 1, 1]);
    }
}
