//! Integrates the repressilator from t = 0 to t = 500 and prints the protein
//! concentrations as a tab-separated table on standard output.
//!
//! Diagnostics go to standard error and are controlled by `RUST_LOG`.

use std::{
    error::Error,
    io::{self, BufWriter},
};

use repressilator::{DT, Gene, T_END, analysis::ProteinSeries, simulate};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stdout = BufWriter::new(io::stdout().lock());
    let run = simulate(stdout, T_END, DT)?;

    let series = ProteinSeries::from_history(&run.solution.history);
    for (gene, crossings) in Gene::ALL.into_iter().zip(series.crossings()) {
        log::info!("{} crossed its mean {crossings} times", gene.name());
    }

    Ok(())
}
