use std::io::Write;

use repressilator_observers::TableWriter;
use repressilator_solvers::transient::{SpanError, rk4, step_count};

use crate::{
    gene::Gene,
    model::{Input, Repressilator},
    problem::RepressilatorProblem,
    state::Rates,
};

/// End of the simulated span.
pub const T_END: f64 = 500.0;

/// Fixed integration step, also the output cadence.
pub const DT: f64 = 0.1;

/// Header of the time column.
pub const TIME_HEADER: &str = "Tiempo";

/// Decimals written for each value.
const PRECISION: usize = 6;

/// Errors that can end a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Span(#[from] SpanError),

    #[error(transparent)]
    Solver(#[from] rk4::Error),
}

/// A completed run: the output writer and the integrated trajectory.
#[derive(Debug)]
pub struct Run<W> {
    pub writer: W,
    pub solution: rk4::Solution<Input, Rates>,
}

/// Integrates the repressilator from [`Input::initial`] over `duration` with
/// fixed RK4 steps of `dt`, writing one row per step to `writer`.
///
/// The table starts with the header `Tiempo LacI TetR cI` (tab-separated),
/// followed by the initial row at `t = 0`.
///
/// # Errors
///
/// Returns an error if the span is invalid or if writing fails. Numerical
/// blow-up is not an error; non-finite values are written as they are.
pub fn simulate<W: Write>(writer: W, duration: f64, dt: f64) -> Result<Run<W>, Error> {
    let steps = step_count(duration, dt)?;
    log::info!("integrating {steps} steps of {dt} up to t = {duration}");

    let mut table =
        TableWriter::new(writer, TIME_HEADER, Gene::ALL.map(Gene::name))?.with_precision(PRECISION);

    let solution = rk4::solve(
        &Repressilator::default(),
        &RepressilatorProblem,
        Input::initial(),
        dt,
        steps,
        &mut table,
    )?;

    let writer = table.finish()?;
    log::debug!("wrote {} rows", solution.history.len());

    Ok(Run { writer, solution })
}
