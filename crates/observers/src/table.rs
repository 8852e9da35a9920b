//! Tab-separated trajectory output.
//!
//! See [`TableWriter`] and [`Tabular`] for usage.

use std::io::{self, Write};

use repressilator_core::Observer;
use repressilator_solvers::transient::Event;

use crate::traits::CanStopEarly;

/// Extracts a table row from a solver event or model input.
///
/// Implement this on your model input type; the transient solver [`Event`]
/// forwards to the input held by its snapshot, so a [`TableWriter`] can then
/// be passed to a solver directly.
pub trait Tabular<const N: usize> {
    /// The value of the independent variable for this row.
    fn time(&self) -> f64;

    /// The data columns for this row, in header order.
    fn columns(&self) -> [f64; N];
}

impl<I, O, const N: usize> Tabular<N> for Event<I, O>
where
    I: Tabular<N>,
{
    fn time(&self) -> f64 {
        self.snapshot.input.time()
    }

    fn columns(&self) -> [f64; N] {
        self.snapshot.input.columns()
    }
}

/// An observer that writes one tab-separated row per event.
///
/// The header line is written by [`TableWriter::new`], before any row. Rows
/// hold the time followed by the `N` columns of [`Tabular::columns`].
///
/// Non-finite values are written as they are (`NaN`, `inf`); the first such
/// row is reported with a warning.
///
/// When used as an observer, a failed write is kept and the solver is asked to
/// stop early; [`finish`][TableWriter::finish] returns the error.
///
/// # Example
///
/// ```ignore
/// let stdout = io::stdout().lock();
/// let mut table = TableWriter::new(stdout, "Tiempo", ["LacI", "TetR", "cI"])?;
/// rk4::solve(&model, &problem, initial, 0.1, steps, &mut table)?;
/// table.finish()?;
/// ```
pub struct TableWriter<W: Write, const N: usize> {
    writer: W,
    precision: Option<usize>,
    rows: usize,
    error: Option<io::Error>,
    warned: bool,
}

impl<W: Write, const N: usize> TableWriter<W, N> {
    /// Creates a writer and writes the header line.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(mut writer: W, time_name: &str, names: [&str; N]) -> io::Result<Self> {
        writer.write_all(time_name.as_bytes())?;
        for name in names {
            write!(writer, "\t{name}")?;
        }
        writeln!(writer)?;

        Ok(Self {
            writer,
            precision: None,
            rows: 0,
            error: None,
            warned: false,
        })
    }

    /// Writes data values with a fixed number of decimals.
    ///
    /// Without this, values use the shortest representation that round-trips.
    #[must_use]
    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Writes a single row.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn record(&mut self, time: f64, columns: [f64; N]) -> io::Result<()> {
        if !self.warned && !(time.is_finite() && columns.iter().all(|v| v.is_finite())) {
            log::warn!("non-finite value in row at t = {time}: {columns:?}");
            self.warned = true;
        }

        self.write_value(time)?;
        for value in columns {
            self.writer.write_all(b"\t")?;
            self.write_value(value)?;
        }
        writeln!(self.writer)?;

        self.rows += 1;
        Ok(())
    }

    /// Returns the number of data rows written so far.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes the output and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen while observing, or an error from
    /// the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_value(&mut self, value: f64) -> io::Result<()> {
        match self.precision {
            Some(digits) => write!(self.writer, "{value:.digits$}"),
            None => write!(self.writer, "{value}"),
        }
    }
}

impl<W, E, A, const N: usize> Observer<E, A> for TableWriter<W, N>
where
    W: Write,
    E: Tabular<N>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }

        match self.record(event.time(), event.columns()) {
            Ok(()) => None,
            Err(err) => {
                log::error!("failed to write row {}: {err}", self.rows + 1);
                self.error = Some(err);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut TableWriter` to be passed to solvers that take an observer by
/// value, so [`TableWriter::finish`] can be called after the solve completes.
impl<W, E, A, const N: usize> Observer<E, A> for &mut TableWriter<W, N>
where
    W: Write,
    E: Tabular<N>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use repressilator_core::Snapshot;

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    struct Row {
        t: f64,
        a: f64,
        b: f64,
    }

    impl Tabular<2> for Row {
        fn time(&self) -> f64 {
            self.t
        }

        fn columns(&self) -> [f64; 2] {
            [self.a, self.b]
        }
    }

    /// A writer that accepts a fixed number of bytes, then fails.
    struct Budget {
        remaining: usize,
    }

    impl Write for Budget {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.remaining {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.remaining -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn table() -> TableWriter<Vec<u8>, 2> {
        TableWriter::new(Vec::new(), "t", ["a", "b"]).unwrap()
    }

    fn text(table: TableWriter<Vec<u8>, 2>) -> String {
        String::from_utf8(table.finish().unwrap()).unwrap()
    }

    #[test]
    fn header_is_written_before_any_row() {
        assert_eq!(text(table()), "t\ta\tb\n");
    }

    #[test]
    fn rows_use_round_trip_formatting_by_default() {
        let mut table = table();
        table.record(0.0, [20.0, 0.5]).unwrap();
        table.record(0.1, [1.25, -3.0]).unwrap();

        assert_eq!(table.rows(), 2);
        assert_eq!(text(table), "t\ta\tb\n0\t20\t0.5\n0.1\t1.25\t-3\n");
    }

    #[test]
    fn precision_fixes_decimals() {
        let mut table = table().with_precision(3);
        table.record(0.1 + 0.2, [1.0, 2.0 / 3.0]).unwrap();

        assert_eq!(text(table), "t\ta\tb\n0.300\t1.000\t0.667\n");
    }

    #[test]
    fn non_finite_values_are_still_written() {
        let mut table = table();
        table.record(1.0, [f64::NAN, f64::INFINITY]).unwrap();

        assert_eq!(text(table), "t\ta\tb\n1\tNaN\tinf\n");
    }

    #[test]
    fn observes_tabular_events() {
        let mut table = table();

        let action: Option<Stop> = table.observe(&Row {
            t: 0.5,
            a: 1.0,
            b: 2.0,
        });

        assert!(action.is_none());
        assert_eq!(text(table), "t\ta\tb\n0.5\t1\t2\n");
    }

    #[test]
    fn solver_events_forward_to_their_input() {
        let event = Event {
            step: 3,
            snapshot: Snapshot::new(
                Row {
                    t: 0.3,
                    a: 4.0,
                    b: 5.0,
                },
                (),
            ),
        };

        assert_eq!(Tabular::<2>::time(&event), 0.3);
        assert_eq!(Tabular::<2>::columns(&event), [4.0, 5.0]);
    }

    #[test]
    fn write_failure_stops_the_solver() {
        // Room for the header ("t\ta\tb\n") only.
        let writer = Budget { remaining: 6 };
        let mut table = TableWriter::new(writer, "t", ["a", "b"]).unwrap();
        let row = Row {
            t: 0.0,
            a: 1.0,
            b: 2.0,
        };

        let first: Option<Stop> = table.observe(&row);
        let second: Option<Stop> = table.observe(&row);

        assert_eq!(first, Some(Stop));
        assert_eq!(second, Some(Stop));
        let err = table.finish().err().expect("write error is reported");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
