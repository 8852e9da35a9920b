//! Time integration of ODE problems.
//!
//! # Solvers
//!
//! - [`rk4`] — classic fixed-step 4th-order Runge–Kutta
//! - [`dopri5`] — adaptive Dormand–Prince 5(4) with dense output sampled at a
//!   fixed interval
//!
//! Both solvers report the trajectory on a fixed cadence: the initial input
//! first, then one snapshot every `dt` (or `interval`) until the requested
//! duration is covered. Sample times are computed as `k * dt` from the start,
//! so they do not drift over long runs.

pub mod dopri5;
pub mod rk4;

mod event;

pub use event::{Action, Event};

use thiserror::Error;

/// Errors from describing an integration span.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SpanError {
    #[error("step size must be finite and positive, got {0}")]
    Step(f64),

    #[error("duration must be finite and non-negative, got {0}")]
    Duration(f64),
}

/// Relative slack used when dividing a duration into steps.
///
/// `500.0 / 0.1` is not exactly `5000.0` in every rounding mode, and an extra
/// step past the horizon is never wanted.
const STEP_COUNT_SLACK: f64 = 1e-9;

/// Returns the number of steps of size `dt` needed to cover `duration`.
///
/// This is the smallest `n` with `n * dt >= duration`, so the last step lands
/// at or past the end of the span but less than one step beyond it.
///
/// # Errors
///
/// Returns [`SpanError::Step`] if `dt` is not finite and positive, and
/// [`SpanError::Duration`] if `duration` is not finite and non-negative.
pub fn step_count(duration: f64, dt: f64) -> Result<usize, SpanError> {
    check_step(dt)?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(SpanError::Duration(duration));
    }

    let ratio = duration / dt;
    let steps = (ratio - ratio.max(1.0) * STEP_COUNT_SLACK).ceil().max(0.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(steps as usize)
}

/// Ensures `dt` can be used as a step size.
pub(crate) fn check_step(dt: f64) -> Result<(), SpanError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SpanError::Step(dt))
    }
}

/// Returns the offset of step `index` from the start of the span.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn offset(dt: f64, index: usize) -> f64 {
    dt * index as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiples_do_not_gain_a_step() {
        assert_eq!(step_count(500.0, 0.1), Ok(5000));
        assert_eq!(step_count(50.0, 0.1), Ok(500));
        assert_eq!(step_count(1.0, 0.25), Ok(4));
    }

    #[test]
    fn partial_steps_round_up() {
        assert_eq!(step_count(0.25, 0.1), Ok(3));
        assert_eq!(step_count(1.01, 0.5), Ok(3));
    }

    #[test]
    fn zero_duration_needs_no_steps() {
        assert_eq!(step_count(0.0, 0.1), Ok(0));
    }

    #[test]
    fn rejects_bad_step_sizes() {
        assert_eq!(step_count(1.0, 0.0), Err(SpanError::Step(0.0)));
        assert_eq!(step_count(1.0, -0.1), Err(SpanError::Step(-0.1)));
        assert!(matches!(step_count(1.0, f64::NAN), Err(SpanError::Step(_))));
    }

    #[test]
    fn rejects_bad_durations() {
        assert_eq!(step_count(-1.0, 0.1), Err(SpanError::Duration(-1.0)));
        assert_eq!(
            step_count(f64::INFINITY, 0.1),
            Err(SpanError::Duration(f64::INFINITY))
        );
    }

    #[test]
    fn last_step_covers_the_horizon() {
        for (duration, dt) in [(500.0, 0.1), (0.25, 0.1), (7.3, 0.7), (50.0, 0.1)] {
            let n = step_count(duration, dt).unwrap();
            let last = offset(dt, n);
            assert!(last >= duration - 1e-9 * duration, "{duration} / {dt}");
            assert!(last < duration + dt, "{duration} / {dt}");
        }
    }

    #[test]
    fn offsets_land_exactly_on_round_horizons() {
        assert_eq!(offset(0.1, 5000), 500.0);
        assert_eq!(offset(0.1, 500), 50.0);
    }
}
