//! Adaptive Dormand–Prince 5(4) solver with dense output.
//!
//! Each step computes a 5th-order solution and an embedded 4th-order one from
//! seven stages. Their scaled difference estimates the local error: steps
//! with an estimate above one are retried with a smaller step, and the next
//! step size follows the usual controller
//!
//! ```text
//! factor = clamp(0.9 * err^(-1/5), 0.2, 10)
//! ```
//!
//! The trajectory is reported on a fixed interval regardless of the internal
//! step sizes. Samples that fall inside a step are produced with Shampine's
//! 4th-order continuous extension, so the observer cadence matches
//! [`rk4`](super::rk4) with `dt = interval`.
//!
//! A step whose error estimate is not finite (the state overflowed or became
//! NaN) is accepted as is, so non-finite values propagate to the observer
//! instead of stalling the controller.

mod config;
mod error;
mod solution;
mod tableau;
mod trial;


pub use super::{Action, Event};
pub use config::{Config, ConfigError, DEFAULT_ABS_TOL, DEFAULT_MAX_STEPS, DEFAULT_REL_TOL};
pub use error::Error;
pub use solution::{Solution, Stats, Status};

use repressilator_core::{DerivativeOf, ErrorNorm, Model, Observer, OdeProblem, Snapshot};

use super::{offset, step_count};
use trial::Trial;

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;

/// Smallest usable step, relative to the length of the span.
const MIN_STEP_RATIO: f64 = 1e-12;

/// Integrates an ODE problem over `duration` using Dormand–Prince 5(4).
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial snapshot (sample 0) and
/// for every sample at `k * interval`, and may return [`Action::StopEarly`]
/// to terminate the simulation early.
///
/// # Errors
///
/// Returns an error if `duration` is invalid, if the model or problem returns
/// an error, if the step size collapses, or if the configured step limit is
/// reached before the end of the span.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    duration: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    P::State: Clone + ErrorNorm,
    DerivativeOf<P::State, f64>: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let interval = config.interval();
    let samples = step_count(duration, interval)?;
    let end = offset(interval, samples);
    let min_step = MIN_STEP_RATIO * end.max(1.0);

    let origin = initial.clone();
    let initial_snapshot = Snapshot::capture(model, initial).map_err(Error::model)?;

    let mut stats = Stats {
        evaluations: 1,
        ..Stats::default()
    };
    let mut history = Vec::with_capacity(samples + 1);
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            samples: 0,
            stats,
        });
    }

    let mut current = initial_snapshot;
    let mut elapsed = 0.0;
    let mut h = interval;
    let mut next_sample = 1;
    let mut warned = false;

    while next_sample <= samples {
        if stats.accepted + stats.rejected >= config.max_steps() {
            return Err(Error::MaxStepsExceeded(config.max_steps()));
        }

        let remaining = end - elapsed;
        let last = h >= remaining;
        let size = if last { remaining } else { h };

        let trial = Trial::evaluate(model, problem, &origin, &current, elapsed, size)?;
        stats.evaluations += trial.evaluations();

        let err = trial.error(config.abs_tol(), config.rel_tol());
        if err > 1.0 && err.is_finite() {
            stats.rejected += 1;
            h = size * step_factor(err).min(1.0);
            if h < min_step {
                return Err(Error::StepSizeTooSmall { elapsed });
            }
            continue;
        }
        if !err.is_finite() && !warned {
            log::warn!("non-finite error estimate at offset {elapsed}, accepting step unchecked");
            warned = true;
        }

        let step_end = if last { end } else { elapsed + size };
        let next_input = problem
            .build_input(&origin, trial.high(), &step_end)
            .map_err(Error::problem)?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &size)
            .map_err(Error::problem)?;
        let next_snapshot = Snapshot::capture(model, next_input).map_err(Error::model)?;
        stats.evaluations += 1;
        stats.accepted += 1;

        while next_sample <= samples {
            let at = offset(interval, next_sample);
            if at > step_end {
                break;
            }

            let snapshot = if at < step_end {
                let state = trial.interpolate((at - elapsed) / size);
                let input = problem
                    .build_input(&origin, &state, &at)
                    .map_err(Error::problem)?;
                stats.evaluations += 1;
                Snapshot::capture(model, input).map_err(Error::model)?
            } else {
                next_snapshot.clone()
            };
            history.push(snapshot.clone());

            let event = Event {
                step: next_sample,
                snapshot,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    history,
                    samples: next_sample,
                    stats,
                });
            }

            next_sample += 1;
        }

        if err.is_finite() {
            h = size * step_factor(err);
        }
        elapsed = step_end;
        current = next_snapshot;
    }

    log::debug!(
        "dopri5 finished: {} accepted, {} rejected, {} evaluations",
        stats.accepted,
        stats.rejected,
        stats.evaluations
    );

    Ok(Solution {
        status: Status::Complete,
        history,
        samples,
        stats,
    })
}

/// Integrates an ODE problem using Dormand–Prince without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    duration: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    P::State: Clone + ErrorNorm,
    DerivativeOf<P::State, f64>: Clone,
{
    solve(model, problem, initial, duration, config, ())
}

/// Returns the step size multiplier for a finite error estimate.
fn step_factor(err: f64) -> f64 {
    if err == 0.0 {
        MAX_FACTOR
    } else {
        (SAFETY * err.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
    }
}
