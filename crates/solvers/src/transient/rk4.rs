//! Classic 4th-order Runge–Kutta solver for ODE problems.
//!
//! Each step evaluates the model four times and combines the slopes:
//!
//! ```text
//! k1 = f(t_n,         y_n)
//! k2 = f(t_n + dt/2,  y_n + k1 * dt/2)
//! k3 = f(t_n + dt/2,  y_n + k2 * dt/2)
//! k4 = f(t_n + dt,    y_n + k3 * dt)
//! y_{n+1} = y_n + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use repressilator_solvers::transient::{rk4, step_count};
//!
//! let steps = step_count(500.0, 0.1)?;
//! let solution = rk4::solve_unobserved(&model, &problem, initial_input, 0.1, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?}: {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod error;
mod solution;

pub use super::{Action, Event};
pub use error::Error;
pub use solution::{Solution, Status};

use repressilator_core::{DerivativeOf, Model, Observer, OdeProblem, Snapshot, StepIntegrable};

use super::{check_step, offset};

/// Integrates an ODE problem using classic RK4.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step:
///    - Extract the state and derivative from the current snapshot.
///    - Evaluate the three remaining stages at intermediate inputs.
///    - Combine the stages into the next state.
///    - Build the next input at offset `step * dt` from the initial input.
///    - Finalize the step (for discrete controls, constraints, etc.).
///    - Call the model to get the next output.
///    - Emit an `Event` to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial snapshot (step 0) and
/// after each integration step, and may return [`Action::StopEarly`] to
/// terminate the simulation early.
///
/// # Errors
///
/// Returns an error if `dt` is not finite and positive, or if the model or
/// problem returns an error at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: f64,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    check_step(dt)?;

    let origin = initial.clone();
    let initial_snapshot = Snapshot::capture(model, initial).map_err(Error::model)?;

    let mut history = Vec::with_capacity(steps + 1);
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let start = offset(dt, step - 1);
        let next_state = advance(model, problem, &origin, &current, start, dt)?;

        let next_input = problem
            .build_input(&origin, &next_state, &offset(dt, step))
            .map_err(Error::problem)?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &dt)
            .map_err(Error::problem)?;

        let next_snapshot = Snapshot::capture(model, next_input).map_err(Error::model)?;
        history.push(next_snapshot.clone());

        let event = Event {
            step,
            snapshot: next_snapshot.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if `dt` is invalid or if the model or problem returns an
/// error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: f64,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Computes the RK4 state one step past `current`, which sits at `start`.
fn advance<M, P>(
    model: &M,
    problem: &P,
    origin: &M::Input,
    current: &Snapshot<M::Input, M::Output>,
    start: f64,
    dt: f64,
) -> Result<P::State, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Clone,
{
    let half = 0.5 * dt;

    let y = problem.state(&current.input).map_err(Error::problem)?;
    let k1 = problem
        .derivative(&current.input, &current.output)
        .map_err(Error::problem)?;
    let k2 = slope(model, problem, origin, &y.step(k1.clone(), half), start + half)?;
    let k3 = slope(model, problem, origin, &y.step(k2.clone(), half), start + half)?;
    let k4 = slope(model, problem, origin, &y.step(k3.clone(), dt), start + dt)?;

    // Steps are affine, so chaining them sums the weighted slopes.
    Ok(y
        .step(k1, dt / 6.0)
        .step(k2, dt / 3.0)
        .step(k3, dt / 3.0)
        .step(k4, dt / 6.0))
}

/// Evaluates the derivative of a trial state at the given offset.
fn slope<M, P>(
    model: &M,
    problem: &P,
    origin: &M::Input,
    state: &P::State,
    at: f64,
) -> Result<DerivativeOf<P::State, f64>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
{
    let input = problem
        .build_input(origin, state, &at)
        .map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    problem.derivative(&input, &output).map_err(Error::problem)
}
