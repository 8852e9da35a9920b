//! Core traits and types for the repressilator workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts a model to a state that ODE solvers can step
//! - [`StepIntegrable`] and [`ErrorNorm`] — what a state must support to be
//!   advanced by fixed-step and adaptive integrators

mod model;
mod norm;
mod observer;
mod problems;
mod step;

pub use norm::{ErrorNorm, rms_error_norm};
pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
