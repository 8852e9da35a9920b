//! Numerical solvers for the repressilator workspace.
//!
//! # Modules
//!
//! - [`transient`] — integrators that advance an [`OdeProblem`] through time
//!
//! [`OdeProblem`]: repressilator_core::OdeProblem

pub mod transient;
