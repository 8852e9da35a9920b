//! The repressilator: three genes repressing each other in a cycle.
//!
//! LacI represses TetR, TetR represses cI, and cI represses LacI. Each gene
//! is an mRNA/protein pair, so the system has six state variables:
//!
//! ```text
//! dm_i/dt = -m_i + α / (1 + p_j^n) + α₀      (j = repressor of i)
//! dp_i/dt = -β (p_i - m_i)
//! ```
//!
//! - [`Repressilator`] — the model, mapping an [`Input`] to its [`Rates`]
//! - [`RepressilatorProblem`] — the [`OdeProblem`] that lets solvers step it
//! - [`simulate`] — runs the fixed-step integration and writes the table
//! - [`analysis`] — checks on the produced trajectory
//!
//! [`OdeProblem`]: repressilator_core::OdeProblem

pub mod analysis;

mod gene;
mod model;
mod parameters;
mod problem;
mod simulation;
mod state;

pub use gene::{Gene, GeneRate, GeneUnit};
pub use model::{Input, Repressilator};
pub use parameters::{ALPHA, ALPHA0, BETA, HILL, Parameters};
pub use problem::RepressilatorProblem;
pub use simulation::{DT, Error, Run, T_END, TIME_HEADER, simulate};
pub use state::{Rates, State};
