//! Reusable observers for the repressilator solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in [`repressilator_solvers`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`CanStopEarly`])
//! - [`TableWriter`] — writes one tab-separated row per event
//!
//! [`Observer`]: repressilator_core::Observer
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod table;

pub use table::{TableWriter, Tabular};
