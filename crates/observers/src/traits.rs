//! Capability traits for cross-solver observers.
//!
//! Observers written against these traits work with the transient
//! [`Action`] and with test doubles alike.
//!
//! # Example
//!
//! ```rust
//! use repressilator_core::Observer;
//! use repressilator_observers::traits::CanStopEarly;
//!
//! struct StopAfter {
//!     remaining: usize,
//! }
//!
//! impl<E, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         if self.remaining == 0 {
//!             return Some(A::stop_early());
//!         }
//!         self.remaining -= 1;
//!         None
//!     }
//! }
//! ```

use repressilator_solvers::transient::Action;

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
