//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with any solver that implements them.
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use rootfind_solvers::equation::secant;

/// An event that carries a completed step record.
pub trait HasRecord {
    /// Returns the record of the step that produced this event.
    fn record(&self) -> &secant::Record;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the function value at the newest iterate.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasRecord for secant::Event<'_> {
    fn record(&self) -> &secant::Record {
        self.record
    }
}

impl HasResidual for secant::Event<'_> {
    fn residual(&self) -> f64 {
        self.record.f_next
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
