//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] — a numeric callable mapping a real `x` to a real `f(x)`
//! - [`Counted`] — a [`Function`] wrapper that counts evaluations
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Counted, Function};
pub use observer::Observer;
