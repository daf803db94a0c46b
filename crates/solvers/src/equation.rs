//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`secant`] — derivative-free, superlinear iteration from two seeds

pub mod secant;
