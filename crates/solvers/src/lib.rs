//! Iterative root finders for scalar functions.
//!
//! Solvers take any [`Function`] and report their progress through an
//! [`Observer`]. See [`equation::secant`] for the secant method.
//!
//! [`Function`]: rootfind_core::Function
//! [`Observer`]: rootfind_core::Observer

pub mod equation;
