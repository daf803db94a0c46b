use thiserror::Error;

use super::{Solution, Status, config::ConfigError};

/// Errors that can occur when seeding the secant solver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    /// One or both seeds are non-finite.
    #[error("non-finite seed(s)")]
    NonFinite,

    /// Seeds are equal, so no secant line passes through them.
    #[error("seeds are equal")]
    Equal,
}

/// Errors that stop the secant solver before it takes a step.
///
/// Nothing is evaluated when one of these is returned.
/// Failures during iteration are reported as a [`Status`] instead,
/// together with the partial trace.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid seeds: {0}")]
    InvalidSeeds(#[from] SeedError),
}

/// A finished solve that did not converge.
///
/// Returned by [`Solution::into_converged`]. The partial solution, including
/// its trace, is kept so callers can still show how far the iteration got.
#[derive(Debug, Error)]
#[error("secant solve did not converge: {status}")]
pub struct Unconverged {
    /// Why the solve stopped.
    pub status: Status,

    /// The solution as it stood when the solve stopped.
    pub solution: Box<Solution>,
}
