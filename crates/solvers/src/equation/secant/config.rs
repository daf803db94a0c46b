use thiserror::Error;

/// Policy for deciding that the secant denominator `f(x1) - f(x0)` is unusable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Guard {
    /// Abort when `|f(x1) - f(x0)| < tol`.
    #[default]
    Tolerance,

    /// Abort only when `f(x1) == f(x0)` exactly.
    ///
    /// Near-flat denominators pass this guard and can throw the next iterate
    /// far away. Prefer [`Guard::Tolerance`] unless exact legacy behavior is
    /// needed.
    ExactZero,
}

impl Guard {
    /// Returns true if `denominator` is too small to divide by.
    #[must_use]
    pub fn is_degenerate(self, denominator: f64, tol: f64) -> bool {
        match self {
            Guard::Tolerance => denominator.abs() < tol,
            #[allow(clippy::float_cmp)]
            Guard::ExactZero => denominator == 0.0,
        }
    }
}

/// Which quantities must fall below `tol` for a step to count as converged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convergence {
    /// Converged when the step `|x_next - x_curr|` or the residual `|f(x_next)|`
    /// is below `tol`.
    #[default]
    StepOrResidual,

    /// Converged only when the step `|x_next - x_curr|` is below `tol`.
    Step,
}

impl Convergence {
    /// Returns true if a step with the given displacement and residual converged.
    #[must_use]
    pub fn is_met(self, error: f64, residual: f64, tol: f64) -> bool {
        match self {
            Convergence::StepOrResidual => error < tol || residual.abs() < tol,
            Convergence::Step => error < tol,
        }
    }
}

/// Configuration for the secant solver.
///
/// The single tolerance `tol` is used three ways: as the step size below which
/// the iteration has converged, as the residual below which it has converged
/// (see [`Convergence`]), and as the denominator guard (see [`Guard`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    tol: f64,
    guard: Guard,
    convergence: Convergence,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tol must be finite and positive")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 1e-6,
            guard: Guard::default(),
            convergence: Convergence::default(),
        }
    }
}

impl Config {
    /// Creates a new config with the default guard and convergence policies.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tol` is not finite and positive.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        let config = Self {
            max_iters,
            tol,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns this config with a different denominator guard.
    #[must_use]
    pub fn with_guard(self, guard: Guard) -> Self {
        Self { guard, ..self }
    }

    /// Returns this config with a different convergence policy.
    #[must_use]
    pub fn with_convergence(self, convergence: Convergence) -> Self {
        Self {
            convergence,
            ..self
        }
    }

    /// Checks the invariants that [`Config::new`] enforces.
    ///
    /// Configs built through [`Config::new`] always pass. The solver checks
    /// again because a deserialized config never went through `new`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tol` is not finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        Ok(())
    }

    /// Returns the maximum number of secant steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the denominator guard policy.
    #[must_use]
    pub fn guard(&self) -> Guard {
        self.guard
    }

    /// Returns the convergence policy.
    #[must_use]
    pub fn convergence(&self) -> Convergence {
        self.convergence
    }
}
