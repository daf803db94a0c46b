use std::fmt;

use super::{Trace, Unconverged, step::Point};

/// Why the secant solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance and policy.
    Converged,

    /// Took `max_iters` steps without converging.
    MaxIters,

    /// The secant denominator `f(x1) - f(x0)` failed the configured guard.
    ///
    /// The step that would have divided by it is not recorded.
    DivideByZero,

    /// A seed value, iterate, or function value became non-finite.
    ///
    /// If the blow-up happened during a step, that step is the last record.
    NonFinite,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Converged => "converged",
            Status::MaxIters => "reached the iteration limit",
            Status::DivideByZero => "secant denominator collapsed",
            Status::NonFinite => "non-finite value encountered",
            Status::StoppedByObserver => "stopped by observer",
        };
        f.write_str(text)
    }
}

/// The result of a secant solve.
///
/// The reported estimate is always the newest iterate: the last record's
/// `x_next`, or the second seed if no step completed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Displacement between the two newest iterates.
    pub error: f64,

    /// Number of completed steps.
    pub iters: usize,

    /// Number of function evaluations, including the two seeds.
    pub evals: usize,

    /// Every completed step, in order.
    pub trace: Trace,
}

impl Solution {
    /// Builds a solution from the two newest points of the window.
    pub(super) fn new(
        status: Status,
        prev: Point,
        curr: Point,
        trace: Trace,
        evals: usize,
    ) -> Self {
        Self {
            status,
            x: curr.x,
            fx: curr.fx,
            error: (curr.x - prev.x).abs(),
            iters: trace.len(),
            evals,
            trace,
        }
    }

    /// Returns true if the solve converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the solution if it converged, or an error holding it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Unconverged`] for every status except [`Status::Converged`].
    pub fn into_converged(self) -> Result<Self, Unconverged> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(Unconverged {
                status: self.status,
                solution: Box::new(self),
            })
        }
    }
}
