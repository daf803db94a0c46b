//! Secant method for single-variable root finding.
//!
//! # Algorithm
//!
//! The secant method replaces Newton's analytic derivative with the slope of
//! the line through the two most recent iterates. Starting from seeds `x0` and
//! `x1`, each step computes
//!
//! ```text
//! x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! records it, and slides the window so `(x0, x1)` becomes `(x1, x2)`.
//! Each step costs one new function evaluation.
//!
//! # When to Use
//!
//! - Derivatives are unavailable or expensive
//! - Two reasonable starting guesses near a simple root are known
//! - Fast (superlinear) convergence matters more than guaranteed convergence
//!
//! # Limitations
//!
//! - **No bracketing**: iterates can leave the region of interest, and the
//!   step error is not monotone even when the solve converges
//! - **Flat secants**: a denominator that fails the [`Guard`] ends the solve
//!   with [`Status::DivideByZero`]
//! - **Non-finite values**: a `NaN` or infinite seed value, iterate, or
//!   function value ends the solve with [`Status::NonFinite`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed step, numbered from 1, before
//! checking for convergence. Observers can return [`Action::StopEarly`] to
//! finish with [`Status::StoppedByObserver`], which is how progress display
//! and cooperative cancellation attach to a solve. A step that is non-finite
//! or converged reports that status even if the observer asked to stop.
//!
//! # Errors and statuses
//!
//! Only invalid inputs are errors ([`Error`]), and they are reported before
//! `f` is evaluated. Everything that happens once iteration starts is a
//! [`Status`] on the returned [`Solution`], together with the partial
//! [`Trace`]. Use [`Solution::into_converged`] to treat anything but
//! convergence as an error.

mod action;
mod config;
mod error;
mod event;
mod record;
mod solution;
mod step;
mod trace;


pub use action::Action;
pub use config::{Config, ConfigError, Convergence, Guard};
pub use error::{Error, SeedError, Unconverged};
pub use event::Event;
pub use record::Record;
pub use solution::{Solution, Status};
pub use trace::Trace;

use rootfind_core::{Counted, Function, Observer};

use step::{Point, next_x};

/// Finds a root of `function` with the secant method, starting from `seeds`.
///
/// The observer receives an [`Event`] after every step.
/// See the [module docs](self) for the algorithm and how it terminates.
///
/// # Errors
///
/// Returns an error, without evaluating `function`, if the config is invalid
/// or the seeds are non-finite or equal.
pub fn solve<F, Obs>(
    function: &F,
    seeds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    let [x0, x1] = validate_seeds(seeds)?;

    let function = Counted::new(function);
    let mut trace = Trace::new([x0, x1]);

    let mut prev = Point::new(x0, function.eval(x0));
    let mut curr = Point::new(x1, function.eval(x1));

    if !prev.is_finite() || !curr.is_finite() {
        return Ok(Solution::new(
            Status::NonFinite,
            prev,
            curr,
            trace,
            function.evals(),
        ));
    }

    for iter in 1..=config.max_iters() {
        let Some(x_next) = next_x(prev, curr, config) else {
            return Ok(Solution::new(
                Status::DivideByZero,
                prev,
                curr,
                trace,
                function.evals(),
            ));
        };

        let next = Point::new(x_next, function.eval(x_next));
        let record = Record {
            iter,
            x_prev: prev.x,
            x_curr: curr.x,
            x_next,
            f_next: next.fx,
            error: (x_next - curr.x).abs(),
        };

        let action = observer.observe(&Event {
            record: &record,
            history: trace.records(),
        });

        trace.push(record);
        prev = curr;
        curr = next;

        let status = if !next.is_finite() {
            Some(Status::NonFinite)
        } else if config
            .convergence()
            .is_met(record.error, record.f_next, config.tol())
        {
            Some(Status::Converged)
        } else if let Some(Action::StopEarly) = action {
            Some(Status::StoppedByObserver)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution::new(status, prev, curr, trace, function.evals()));
        }
    }

    Ok(Solution::new(
        Status::MaxIters,
        prev,
        curr,
        trace,
        function.evals(),
    ))
}

/// Finds a root of `function` with the secant method, without observation.
///
/// # Errors
///
/// Returns an error, without evaluating `function`, if the config is invalid
/// or the seeds are non-finite or equal.
pub fn solve_unobserved<F>(
    function: &F,
    seeds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(function, seeds, config, ())
}

/// Checks that the seeds are finite and distinct.
fn validate_seeds(seeds: [f64; 2]) -> Result<[f64; 2], SeedError> {
    let [x0, x1] = seeds;

    if !x0.is_finite() || !x1.is_finite() {
        return Err(SeedError::NonFinite);
    }

    #[allow(clippy::float_cmp)]
    if x0 == x1 {
        return Err(SeedError::Equal);
    }

    Ok(seeds)
}
