use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rootfind_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solve once its [`CancelHandle`] has been triggered.
///
/// The flag is checked once per step, so a solve stops at the first step
/// boundary after cancellation.
#[derive(Debug, Clone, Default)]
pub struct Cancel {
    flag: Arc<AtomicBool>,
}

/// Requests cancellation of the solve watched by a [`Cancel`] observer.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl Cancel {
    /// Creates an observer that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that can cancel this observer from any thread.
    #[must_use]
    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            flag: Arc::clone(&self.flag),
        }
    }

    /// Returns true if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl CancelHandle {
    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Cancel {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootfind_solvers::equation::secant::{self, Action, Config, Event, Status};

    #[test]
    fn idle_until_cancelled() {
        let mut cancel = Cancel::new();
        let handle = cancel.handle();

        let action: Option<Action> = cancel.observe(&());
        assert_eq!(action, None);

        handle.cancel();
        let action: Option<Action> = cancel.observe(&());
        assert_eq!(action, Some(Action::StopEarly));
    }

    #[test]
    fn stops_a_running_solve() {
        let cancel = Cancel::new();
        let handle = cancel.handle();

        // Cancel from inside the solve after the second step.
        let trigger = move |event: &Event<'_>| -> Option<Action> {
            if event.iter() == 2 {
                handle.cancel();
            }
            None
        };

        let cubic = |x: f64| x.powi(3) + x.powi(2) - 3.0 * x - 3.0;
        let solution = secant::solve(&cubic, [1.0, 2.0], &Config::default(), (trigger, cancel))
            .expect("valid inputs");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
    }

    #[test]
    fn handle_works_across_threads() {
        let cancel = Cancel::new();
        let handle = cancel.handle();

        std::thread::spawn(move || handle.cancel())
            .join()
            .expect("thread should finish");

        assert!(cancel.is_cancelled());
    }
}
