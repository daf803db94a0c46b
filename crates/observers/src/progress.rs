use std::sync::mpsc::Sender;

use rootfind_core::Observer;
use rootfind_solvers::equation::secant::Record;

use crate::traits::{CanStopEarly, HasRecord};

/// Forwards every step record through a channel.
///
/// Intended for running a solve on a worker thread while another thread
/// displays its progress. If the receiving side has hung up, nobody is
/// watching any more and the solve is stopped early.
#[derive(Debug, Clone)]
pub struct Progress {
    sender: Sender<Record>,
}

impl Progress {
    /// Creates an observer that sends records to `sender`.
    #[must_use]
    pub fn new(sender: Sender<Record>) -> Self {
        Self { sender }
    }
}

impl<E: HasRecord, A: CanStopEarly> Observer<E, A> for Progress {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.sender
            .send(*event.record())
            .err()
            .map(|_| A::stop_early())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{sync::mpsc, thread};

    use rootfind_solvers::equation::secant::{self, Config, Status};

    fn cubic(x: f64) -> f64 {
        x.powi(3) + x.powi(2) - 3.0 * x - 3.0
    }

    #[test]
    fn streams_records_from_a_worker_thread() {
        let (tx, rx) = mpsc::channel();

        let worker = thread::spawn(move || {
            secant::solve(&cubic, [1.0, 2.0], &Config::default(), Progress::new(tx))
        });

        let received: Vec<Record> = rx.iter().collect();
        let solution = worker
            .join()
            .expect("worker should finish")
            .expect("valid inputs");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(received.as_slice(), solution.trace.records());
    }

    #[test]
    fn stops_when_receiver_hangs_up() {
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let solution = secant::solve(&cubic, [1.0, 2.0], &Config::default(), Progress::new(tx))
            .expect("valid inputs");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
    }
}
