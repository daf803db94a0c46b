//! Runs a secant solve on a worker thread and prints its steps as they arrive.
//!
//! # Usage
//!
//! ```text
//! cargo run --example worker
//! cargo run --example worker -- 0.1 2 1e-4 100
//! ```
//!
//! Arguments are `x0 x1 tol max_iters`. The function is
//! `f(x) = 2x³ - x - e^(-x)`, which has a single real root near 0.8629.
//!
//! The main thread prints each record it receives and cancels the solve if it
//! runs past 50 steps, the way a UI would wire a progress table and a cancel
//! button to the solver.

use std::{error::Error, sync::mpsc, thread};

use rootfind_observers::{Cancel, Progress};
use rootfind_solvers::equation::secant::{self, Config, Status};

const CANCEL_AFTER: usize = 50;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (x0, x1, tol, max_iters) = match args.as_slice() {
        [] => (0.1, 2.0, 1e-4, 100),
        [x0, x1, tol, max_iters] => (
            x0.parse::<f64>()?,
            x1.parse::<f64>()?,
            tol.parse::<f64>()?,
            max_iters.parse::<usize>()?,
        ),
        _ => {
            eprintln!("Usage: worker [x0 x1 tol max_iters]");
            std::process::exit(1);
        }
    };

    let config = Config::new(max_iters, tol)?;
    let cancel = Cancel::new();
    let handle = cancel.handle();
    let (tx, rx) = mpsc::channel();

    let worker = thread::spawn(move || {
        let f = |x: f64| 2.0 * x.powi(3) - x - (-x).exp();
        secant::solve(&f, [x0, x1], &config, (Progress::new(tx), cancel))
    });

    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>12}",
        "iter", "x_curr", "x_next", "f(x_next)", "error"
    );
    for record in rx {
        println!(
            "{:>5} {:>14.8} {:>14.8} {:>14.4e} {:>12.4e}",
            record.iter, record.x_curr, record.x_next, record.f_next, record.error
        );
        if record.iter >= CANCEL_AFTER {
            handle.cancel();
        }
    }

    let solution = worker.join().map_err(|_| "worker thread panicked")??;

    println!();
    match solution.status {
        Status::Converged => println!(
            "root x = {:.9} after {} steps, f(x) = {:.3e}",
            solution.x, solution.iters, solution.fx
        ),
        status => println!(
            "{status} after {} steps; last estimate x = {:.9}",
            solution.iters, solution.x
        ),
    }

    Ok(())
}
