use std::io::{self, Write};

use rootfind_core::Observer;

use crate::traits::HasRecord;

/// Writes one whitespace-aligned line per step to a writer.
///
/// Lines carry the step number, the three iterates, the function value at the
/// new iterate, and the step error. A header is written before the first step.
///
/// Write failures never interrupt the solve. The first failure is kept, later
/// steps are skipped, and [`LineLog::finish`] reports it.
#[derive(Debug)]
pub struct LineLog<W> {
    writer: W,
    header_written: bool,
    error: Option<io::Error>,
}

impl<W: Write> LineLog<W> {
    /// Creates a logger that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
            error: None,
        }
    }

    /// Flushes and returns the writer, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_line(&mut self, event: &impl HasRecord) -> io::Result<()> {
        if !self.header_written {
            writeln!(
                self.writer,
                "{:>5} {:>16} {:>16} {:>16} {:>16} {:>12}",
                "iter", "x_prev", "x_curr", "x_next", "f(x_next)", "error"
            )?;
            self.header_written = true;
        }

        let r = event.record();
        writeln!(
            self.writer,
            "{:>5} {:>16.9} {:>16.9} {:>16.9} {:>16.6e} {:>12.4e}",
            r.iter, r.x_prev, r.x_curr, r.x_next, r.f_next, r.error
        )
    }
}

impl<E: HasRecord, A, W: Write> Observer<E, A> for LineLog<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_none()
            && let Err(error) = self.write_line(event)
        {
            self.error = Some(error);
        }
        None
    }
}

/// Allows `&mut LineLog<W>` to be passed to solvers that take an observer by
/// value, so [`LineLog::finish`] can be called after the solve completes.
impl<E: HasRecord, A, W: Write> Observer<E, A> for &mut LineLog<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootfind_solvers::equation::secant::{self, Config};

    /// Writer that fails on every call.
    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_header_and_one_line_per_step() {
        let cubic = |x: f64| x.powi(3) + x.powi(2) - 3.0 * x - 3.0;
        let mut log = LineLog::new(Vec::new());

        let solution =
            secant::solve(&cubic, [1.0, 2.0], &Config::default(), &mut log).expect("valid inputs");

        let text = String::from_utf8(log.finish().expect("in-memory writes")).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), solution.iters + 1);
        assert!(lines[0].trim_start().starts_with("iter"));
        assert!(lines[1].trim_start().starts_with("1 "));
        assert!(lines[1].contains("1.571428571"));
    }

    #[test]
    fn keeps_first_error_without_stopping_the_solve() {
        let cubic = |x: f64| x.powi(3) + x.powi(2) - 3.0 * x - 3.0;
        let mut log = LineLog::new(Broken);

        let solution =
            secant::solve(&cubic, [1.0, 2.0], &Config::default(), &mut log).expect("valid inputs");

        assert!(solution.is_converged());
        let error = log.finish().expect_err("writes failed");
        assert_eq!(error.to_string(), "disk full");
    }
}
