use std::cell::Cell;

/// A scalar function `f: ℝ → ℝ` whose roots a solver searches for.
///
/// Implementations must be pure: calling with the same `x` must return the
/// same value. Solvers rely on this to carry evaluations forward between
/// steps instead of recomputing them.
///
/// Returning `NaN` or an infinity is allowed. Solvers treat those as ordinary
/// float results and decide how to terminate.
///
/// Closures and function pointers of type `Fn(f64) -> f64` implement this
/// trait automatically, so an expression parser only needs to hand back a
/// closure.
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Borrows a [`Function`] and counts how many times it was evaluated.
///
/// The count uses interior mutability so the wrapper can still be passed
/// by shared reference wherever a `&impl Function` is expected.
#[derive(Debug)]
pub struct Counted<'a, F: ?Sized> {
    inner: &'a F,
    evals: Cell<usize>,
}

impl<'a, F: ?Sized> Counted<'a, F> {
    /// Wraps `inner` with a zeroed evaluation counter.
    pub fn new(inner: &'a F) -> Self {
        Self {
            inner,
            evals: Cell::new(0),
        }
    }

    /// Returns the number of evaluations so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals.get()
    }
}

impl<F: Function + ?Sized> Function for Counted<'_, F> {
    fn eval(&self, x: f64) -> f64 {
        self.evals.set(self.evals.get() + 1);
        self.inner.eval(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    struct Cubic;

    impl Function for Cubic {
        fn eval(&self, x: f64) -> f64 {
            x.powi(3)
        }
    }

    #[test]
    fn closures_are_functions() {
        let offset = 2.0;
        let f = |x: f64| x - offset;
        assert_relative_eq!(f.eval(5.0), 3.0);
    }

    #[test]
    fn fn_pointers_are_functions() {
        let f: fn(f64) -> f64 = f64::cos;
        assert_relative_eq!(f.eval(0.0), 1.0);
    }

    #[test]
    fn counted_tracks_evaluations() {
        let counted = Counted::new(&Cubic);
        assert_eq!(counted.evals(), 0);

        assert_relative_eq!(counted.eval(2.0), 8.0);
        assert_relative_eq!(counted.eval(-1.0), -1.0);
        assert_eq!(counted.evals(), 2);
    }

    #[test]
    fn counted_passes_through_non_finite_values() {
        let reciprocal = |x: f64| 1.0 / x;
        let counted = Counted::new(&reciprocal);
        assert!(counted.eval(0.0).is_infinite());
        assert!(counted.eval(f64::NAN).is_nan());
        assert_eq!(counted.evals(), 2);
    }
}
