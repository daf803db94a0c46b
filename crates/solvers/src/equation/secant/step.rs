use super::Config;

/// An iterate paired with its function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Point {
    pub(super) x: f64,
    pub(super) fx: f64,
}

impl Point {
    pub(super) fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }

    pub(super) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.fx.is_finite()
    }
}

/// Computes where the secant line through `prev` and `curr` crosses zero.
///
/// Always uses the form `x1 - f1 * (x1 - x0) / (f1 - f0)`.
/// Returns `None` if the config's guard rejects the denominator.
pub(super) fn next_x(prev: Point, curr: Point, config: &Config) -> Option<f64> {
    let denominator = curr.fx - prev.fx;
    if config.guard().is_degenerate(denominator, config.tol()) {
        return None;
    }
    Some(curr.x - curr.fx * (curr.x - prev.x) / denominator)
}
