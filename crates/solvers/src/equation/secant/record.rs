/// One secant step.
///
/// Steps are numbered from 1. Within a [`Trace`](super::Trace), the window
/// slides by one iterate per step: `x_prev` and `x_curr` of step `k + 1` are
/// `x_curr` and `x_next` of step `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Step number, starting at 1.
    pub iter: usize,

    /// Older of the two iterates the secant line passes through.
    pub x_prev: f64,

    /// Newer of the two iterates the secant line passes through.
    pub x_curr: f64,

    /// New estimate where the secant line crosses zero.
    pub x_next: f64,

    /// Function value at `x_next`.
    pub f_next: f64,

    /// Step displacement `|x_next - x_curr|`.
    pub error: f64,
}

impl Record {
    /// Returns true if `next` continues the sliding window from `self`.
    #[must_use]
    pub fn is_followed_by(&self, next: &Record) -> bool {
        next.iter == self.iter + 1
            && next.x_prev.to_bits() == self.x_curr.to_bits()
            && next.x_curr.to_bits() == self.x_next.to_bits()
    }
}
