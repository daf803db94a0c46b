use super::Record;

/// Event emitted by the secant solver after each step.
///
/// The event is emitted before the step is appended to the trace, so
/// `history` holds only the steps that came before `record`.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just taken.
    pub record: &'a Record,

    /// Every earlier step, oldest first.
    pub history: &'a [Record],
}

impl Event<'_> {
    /// Returns the step number (1-based).
    #[must_use]
    pub fn iter(&self) -> usize {
        self.record.iter
    }

    /// Returns the new estimate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.record.x_next
    }

    /// Returns the function value at the new estimate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.record.f_next
    }

    /// Returns the step displacement.
    #[must_use]
    pub fn error(&self) -> f64 {
        self.record.error
    }
}
