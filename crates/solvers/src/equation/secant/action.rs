/// Control actions supported by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report the step just observed as the final estimate.
    ///
    /// This is the hook for cooperative cancellation. The solver checks for it
    /// once per step, after the non-finite and convergence tests, so a stop
    /// requested on a converging step still reports [`Status::Converged`].
    ///
    /// [`Status::Converged`]: super::Status::Converged
    StopEarly,
}
