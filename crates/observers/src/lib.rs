//! Reusable observers for rootfind solvers.
//!
//! A solver runs synchronously to completion. Anything a caller wants while it
//! runs (a live progress view, a cancel button, a diagnostic log) attaches as
//! an [`Observer`] and is checked once per step.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasRecord`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Cancel`] — cooperative cancellation from another thread
//! - [`Progress`] — forwards each step's record through a channel
//! - [`LineLog`] — writes one line per step to any [`std::io::Write`]
//!
//! Observers compose as pairs: `(Progress::new(tx), cancel)` runs both.
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasRecord`]: traits::HasRecord
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod line_log;
mod progress;

pub use cancel::{Cancel, CancelHandle};
pub use line_log::LineLog;
pub use progress::Progress;
