// crates/analysis-tracker/src/error.rs
//! Errors the tracker surfaces to its caller via `last_error`.

use thiserror::Error;

/// Terminal failure kinds observable through the tracker.
///
/// A failed progress poll is deliberately absent: it is transient, never
/// surfaced here, and retried on the next tick (see `TrackerEvent::
/// QueryFailed` for the observable trace of it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("analysis could not be started: {message}")]
    StartFailed { message: String },

    #[error("analysis job failed")]
    JobFailed,

    #[error("analysis completed but the result could not be retrieved: {message}")]
    ResultFetchFailed { message: String },
}

impl TrackerError {
    /// Stable kind string for logging and UI dispatch.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StartFailed { .. } => "start_failed",
            Self::JobFailed => "job_failed",
            Self::ResultFetchFailed { .. } => "result_fetch_failed",
        }
    }
}
