// crates/analysis-tracker/src/event.rs
//! Observability events broadcast by the tracker.

use caseboard_types::ReportId;

/// Events published on the tracker's broadcast channel.
///
/// This is the structured counterpart to the tracker's log lines: tests
/// and UI indicators subscribe here instead of scraping output. Note that
/// `QueryFailed` is an event but never a `TrackerError` — a failed poll
/// does not end the tracking session.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// A fresh snapshot replaced the previous one.
    SnapshotApplied { report_id: ReportId },
    /// A progress poll failed to reach the endpoint; retried next tick.
    QueryFailed { report_id: ReportId, message: String },
    /// The job reported `completed`; polling has stopped.
    Completed { report_id: ReportId },
    /// The job reported `failed`; polling has stopped.
    Failed { report_id: ReportId },
    /// Tracking of this report was replaced by a newer `start` call.
    Superseded { report_id: ReportId },
}
