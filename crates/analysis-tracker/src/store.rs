// crates/analysis-tracker/src/store.rs
//! State store for the currently tracked analysis job.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use caseboard_types::{AnalysisHandle, AnalysisResult, AnalysisStatus, ProgressSnapshot, ReportId};

use crate::error::TrackerError;

/// Mutable state of one tracking session.
///
/// `generation` counts `begin` calls. Every poll response carries the
/// generation it was issued under; a response whose generation is no
/// longer current belongs to a superseded session and is discarded.
#[derive(Debug, Default)]
struct TrackerState {
    generation: u64,
    current_report: Option<ReportId>,
    handle: Option<AnalysisHandle>,
    latest_snapshot: Option<ProgressSnapshot>,
    latest_result: Option<AnalysisResult>,
    last_error: Option<TrackerError>,
}

/// Holds the latest known snapshot and result for the tracked report.
///
/// Exclusively mutated by the tracker. The `analyzing` flag is an atomic
/// so UI indicators read it wait-free; the structured fields share one
/// `RwLock` because the staleness check and the field mutation it guards
/// must happen in a single critical section. No lock is ever held across
/// a suspension point.
pub struct ProgressStore {
    analyzing: AtomicBool,
    inner: RwLock<TrackerState>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self {
            analyzing: AtomicBool::new(false),
            inner: RwLock::new(TrackerState::default()),
        }
    }

    /// Begin a new tracking session for `report_id`, clearing the previous
    /// session's snapshot, result, and error. Returns the new generation.
    pub fn begin(&self, report_id: ReportId) -> u64 {
        match self.inner.write() {
            Ok(mut state) => {
                state.generation += 1;
                state.current_report = Some(report_id);
                state.handle = None;
                state.latest_snapshot = None;
                state.latest_result = None;
                state.last_error = None;
                self.analyzing.store(true, Ordering::Relaxed);
                state.generation
            }
            Err(e) => {
                tracing::error!("ProgressStore lock poisoned during begin: {e}");
                0
            }
        }
    }

    /// Record the handle of a successfully started job. Returns false if
    /// the session was superseded or stopped while the start call was in
    /// flight, in which case polling must not begin.
    pub fn record_started(&self, generation: u64, handle: AnalysisHandle) -> bool {
        match self.inner.write() {
            Ok(mut state)
                if state.generation == generation
                    && state.current_report == Some(handle.report_id()) =>
            {
                state.handle = Some(handle);
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::error!("ProgressStore lock poisoned during record_started: {e}");
                false
            }
        }
    }

    /// Record that the start call failed. The session keeps its subject
    /// (callers may retry or stop) but is no longer analyzing.
    pub fn record_start_failure(&self, generation: u64, message: String) {
        if let Ok(mut state) = self.inner.write() {
            if state.generation == generation {
                state.last_error = Some(TrackerError::StartFailed { message });
                self.analyzing.store(false, Ordering::Relaxed);
            }
        }
    }

    /// Apply a polled snapshot, staleness-guarded.
    ///
    /// The guard compares the subject captured at query time against the
    /// current one *at application time*: a late response from a
    /// superseded or stopped session returns `None` and mutates nothing.
    /// An accepted snapshot replaces the previous one wholesale; a
    /// terminal status also ends the session (subject cleared, analyzing
    /// flag dropped, `JobFailed` recorded on failure). Returns the applied
    /// status so the caller can disarm and fetch the result outside the
    /// lock.
    pub fn apply_snapshot(
        &self,
        generation: u64,
        report_id: ReportId,
        snapshot: ProgressSnapshot,
    ) -> Option<AnalysisStatus> {
        let mut state = match self.inner.write() {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("ProgressStore lock poisoned during apply_snapshot: {e}");
                return None;
            }
        };

        if state.generation != generation || state.current_report != Some(report_id) {
            return None;
        }

        let status = snapshot.status;
        state.latest_snapshot = Some(snapshot);

        if status.is_terminal() {
            state.current_report = None;
            state.handle = None;
            self.analyzing.store(false, Ordering::Relaxed);
            if status == AnalysisStatus::Failed {
                state.last_error = Some(TrackerError::JobFailed);
            }
        }

        Some(status)
    }

    /// Store the final result, unless a newer session has begun since the
    /// completed snapshot was observed. Returns whether it was stored.
    pub fn set_result(&self, generation: u64, result: AnalysisResult) -> bool {
        match self.inner.write() {
            Ok(mut state) if state.generation == generation => {
                state.latest_result = Some(result);
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::error!("ProgressStore lock poisoned during set_result: {e}");
                false
            }
        }
    }

    /// Record that the completed job's result could not be fetched. The
    /// completed snapshot stays available.
    pub fn record_result_failure(&self, generation: u64, message: String) {
        if let Ok(mut state) = self.inner.write() {
            if state.generation == generation {
                state.last_error = Some(TrackerError::ResultFetchFailed { message });
            }
        }
    }

    /// End the session without touching the last observed snapshot,
    /// result, or error. Safe to call when nothing is tracked.
    pub fn clear_tracking(&self) {
        if let Ok(mut state) = self.inner.write() {
            state.current_report = None;
            state.handle = None;
        }
        self.analyzing.store(false, Ordering::Relaxed);
    }

    // -- Observers ------------------------------------------------------------

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.load(Ordering::Relaxed)
    }

    pub fn current_report(&self) -> Option<ReportId> {
        self.inner.read().ok().and_then(|s| s.current_report)
    }

    /// Handle of the started job, if the session reached the polling phase.
    pub fn handle(&self) -> Option<AnalysisHandle> {
        self.inner.read().ok().and_then(|s| s.handle)
    }

    pub fn latest_snapshot(&self) -> Option<ProgressSnapshot> {
        self.inner.read().ok().and_then(|s| s.latest_snapshot.clone())
    }

    pub fn latest_result(&self) -> Option<AnalysisResult> {
        self.inner.read().ok().and_then(|s| s.latest_result.clone())
    }

    pub fn last_error(&self) -> Option<TrackerError> {
        self.inner.read().ok().and_then(|s| s.last_error.clone())
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}
