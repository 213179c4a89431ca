// crates/analysis-tracker/src/tracker.rs
//! Orchestrating controller for one tracked analysis job.

use std::sync::Arc;

use tokio::sync::broadcast;

use caseboard_analysis_client::AnalysisApi;
use caseboard_types::{AnalysisOptions, AnalysisResult, AnalysisStatus, ProgressSnapshot, ReportId};

use crate::error::TrackerError;
use crate::event::TrackerEvent;
use crate::scheduler::PollScheduler;
use crate::store::ProgressStore;

/// Tracks one server-side analysis job at a time: starts it, polls its
/// progress on a fixed cadence, and tears the session down on completion,
/// failure, or explicit stop.
///
/// Starting while another report is tracked supersedes it — the old timer
/// is disarmed strictly before the new session begins, and the staleness
/// guard in [`ProgressStore`] discards any response the old session still
/// has in flight. Each UI view that tracks independently owns its own
/// instance; nothing here is process-global.
pub struct AnalysisTracker {
    api: Arc<dyn AnalysisApi>,
    store: Arc<ProgressStore>,
    scheduler: Arc<PollScheduler>,
    events: broadcast::Sender<TrackerEvent>,
}

impl AnalysisTracker {
    pub fn new(api: Arc<dyn AnalysisApi>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            api,
            store: Arc::new(ProgressStore::new()),
            scheduler: Arc::new(PollScheduler::new()),
            events,
        }
    }

    /// Start tracking an analysis job for `report_id`.
    ///
    /// Never returns an error: a failed start is recorded as
    /// `TrackerError::StartFailed` in `last_error` and leaves the
    /// scheduler disarmed. On success the scheduler is armed on the
    /// options' poll cadence and one immediate query is issued, so the
    /// caller observes initial status without waiting a full interval.
    pub async fn start(&self, report_id: ReportId, options: AnalysisOptions) {
        // Supersede any session in flight: its timer goes down before the
        // new session exists, so no old tick can observe the new state.
        if let Some(previous) = self.store.current_report() {
            self.scheduler.disarm();
            tracing::info!(
                report_id = previous,
                superseded_by = report_id,
                "superseding tracked analysis"
            );
            let _ = self.events.send(TrackerEvent::Superseded {
                report_id: previous,
            });
        }

        let generation = self.store.begin(report_id);
        tracing::info!(report_id, "starting analysis");

        match self.api.start_analysis(report_id, &options).await {
            Ok(handle) => {
                // Stopped or superseded while the start call was in flight.
                if !self.store.record_started(generation, handle) {
                    tracing::debug!(report_id, "tracking ended before start call returned");
                    return;
                }
            }
            Err(e) => {
                tracing::warn!(report_id, error = %e, "analysis start failed");
                self.store.record_start_failure(generation, e.to_string());
                return;
            }
        }

        let interval = options.poll_interval();
        let api = Arc::clone(&self.api);
        let store = Arc::clone(&self.store);
        let scheduler = Arc::clone(&self.scheduler);
        let events = self.events.clone();
        self.scheduler.arm(interval, move || {
            let api = Arc::clone(&api);
            let store = Arc::clone(&store);
            let scheduler = Arc::clone(&scheduler);
            let events = events.clone();
            async move {
                poll_once(&api, &store, &scheduler, &events, generation, report_id).await;
            }
        });

        // First query fires now rather than one interval from now. Spawned,
        // not awaited: a slow endpoint must not stall the caller.
        let api = Arc::clone(&self.api);
        let store = Arc::clone(&self.store);
        let scheduler = Arc::clone(&self.scheduler);
        let events = self.events.clone();
        tokio::spawn(async move {
            poll_once(&api, &store, &scheduler, &events, generation, report_id).await;
        });
    }

    /// Stop tracking. Idempotent; safe when nothing is tracked.
    ///
    /// The last observed snapshot, result, and error stay readable — only
    /// the timer and the current-subject binding are torn down. A query
    /// already in flight for the stopped report is discarded by the
    /// staleness guard when it lands.
    pub fn stop(&self) {
        self.scheduler.disarm();
        self.store.clear_tracking();
    }

    /// Subscribe to tracker events.
    pub fn events(&self) -> broadcast::Receiver<TrackerEvent> {
        self.events.subscribe()
    }

    // -- Observers ------------------------------------------------------------

    pub fn current_progress(&self) -> Option<ProgressSnapshot> {
        self.store.latest_snapshot()
    }

    pub fn current_result(&self) -> Option<AnalysisResult> {
        self.store.latest_result()
    }

    pub fn is_analyzing(&self) -> bool {
        self.store.is_analyzing()
    }

    pub fn last_error(&self) -> Option<TrackerError> {
        self.store.last_error()
    }

    pub fn current_report(&self) -> Option<ReportId> {
        self.store.current_report()
    }
}

impl Drop for AnalysisTracker {
    fn drop(&mut self) {
        self.scheduler.disarm();
    }
}

/// One reduction step: query progress and fold the response into the store.
///
/// Runs for the immediate query at start and for every scheduler tick. A
/// transport failure leaves the session exactly as it was — armed, still
/// analyzing, no `last_error` — and the next tick retries; only the backend
/// saying `failed` ends the session with an error. Terminal statuses disarm
/// the scheduler from inside the tick, which the scheduler tolerates.
async fn poll_once(
    api: &Arc<dyn AnalysisApi>,
    store: &ProgressStore,
    scheduler: &PollScheduler,
    events: &broadcast::Sender<TrackerEvent>,
    generation: u64,
    report_id: ReportId,
) {
    let snapshot = match api.fetch_progress(report_id).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            // Transient: we failed to ask, the job did not fail.
            tracing::debug!(report_id, error = %e, "progress query failed, will retry");
            let _ = events.send(TrackerEvent::QueryFailed {
                report_id,
                message: e.to_string(),
            });
            return;
        }
    };

    let Some(status) = store.apply_snapshot(generation, report_id, snapshot) else {
        tracing::debug!(report_id, "discarding stale progress response");
        return;
    };
    let _ = events.send(TrackerEvent::SnapshotApplied { report_id });

    match status {
        AnalysisStatus::Completed => {
            scheduler.disarm();
            tracing::info!(report_id, "analysis completed");
            let _ = events.send(TrackerEvent::Completed { report_id });
            match api.fetch_result(report_id).await {
                Ok(result) => {
                    if !store.set_result(generation, result) {
                        tracing::debug!(report_id, "discarding result for superseded session");
                    }
                }
                Err(e) => {
                    tracing::warn!(report_id, error = %e, "result fetch failed");
                    store.record_result_failure(generation, e.to_string());
                }
            }
        }
        AnalysisStatus::Failed => {
            scheduler.disarm();
            tracing::warn!(report_id, "analysis failed");
            let _ = events.send(TrackerEvent::Failed { report_id });
        }
        AnalysisStatus::Pending | AnalysisStatus::Processing => {}
    }
}
