// crates/types/src/progress.rs
//! Progress snapshot types polled from the analysis endpoint.

use serde::{Deserialize, Serialize};

/// Identifier of the report an analysis job runs over.
pub type ReportId = u64;

/// Status of a server-side analysis job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    /// Whether this status ends polling for the subject.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// One point-in-time report of job progress.
///
/// Each poll produces a fresh snapshot that wholly replaces the previous
/// one; snapshots are never merged or mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub report_id: ReportId,
    pub status: AnalysisStatus,
    /// Percentage in 0–100. The backend guarantees 100 on `completed`.
    pub progress: u8,
    pub processed_items: u64,
    pub total_items: u64,
    /// Label of the evidence item currently being analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_item: Option<String>,
    /// Advisory estimate only — the tracker never acts on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_seconds: Option<u64>,
}
