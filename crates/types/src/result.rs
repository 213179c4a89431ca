// crates/types/src/result.rs
//! Final analysis result fetched once a job reports `completed`.

use serde::{Deserialize, Serialize};

use crate::progress::ReportId;

/// Urgency attached to the analysis summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Per-evidence-item outcome, in the order the backend processed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceOutcome {
    pub evidence_id: u64,
    pub finding: String,
    pub confidence: f64,
}

/// Human-oriented summary block of a completed analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub priority: Priority,
}

/// Full result of a completed analysis job. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub report_id: ReportId,
    pub total_items: u64,
    pub processed_items: u64,
    pub outcomes: Vec<EvidenceOutcome>,
    /// Aggregate confidence in [0, 1].
    pub overall_confidence: f64,
    pub summary: AnalysisSummary,
}
