// crates/analysis-client/src/api.rs
//! AnalysisApi trait defining the interface to the analysis endpoint.

use async_trait::async_trait;

use caseboard_types::{AnalysisHandle, AnalysisOptions, AnalysisResult, ProgressSnapshot, ReportId};

use crate::error::ApiError;

/// Trait for backends that run report analysis jobs.
///
/// Implementations include:
/// - `HttpAnalysisClient` — the dashboard REST backend
/// - test doubles that script responses per call
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Launch an analysis job for the given report.
    async fn start_analysis(
        &self,
        report_id: ReportId,
        options: &AnalysisOptions,
    ) -> Result<AnalysisHandle, ApiError>;

    /// Fetch the latest progress snapshot for the report's job.
    async fn fetch_progress(&self, report_id: ReportId) -> Result<ProgressSnapshot, ApiError>;

    /// Fetch the final result. Only valid after a `completed` snapshot
    /// was observed for the report.
    async fn fetch_result(&self, report_id: ReportId) -> Result<AnalysisResult, ApiError>;
}
