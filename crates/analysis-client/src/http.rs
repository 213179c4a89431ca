// crates/analysis-client/src/http.rs
//! Reqwest implementation of `AnalysisApi` against the dashboard REST API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use caseboard_types::{AnalysisHandle, AnalysisOptions, AnalysisResult, ProgressSnapshot, ReportId};

use crate::api::AnalysisApi;
use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Acknowledgement body of a start request.
#[derive(Debug, Deserialize)]
struct StartAck {
    accepted: bool,
}

/// HTTP client for the report-analysis endpoint.
///
/// Stateless: every call is an independent request/response pair keyed
/// by report id. Session cookies and auth are the embedding app's
/// concern and ride on the underlying `reqwest::Client`.
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Create a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client` (shared
    /// connection pool, preconfigured auth headers).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    fn analysis_url(&self, report_id: ReportId) -> String {
        format!("{}/api/reports/{}/analysis", self.base_url, report_id)
    }

    /// GET `path`, require 2xx, decode the body as `T`.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::decode(e.to_string()))
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisClient {
    async fn start_analysis(
        &self,
        report_id: ReportId,
        options: &AnalysisOptions,
    ) -> Result<AnalysisHandle, ApiError> {
        let body = serde_json::json!({
            "reportId": report_id,
            "options": options,
        });

        let resp = self
            .http
            .post(self.analysis_url(report_id))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(report_id, code = status.as_u16(), "analysis start rejected");
            return Err(ApiError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let ack: StartAck =
            serde_json::from_str(&text).map_err(|e| ApiError::decode(e.to_string()))?;
        if !ack.accepted {
            return Err(ApiError::Rejected);
        }

        Ok(AnalysisHandle::new(report_id))
    }

    async fn fetch_progress(&self, report_id: ReportId) -> Result<ProgressSnapshot, ApiError> {
        let url = format!("{}/progress", self.analysis_url(report_id));
        self.get_json(&url).await
    }

    async fn fetch_result(&self, report_id: ReportId) -> Result<AnalysisResult, ApiError> {
        let url = format!("{}/result", self.analysis_url(report_id));
        self.get_json(&url).await
    }
}
