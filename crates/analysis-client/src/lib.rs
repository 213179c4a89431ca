// crates/analysis-client/src/lib.rs
//! Client for the dashboard's report-analysis endpoint.
//!
//! Provides:
//! - `AnalysisApi` — the trait the tracker consumes
//! - `HttpAnalysisClient` — reqwest implementation against the REST backend
//! - `ApiError` — per-operation failure taxonomy

pub mod api;
pub mod error;
pub mod http;

pub use api::AnalysisApi;
pub use error::ApiError;
pub use http::HttpAnalysisClient;
