// crates/types/src/options.rs
//! Options accepted by `start` and forwarded to the backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Poll cadence used when the caller does not pick one.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Options for starting a tracked analysis job.
///
/// `interval_ms` is the only option the tracker itself interprets; the
/// whole struct is forwarded verbatim in the start request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
}

impl AnalysisOptions {
    /// Effective tick cadence: `interval_ms` or the 2000 ms default.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }
}
