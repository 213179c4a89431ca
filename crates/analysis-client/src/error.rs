// crates/analysis-client/src/error.rs
//! Failure taxonomy for analysis endpoint calls.

use thiserror::Error;

/// Errors a single endpoint operation can fail with.
///
/// The tracker decides what each one means per operation: a failed
/// progress query is transient and retried, a failed start or result
/// fetch is surfaced to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned {code}: {body}")]
    Status { code: u16, body: String },

    #[error("malformed response body: {message}")]
    Decode { message: String },

    #[error("start request not accepted by backend")]
    Rejected,
}

impl ApiError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
