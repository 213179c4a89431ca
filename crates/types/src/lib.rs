// crates/types/src/lib.rs
//! Shared wire and domain types for the caseboard analysis tracker.
//!
//! Everything here mirrors the JSON the dashboard backend speaks:
//! structs are `camelCase` on the wire, enums `snake_case`.

pub mod handle;
pub mod options;
pub mod progress;
pub mod result;

pub use handle::AnalysisHandle;
pub use options::{AnalysisOptions, DEFAULT_POLL_INTERVAL_MS};
pub use progress::{AnalysisStatus, ProgressSnapshot, ReportId};
pub use result::{AnalysisResult, AnalysisSummary, EvidenceOutcome, Priority};
