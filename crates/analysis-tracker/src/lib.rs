// crates/analysis-tracker/src/lib.rs
//! Client-side tracker for long-running report analysis jobs.
//!
//! The backend executes the analysis; this crate owns the orchestration
//! contract around it:
//! - `AnalysisTracker` — start a job, poll it, tear everything down on
//!   completion, failure, or explicit stop
//! - `PollScheduler` — at most one repeating timer per tracker, rebindable
//!   to a new subject
//! - `ProgressStore` — latest snapshot/result plus the analyzing flag and
//!   last error, exclusively mutated by the tracker
//! - `TrackerEvent` — observability channel, so transient poll failures
//!   can be asserted on without scraping log output
//!
//! Two rules make the interleaving safe without a mutex around the whole
//! reduction: snapshots are replaced wholesale (last write wins), and a
//! staleness guard discards any response whose tracking session is no
//! longer current.

pub mod error;
pub mod event;
pub mod scheduler;
pub mod store;
pub mod tracker;

pub use error::TrackerError;
pub use event::TrackerEvent;
pub use scheduler::PollScheduler;
pub use store::ProgressStore;
pub use tracker::AnalysisTracker;
