//! Resilient texture fetch engine.
//!
//! Planning walks the catalog into download tasks; execution fetches each
//! task with bounded retries, skip-on-existing, and atomic commit. Every
//! failure is isolated and counted; no task aborts the batch.

mod engine;
mod plan;

pub use engine::{FetchEngine, FetchObserver, FetchSummary, SilentObserver};
pub use plan::{build_download_url, plan_downloads, DownloadPlan, DownloadTask};
