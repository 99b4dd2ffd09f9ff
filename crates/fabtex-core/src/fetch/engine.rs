//! Fetch execution: skip-on-existing, retry with backoff, atomic commit.

use std::time::Duration;

use super::plan::{DownloadPlan, DownloadTask};
use crate::http::{HttpClient, HttpError};
use crate::retry::{run_with_retry, RetryPolicy};
use crate::storage;

/// Aggregate result of one batch. Incomplete entries from the plan are
/// folded into `failed` and `errors` (legacy batch behavior); a run with
/// only skips is a success.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: u32,
    pub skipped: u32,
    pub failed: u32,
    /// Human-readable failure descriptions, in task order.
    pub errors: Vec<String>,
}

impl FetchSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Progress/cancellation hook the engine reports to. The cancellation
/// poll is honored between tasks only; an in-flight fetch is never
/// interrupted mid-transfer.
pub trait FetchObserver {
    fn on_task_start(&self, _index: usize, _total: usize, _task: &DownloadTask) {}
    fn on_task_done(&self, _task: &DownloadTask, _result: Result<(), &str>) {}
    fn cancel_requested(&self) -> bool {
        false
    }
}

/// Observer that reports nothing and never cancels.
pub struct SilentObserver;

impl FetchObserver for SilentObserver {}

/// Single-threaded blocking fetch engine. Each task runs to completion
/// before the next begins; the only shared state is the summary counters.
pub struct FetchEngine<'a> {
    client: &'a dyn HttpClient,
    policy: RetryPolicy,
    sleep: Box<dyn Fn(Duration) + 'a>,
}

impl<'a> FetchEngine<'a> {
    pub fn new(client: &'a dyn HttpClient, policy: RetryPolicy) -> Self {
        Self {
            client,
            policy,
            sleep: Box::new(std::thread::sleep),
        }
    }

    /// Replace the backoff sleep (tests inject a no-op or a recorder).
    pub fn with_sleep(mut self, sleep: impl Fn(Duration) + 'a) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    /// Runs one task: exists-check, then fetch with retries, then atomic
    /// write. The existing-file check performs zero network calls.
    fn run_task(&self, task: &DownloadTask) -> Result<bool, HttpError> {
        if task.dest.exists() {
            tracing::debug!(dest = %task.dest.display(), "already present, skipping");
            return Ok(false);
        }

        run_with_retry(&self.policy, |d| (self.sleep)(d), || {
            let body = self.client.get(&task.url)?;
            storage::write_atomic(&task.dest, &body)
                .map_err(|e| HttpError::Other(format!("write {}: {e}", task.dest.display())))
        })?;
        Ok(true)
    }

    /// Executes the whole plan. Cancellation stops before the next task;
    /// tasks not reached are simply not counted.
    pub fn run(&self, plan: &DownloadPlan, observer: &dyn FetchObserver) -> FetchSummary {
        let mut summary = FetchSummary::default();

        for msg in &plan.incomplete {
            summary.failed += 1;
            summary.errors.push(msg.clone());
        }

        let total = plan.tasks.len();
        for (i, task) in plan.tasks.iter().enumerate() {
            if observer.cancel_requested() {
                tracing::info!(done = i, total, "fetch cancelled between tasks");
                break;
            }
            observer.on_task_start(i + 1, total, task);

            match self.run_task(task) {
                Ok(true) => {
                    summary.downloaded += 1;
                    observer.on_task_done(task, Ok(()));
                }
                Ok(false) => {
                    summary.skipped += 1;
                    observer.on_task_done(task, Ok(()));
                }
                Err(e) => {
                    let msg = format!("{}: {}", task.pattern, e);
                    tracing::warn!(pattern = %task.pattern, error = %e, "download failed after retries");
                    observer.on_task_done(task, Err(msg.as_str()));
                    summary.failed += 1;
                    summary.errors.push(msg);
                }
            }
        }

        tracing::info!(
            downloaded = summary.downloaded,
            skipped = summary.skipped,
            failed = summary.failed,
            "fetch batch finished"
        );
        summary
    }
}
