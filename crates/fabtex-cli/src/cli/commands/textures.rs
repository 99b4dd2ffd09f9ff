//! `fabtex textures` – download variation images into the texture tree.

use anyhow::Result;
use fabtex_core::catalog::Catalog;
use fabtex_core::config::FabtexConfig;
use fabtex_core::fetch::{plan_downloads, DownloadTask, FetchEngine, FetchObserver};
use fabtex_core::http::CurlClient;
use fabtex_core::paths::ProjectPaths;
use std::time::Duration;

/// Console progress: one line per task.
struct ConsoleObserver;

impl FetchObserver for ConsoleObserver {
    fn on_task_start(&self, index: usize, total: usize, task: &DownloadTask) {
        println!(
            "[{index}/{total}] {} / {} -> {}.jpg",
            task.collection, task.subcollection, task.pattern
        );
    }
}

pub fn run_textures(catalog: &Catalog, paths: &ProjectPaths, cfg: &FabtexConfig) -> Result<()> {
    println!("Destination: {}", paths.texture_root.display());

    let plan = plan_downloads(catalog, &paths.texture_root, &cfg.image_host);
    println!("{} download task(s) planned", plan.tasks.len());

    let client = CurlClient::new(Duration::from_secs(cfg.request_timeout_secs));
    let engine = FetchEngine::new(&client, cfg.retry_policy());
    let summary = engine.run(&plan, &ConsoleObserver);

    println!("-------------------------------------");
    println!(
        "Downloaded: {}, Skipped: {}, Failed: {}",
        summary.downloaded, summary.skipped, summary.failed
    );
    if !summary.errors.is_empty() {
        println!("Errors:");
        for e in &summary.errors {
            println!(" - {e}");
        }
    }

    if !summary.is_success() {
        anyhow::bail!("{} download(s) failed", summary.failed);
    }
    Ok(())
}
