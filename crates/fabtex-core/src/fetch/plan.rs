//! Download task planning: catalog walk and URL construction.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::names::sanitize_folder;

/// Builds the image URL for a variation pattern.
/// Example: `https://images.mayerfabrics.com/item/804-004/image?download=804-004`.
pub fn build_download_url(host: &str, pattern: &str) -> String {
    let pat = pattern.trim();
    format!("{}/item/{pat}/image?download={pat}", host.trim_end_matches('/'))
}

/// One planned fetch. Each variation with a usable pattern maps to
/// exactly one task and one destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub collection: String,
    pub subcollection: String,
    pub pattern: String,
    pub url: String,
    /// `<texture-root>/<coll>/<sub>/<pattern>.jpg`. The `.jpg` extension
    /// is fixed regardless of actual content type (legacy behavior).
    pub dest: PathBuf,
}

/// Planned batch: runnable tasks plus incomplete-entry messages for
/// variations that carry no usable pattern.
#[derive(Debug, Clone, Default)]
pub struct DownloadPlan {
    pub tasks: Vec<DownloadTask>,
    pub incomplete: Vec<String>,
}

/// Walks the catalog into a [`DownloadPlan`]. Destinations use the
/// Windows-safe `sanitize_folder` dialect (matching where downloads have
/// historically landed, not the materializer's lowercase dialect).
pub fn plan_downloads(catalog: &Catalog, texture_root: &Path, image_host: &str) -> DownloadPlan {
    let mut plan = DownloadPlan::default();

    for coll in &catalog.collections {
        let coll_folder = sanitize_folder(&coll.raw_name);
        for sub in &coll.subcollections {
            let sub_folder = sanitize_folder(&sub.raw_name);
            let target_dir = texture_root.join(&coll_folder).join(&sub_folder);

            for var in &sub.variations {
                let Some(pattern) = var.usable_pattern() else {
                    plan.incomplete.push(format!(
                        "missing variation-pattern -> {}/{}",
                        coll.raw_name, sub.raw_name
                    ));
                    continue;
                };
                plan.tasks.push(DownloadTask {
                    collection: coll.raw_name.clone(),
                    subcollection: sub.raw_name.clone(),
                    pattern: pattern.to_string(),
                    url: build_download_url(image_host, pattern),
                    dest: target_dir.join(format!("{pattern}.jpg")),
                });
            }
        }
    }

    plan
}
