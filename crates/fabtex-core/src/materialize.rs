//! Idempotent directory materialization for the texture tree.
//!
//! Creates one folder per collection and one per subcollection under the
//! texture root, using the lowercase `slugify_dir` dialect. Never deletes
//! or overwrites; a second run over the same catalog is a no-op on disk.

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::names::slugify_dir;

/// Counters and per-node errors from one materialization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub collections_created: u32,
    pub collections_existing: u32,
    pub subcollections_created: u32,
    pub subcollections_existing: u32,
    /// Per-node creation failures (permissions, invalid path). A failed
    /// node does not abort its siblings.
    pub errors: Vec<String>,
}

/// Creates the directory if absent. Returns true when it was created now.
fn ensure_dir(path: &Path) -> std::io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    Ok(true)
}

/// Walks the catalog and ensures collection and subcollection folders
/// exist under `dest_root` (which itself is created if missing).
pub fn materialize_tree(catalog: &Catalog, dest_root: &Path) -> FolderSummary {
    let mut summary = FolderSummary::default();

    if let Err(e) = fs::create_dir_all(dest_root) {
        summary
            .errors
            .push(format!("{}: {}", dest_root.display(), e));
        return summary;
    }

    for coll in &catalog.collections {
        let coll_slug = slugify_dir(&coll.raw_name);
        let coll_path = dest_root.join(&coll_slug);
        match ensure_dir(&coll_path) {
            Ok(true) => {
                summary.collections_created += 1;
                tracing::info!(folder = %coll_slug, "created collection folder");
            }
            Ok(false) => summary.collections_existing += 1,
            Err(e) => {
                summary.errors.push(format!("{}: {}", coll_path.display(), e));
                tracing::warn!(folder = %coll_path.display(), error = %e, "collection folder creation failed");
                continue;
            }
        }

        for sub in &coll.subcollections {
            let sub_slug = slugify_dir(&sub.raw_name);
            let sub_path = coll_path.join(&sub_slug);
            match ensure_dir(&sub_path) {
                Ok(true) => {
                    summary.subcollections_created += 1;
                    tracing::info!(folder = %format!("{coll_slug}/{sub_slug}"), "created subcollection folder");
                }
                Ok(false) => summary.subcollections_existing += 1,
                Err(e) => {
                    summary.errors.push(format!("{}: {}", sub_path.display(), e));
                    tracing::warn!(folder = %sub_path.display(), error = %e, "subcollection folder creation failed");
                }
            }
        }
    }

    summary
}
