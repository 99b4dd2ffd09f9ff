//! `fabtex folders` – materialize the collection/subcollection tree.

use anyhow::Result;
use fabtex_core::catalog::Catalog;
use fabtex_core::materialize::materialize_tree;
use fabtex_core::paths::ProjectPaths;

pub fn run_folders(catalog: &Catalog, paths: &ProjectPaths) -> Result<()> {
    println!("Destination: {}", paths.texture_root.display());

    let summary = materialize_tree(catalog, &paths.texture_root);

    println!("-------------------------------------");
    println!("Summary:");
    println!("  Collections created      : {}", summary.collections_created);
    println!("  Collections existing     : {}", summary.collections_existing);
    println!("  Subcollections created   : {}", summary.subcollections_created);
    println!("  Subcollections existing  : {}", summary.subcollections_existing);
    println!("-------------------------------------");

    if !summary.errors.is_empty() {
        println!("Errors:");
        for e in &summary.errors {
            println!(" - {e}");
        }
        anyhow::bail!("{} folder(s) could not be created", summary.errors.len());
    }
    Ok(())
}
