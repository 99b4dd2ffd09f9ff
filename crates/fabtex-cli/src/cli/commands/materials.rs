//! `fabtex materials` – print material-instance specs, optionally apply.

use anyhow::Result;
use fabtex_core::catalog::Catalog;
use fabtex_core::material::{apply_specs, build_material_specs, NoopBackend};
use fabtex_core::paths::ProjectPaths;

pub fn run_materials(catalog: &Catalog, paths: &ProjectPaths, apply: bool) -> Result<()> {
    let specs = build_material_specs(catalog, paths);

    // Always print the full array so the result can be validated.
    println!("{}", serde_json::to_string_pretty(&specs)?);
    println!("{} material spec(s)", specs.len());

    if apply {
        let (applied, errors) = apply_specs(&NoopBackend, &specs);
        println!("Applied {applied} spec(s) via backend");
        if !errors.is_empty() {
            for e in &errors {
                println!(" - {e}");
            }
            anyhow::bail!("{} spec(s) failed to apply", errors.len());
        }
    }
    Ok(())
}
