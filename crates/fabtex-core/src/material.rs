//! Material-instance spec derivation and the editor capability seam.
//!
//! One [`MaterialSpec`] per variation whose collection, subcollection,
//! and variation tokens are all non-empty; incomplete entries are dropped
//! rather than padded with placeholders. Specs are computed fresh on
//! every run and either printed or handed to an [`AssetBackend`].

use serde::Serialize;

use crate::catalog::Catalog;
use crate::names::{sanitize_folder, sanitize_token};
use crate::paths::ProjectPaths;

/// Asset name prefix for material instances.
const NAME_PREFIX: &str = "MI";

/// Fully-resolved identifier/path bundle for one variation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MaterialSpec {
    /// `MI_<COLLECTION>_<SUBCOLLECTION>_<VARIATION>` token form.
    pub name: String,
    /// Logical folder the asset lives in.
    pub package_path: String,
    /// `package_path/name`.
    pub asset_path: String,
    /// `asset_path.name` (object-in-package form).
    pub object_path: String,
    /// On-disk `.uasset` location under the material root.
    pub filesystem_path: String,
    /// Parent material object path every instance derives from.
    pub parent: String,
}

/// Derives the spec list for a catalog. Variations without a usable
/// pattern, and entries whose tokens come out empty, are skipped here;
/// they are surfaced as incomplete by the fetch planner, which owns
/// per-entry error reporting.
pub fn build_material_specs(catalog: &Catalog, paths: &ProjectPaths) -> Vec<MaterialSpec> {
    let mut specs = Vec::new();

    for coll in &catalog.collections {
        let coll_token = sanitize_token(&coll.raw_name);
        let coll_folder = sanitize_folder(&coll.raw_name);
        for sub in &coll.subcollections {
            let sub_token = sanitize_token(&sub.raw_name);
            let sub_folder = sanitize_folder(&sub.raw_name);
            for var in &sub.variations {
                if var.usable_pattern().is_none() {
                    continue;
                }
                let var_token = sanitize_token(&var.label);
                if coll_token.is_empty() || sub_token.is_empty() || var_token.is_empty() {
                    continue;
                }
                let name = format!("{NAME_PREFIX}_{coll_token}_{sub_token}_{var_token}");
                let package_path =
                    format!("{}/{}/{}", paths.package_root, coll_folder, sub_folder);
                let asset_path = format!("{package_path}/{name}");
                let object_path = format!("{asset_path}.{name}");
                let filesystem_path = paths
                    .material_root
                    .join(&coll_folder)
                    .join(&sub_folder)
                    .join(format!("{name}.uasset"))
                    .to_string_lossy()
                    .into_owned();
                specs.push(MaterialSpec {
                    name,
                    package_path,
                    asset_path,
                    object_path,
                    filesystem_path,
                    parent: paths.parent_material.clone(),
                });
            }
        }
    }

    specs
}

/// Capability interface of the hosting content tool. The core never
/// branches on "are we inside the editor"; it talks to this trait and the
/// host substitutes a real implementation when embedded.
pub trait AssetBackend {
    /// Ensure the logical folder exists in the content tool.
    fn ensure_directory(&self, package_path: &str) -> anyhow::Result<()>;
    /// Create the material instance (or update its parent if it exists).
    fn create_material_instance(&self, spec: &MaterialSpec) -> anyhow::Result<()>;
}

/// Backend used outside the editor host: logs and succeeds.
pub struct NoopBackend;

impl AssetBackend for NoopBackend {
    fn ensure_directory(&self, package_path: &str) -> anyhow::Result<()> {
        tracing::debug!(package_path, "no editor host; directory not created");
        Ok(())
    }

    fn create_material_instance(&self, spec: &MaterialSpec) -> anyhow::Result<()> {
        tracing::debug!(object_path = %spec.object_path, "no editor host; material instance not created");
        Ok(())
    }
}

/// Drives a backend over the spec list: directory first, then the asset.
/// Returns how many specs were applied; a per-spec failure is logged and
/// counted but does not abort the rest.
pub fn apply_specs(backend: &dyn AssetBackend, specs: &[MaterialSpec]) -> (usize, Vec<String>) {
    let mut applied = 0;
    let mut errors = Vec::new();
    for spec in specs {
        let result = backend
            .ensure_directory(&spec.package_path)
            .and_then(|_| backend.create_material_instance(spec));
        match result {
            Ok(()) => applied += 1,
            Err(e) => {
                tracing::warn!(name = %spec.name, error = %e, "spec application failed");
                errors.push(format!("{}: {}", spec.name, e));
            }
        }
    }
    (applied, errors)
}
