//! Project path resolution: filesystem roots and the logical package root.

use std::path::{Path, PathBuf};

use crate::config::FabtexConfig;

/// Resolved roots for one project, all vendor-qualified.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Where the texture tree and downloads live.
    pub texture_root: PathBuf,
    /// Where the material asset files live on disk.
    pub material_root: PathBuf,
    /// Logical package root in the content tool (forward slashes).
    pub package_root: String,
    /// Object path of the parent material for generated instances.
    pub parent_material: String,
}

impl ProjectPaths {
    /// Derives all roots from the config and a resolved project root.
    pub fn resolve(cfg: &FabtexConfig, project_root: &Path) -> Self {
        let texture_root = join_subdir(project_root, &cfg.texture_subdir).join(&cfg.vendor);
        let material_root = join_subdir(project_root, &cfg.material_subdir).join(&cfg.vendor);
        let package_root = format!("{}/{}", cfg.package_root.trim_end_matches('/'), cfg.vendor);
        Self {
            texture_root,
            material_root,
            package_root,
            parent_material: cfg.parent_material.clone(),
        }
    }
}

/// Joins a config-supplied relative subdir (always written with `/`)
/// onto a root path component by component.
fn join_subdir(root: &Path, subdir: &str) -> PathBuf {
    let mut out = root.to_path_buf();
    for part in subdir.split('/').filter(|p| !p.is_empty()) {
        out.push(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_vendor_qualified_roots() {
        let cfg = FabtexConfig::default();
        let paths = ProjectPaths::resolve(&cfg, Path::new("/proj"));
        assert_eq!(
            paths.texture_root,
            Path::new("/proj/Content/Texture/MayerFabrics")
        );
        assert_eq!(
            paths.material_root,
            Path::new("/proj/Content/Materials/MayerFabrics")
        );
        assert_eq!(paths.package_root, "/Game/Materials/MayerFabrics");
        assert_eq!(paths.parent_material, "/Game/Materials/MI_Sample.MI_Sample");
    }

    #[test]
    fn package_root_trailing_slash_normalized() {
        let cfg = FabtexConfig {
            package_root: "/Game/Materials/".to_string(),
            ..Default::default()
        };
        let paths = ProjectPaths::resolve(&cfg, Path::new("/proj"));
        assert_eq!(paths.package_root, "/Game/Materials/MayerFabrics");
    }
}
