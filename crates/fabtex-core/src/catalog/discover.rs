//! Catalog file discovery and project root resolution.

use std::path::{Path, PathBuf};

use super::CatalogError;

/// How many ancestor levels the search climbs when nothing closer matches.
const ASCEND_LEVELS: usize = 4;

/// Builds the ordered candidate list for the catalog file and picks the
/// first that exists.
///
/// Priority: explicit path, `COLLECTIONS_JSON` env var, configured
/// absolute candidates, conventional filenames next to `search_dir`,
/// then `<scripts_dir_name>/` variants while walking up the ancestors.
#[derive(Debug, Clone)]
pub struct CatalogLocator {
    /// Path given on the command line, if any. Must exist when set.
    pub explicit: Option<PathBuf>,
    /// Environment variable consulted after the explicit path.
    pub env_var: String,
    /// Configured absolute paths probed before the conventional ones.
    pub manual_candidates: Vec<PathBuf>,
    /// Directory the conventional search starts from (normally the cwd).
    pub search_dir: PathBuf,
    /// Directory name that marks the scripts folder (legacy: `Python`).
    pub scripts_dir_name: String,
    /// Conventional filenames, in priority order.
    pub filenames: Vec<String>,
}

impl CatalogLocator {
    /// Full candidate list, deduplicated preserving order. Exposed so the
    /// NotFound error can report everything that was tried.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut out: Vec<PathBuf> = Vec::new();
        let mut push = |p: PathBuf| {
            if !out.contains(&p) {
                out.push(p);
            }
        };

        if let Ok(env_path) = std::env::var(&self.env_var) {
            if !env_path.trim().is_empty() {
                push(PathBuf::from(env_path));
            }
        }
        for p in &self.manual_candidates {
            push(p.clone());
        }
        for name in &self.filenames {
            push(self.search_dir.join(name));
        }

        let mut current = self.search_dir.clone();
        for _ in 0..ASCEND_LEVELS {
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
            for name in &self.filenames {
                push(current.join(&self.scripts_dir_name).join(name));
                push(current.join(name));
            }
        }

        out
    }

    /// Locates the catalog file, or fails with the full candidate list.
    pub fn locate(&self) -> Result<PathBuf, CatalogError> {
        if let Some(explicit) = &self.explicit {
            if explicit.exists() {
                tracing::debug!(path = %explicit.display(), "using explicit catalog path");
                return Ok(explicit.clone());
            }
            return Err(CatalogError::NotFound {
                candidates: vec![explicit.clone()],
            });
        }

        let candidates = self.candidates();
        for cand in &candidates {
            if cand.exists() {
                tracing::debug!(path = %cand.display(), "catalog found");
                return Ok(cand.clone());
            }
        }
        Err(CatalogError::NotFound { candidates })
    }
}

/// Project root for a located catalog file: the parent of the catalog's
/// directory when that directory bears the scripts-dir name (case
/// insensitive), else the catalog's directory itself.
pub fn resolve_project_root(catalog_file: &Path, scripts_dir_name: &str) -> PathBuf {
    let dir = catalog_file.parent().unwrap_or(Path::new("."));
    let is_scripts_dir = dir
        .file_name()
        .map(|n| n.to_string_lossy().eq_ignore_ascii_case(scripts_dir_name))
        .unwrap_or(false);
    if is_scripts_dir {
        dir.parent().unwrap_or(dir).to_path_buf()
    } else {
        dir.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn locator(search_dir: PathBuf) -> CatalogLocator {
        CatalogLocator {
            explicit: None,
            // Point at a variable that is never set so the environment
            // cannot leak into test candidate lists.
            env_var: "FABTEX_TEST_UNSET_CATALOG".to_string(),
            manual_candidates: Vec::new(),
            search_dir,
            scripts_dir_name: "Python".to_string(),
            filenames: vec!["collections.json".to_string()],
        }
    }

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, "[]").unwrap();
        let mut loc = locator(dir.path().to_path_buf());
        loc.explicit = Some(path.clone());
        assert_eq!(loc.locate().unwrap(), path);
    }

    #[test]
    fn missing_explicit_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut loc = locator(dir.path().to_path_buf());
        loc.explicit = Some(dir.path().join("absent.json"));
        let err = loc.locate().unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { candidates } if candidates.len() == 1));
    }

    #[test]
    fn finds_conventional_file_in_search_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collections.json");
        fs::write(&path, "[]").unwrap();
        let loc = locator(dir.path().to_path_buf());
        assert_eq!(loc.locate().unwrap(), path);
    }

    #[test]
    fn finds_scripts_dir_variant_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("a").join("b");
        fs::create_dir_all(&deep).unwrap();
        let scripts = dir.path().join("Python");
        fs::create_dir_all(&scripts).unwrap();
        let path = scripts.join("collections.json");
        fs::write(&path, "[]").unwrap();
        let loc = locator(deep);
        assert_eq!(loc.locate().unwrap(), path);
    }

    #[test]
    fn not_found_reports_all_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let loc = locator(dir.path().to_path_buf());
        let err = loc.locate().unwrap_err();
        match err {
            CatalogError::NotFound { candidates } => {
                assert!(candidates.contains(&dir.path().join("collections.json")));
                assert!(candidates.len() > 1);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn project_root_is_parent_of_scripts_dir() {
        assert_eq!(
            resolve_project_root(Path::new("/proj/Python/collections.json"), "Python"),
            Path::new("/proj")
        );
        assert_eq!(
            resolve_project_root(Path::new("/proj/python/collections.json"), "Python"),
            Path::new("/proj")
        );
        assert_eq!(
            resolve_project_root(Path::new("/proj/collections.json"), "Python"),
            Path::new("/proj")
        );
    }
}
