//! Catalog model and schema adapter.
//!
//! The catalog is a JSON list of collections, each holding subcollections,
//! each holding variations. Two historical field-naming schemes exist; the
//! parser in this module is the single point of compatibility between them.
//! Everything downstream sees only the normalized [`Catalog`].

mod discover;
mod parse;

pub use discover::{resolve_project_root, CatalogLocator};
pub use parse::load_catalog;

use std::path::PathBuf;

/// Errors from catalog discovery and loading. Structural failures here are
/// the only fatal errors in the pipeline; everything downstream is per-node.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no catalog file found; tried:\n{}", candidates.iter().map(|p| format!("  {}", p.display())).collect::<Vec<_>>().join("\n"))]
    NotFound { candidates: Vec<PathBuf> },

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog root must be a list of collections: {path}")]
    Schema { path: PathBuf },
}

/// Normalized catalog: blank-named collections and subcollections have
/// already been dropped by the adapter.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub collections: Vec<Collection>,
}

#[derive(Debug, Clone)]
pub struct Collection {
    /// Name as it appears in the catalog; source of every derived name.
    pub raw_name: String,
    pub subcollections: Vec<Subcollection>,
}

#[derive(Debug, Clone)]
pub struct Subcollection {
    pub raw_name: String,
    pub variations: Vec<Variation>,
}

#[derive(Debug, Clone)]
pub struct Variation {
    /// Display label: `name-pattern` when both are present, else whichever
    /// exists; for a legacy bare string, the string itself.
    pub label: String,
    /// Code used verbatim in the download URL and output filename.
    /// `None` for legacy bare-string variations, which cannot be fetched.
    pub pattern: Option<String>,
}

impl Variation {
    /// Pattern if present and non-blank; entries without one are incomplete.
    pub fn usable_pattern(&self) -> Option<&str> {
        self.pattern.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}
