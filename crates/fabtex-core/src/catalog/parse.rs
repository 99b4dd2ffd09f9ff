//! Raw serde structures for both catalog schemas and normalization.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{Catalog, CatalogError, Collection, Subcollection, Variation};

/// One collection as serialized. New schema uses `collection-name`,
/// the old one `collection`; both use `subcollection` for the list.
#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "collection-name", default)]
    collection_name: Option<String>,
    #[serde(default)]
    collection: Option<String>,
    #[serde(default)]
    subcollection: Vec<RawSubcollection>,
}

#[derive(Debug, Deserialize)]
struct RawSubcollection {
    #[serde(rename = "subcollection-name", default)]
    subcollection_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    /// New schema: list of structured entries.
    #[serde(default)]
    variations: Option<Vec<RawVariation>>,
    /// Old schema: list of bare strings.
    #[serde(default)]
    variation: Option<Vec<RawVariation>>,
}

/// A variation is either a structured entry (new) or a bare string (old).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawVariation {
    Entry {
        #[serde(rename = "variation-name", default)]
        name: Option<String>,
        #[serde(rename = "variation-pattern", default)]
        pattern: Option<String>,
    },
    Bare(String),
}

/// First non-blank of the candidate fields, trimmed.
fn first_non_blank(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

impl RawCollection {
    fn name(&self) -> Option<String> {
        first_non_blank(&[&self.collection_name, &self.collection])
    }
}

impl RawSubcollection {
    fn name(&self) -> Option<String> {
        first_non_blank(&[&self.subcollection_name, &self.name])
    }

    fn variations(&self) -> &[RawVariation] {
        self.variations
            .as_deref()
            .or(self.variation.as_deref())
            .unwrap_or(&[])
    }
}

impl RawVariation {
    fn normalize(&self) -> Variation {
        match self {
            RawVariation::Entry { name, pattern } => {
                let name = name.as_deref().map(str::trim).unwrap_or("");
                let pattern = pattern.as_deref().map(str::trim).unwrap_or("");
                let label = if !name.is_empty() && !pattern.is_empty() {
                    format!("{name}-{pattern}")
                } else if !name.is_empty() {
                    name.to_string()
                } else {
                    pattern.to_string()
                };
                Variation {
                    label,
                    pattern: (!pattern.is_empty()).then(|| pattern.to_string()),
                }
            }
            RawVariation::Bare(s) => Variation {
                label: s.trim().to_string(),
                // A bare string carries no reliable pattern.
                pattern: None,
            },
        }
    }
}

/// Loads and normalizes the catalog at `path`.
///
/// Fatal errors: missing/unreadable file, malformed JSON, non-list root.
/// Blank-named collections and subcollections are dropped here so no
/// downstream component has to re-check.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if !value.is_array() {
        return Err(CatalogError::Schema {
            path: path.to_path_buf(),
        });
    }

    let raw: Vec<RawCollection> =
        serde_json::from_value(value).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let collections = raw
        .iter()
        .filter_map(|coll| {
            let raw_name = coll.name()?;
            let subcollections = coll
                .subcollection
                .iter()
                .filter_map(|sub| {
                    let raw_name = sub.name()?;
                    let variations =
                        sub.variations().iter().map(RawVariation::normalize).collect();
                    Some(Subcollection { raw_name, variations })
                })
                .collect();
            Some(Collection { raw_name, subcollections })
        })
        .collect();

    let catalog = Catalog { collections };
    tracing::debug!(
        path = %path.display(),
        collections = catalog.collections.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collections.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(json.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn new_schema_parses() {
        let (_d, path) = write_catalog(
            r#"[{
                "collection-name": "Wools",
                "subcollection": [{
                    "subcollection-name": "Heavy",
                    "variations": [
                        {"variation-name": "Charcoal", "variation-pattern": "100-200"}
                    ]
                }]
            }]"#,
        );
        let cat = load_catalog(&path).unwrap();
        assert_eq!(cat.collections.len(), 1);
        let coll = &cat.collections[0];
        assert_eq!(coll.raw_name, "Wools");
        let var = &coll.subcollections[0].variations[0];
        assert_eq!(var.label, "Charcoal-100-200");
        assert_eq!(var.usable_pattern(), Some("100-200"));
    }

    #[test]
    fn old_schema_parses() {
        let (_d, path) = write_catalog(
            r#"[{
                "collection": "Wools",
                "subcollection": [{
                    "name": "Heavy",
                    "variation": ["Charcoal", "Slate"]
                }]
            }]"#,
        );
        let cat = load_catalog(&path).unwrap();
        let sub = &cat.collections[0].subcollections[0];
        assert_eq!(sub.raw_name, "Heavy");
        assert_eq!(sub.variations.len(), 2);
        assert_eq!(sub.variations[0].label, "Charcoal");
        // Bare strings carry no pattern and are not downloadable.
        assert_eq!(sub.variations[0].usable_pattern(), None);
    }

    #[test]
    fn blank_names_are_dropped() {
        let (_d, path) = write_catalog(
            r#"[
                {"collection-name": "  ", "subcollection": []},
                {"collection-name": "Kept", "subcollection": [
                    {"subcollection-name": "", "variations": []},
                    {"subcollection-name": "Sub", "variations": []}
                ]}
            ]"#,
        );
        let cat = load_catalog(&path).unwrap();
        assert_eq!(cat.collections.len(), 1);
        assert_eq!(cat.collections[0].raw_name, "Kept");
        assert_eq!(cat.collections[0].subcollections.len(), 1);
    }

    #[test]
    fn variation_label_fallbacks() {
        let (_d, path) = write_catalog(
            r#"[{
                "collection-name": "C",
                "subcollection": [{
                    "subcollection-name": "S",
                    "variations": [
                        {"variation-name": "OnlyName"},
                        {"variation-pattern": "804-004"}
                    ]
                }]
            }]"#,
        );
        let cat = load_catalog(&path).unwrap();
        let vars = &cat.collections[0].subcollections[0].variations;
        assert_eq!(vars[0].label, "OnlyName");
        assert_eq!(vars[0].usable_pattern(), None);
        assert_eq!(vars[1].label, "804-004");
        assert_eq!(vars[1].usable_pattern(), Some("804-004"));
    }

    #[test]
    fn non_list_root_is_schema_error() {
        let (_d, path) = write_catalog(r#"{"collection-name": "X"}"#);
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let (_d, path) = write_catalog("[{");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
