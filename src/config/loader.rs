use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::config::types::ChapterManifest;
use crate::utils::error::{BookbindError, BoxResult};

/// Load chapter manifests from a YAML file
pub fn load_manifest<P: AsRef<Path>>(path: P) -> BoxResult<ChapterManifest> {
    let path = path.as_ref();
    debug!("Loading chapter manifest from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        BookbindError::Config(format!("Cannot read manifest {}: {}", path.display(), e))
    })?;

    manifest_from_str(&content)
}

/// Parse chapter manifests from YAML text
pub fn manifest_from_str(yaml: &str) -> BoxResult<ChapterManifest> {
    let manifest: ChapterManifest = serde_yaml::from_str(yaml)
        .map_err(|e| BookbindError::Config(format!("Invalid manifest: {}", e)))?;

    validate_manifest(&manifest)?;

    debug!("Loaded manifests for {} book(s)", manifest.len());
    Ok(manifest)
}

/// Check manifest invariants: slugs must be unique within one book
pub fn validate_manifest(manifest: &ChapterManifest) -> BoxResult<()> {
    for book in manifest.books() {
        let slugs = manifest.book(book).unwrap_or(&[]);
        let mut seen = HashSet::new();

        for slug in slugs {
            if slug.is_empty() {
                return Err(Box::new(BookbindError::Config(format!(
                    "Book '{}' contains an empty chapter slug",
                    book
                ))));
            }
            if !seen.insert(slug.as_str()) {
                return Err(Box::new(BookbindError::Config(format!(
                    "Book '{}' lists chapter '{}' more than once",
                    book, slug
                ))));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_from_str() {
        let yaml = "cftbat:\n  - intro\n  - setup\n  - done\ndeploy:\n  - preface\n";
        let manifest = manifest_from_str(yaml).unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.position("cftbat", "done"), Some(2));
        assert_eq!(manifest.position("deploy", "preface"), Some(0));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let yaml = "cftbat:\n  - intro\n  - intro\n";
        let err = manifest_from_str(yaml).unwrap_err();

        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(manifest_from_str("cftbat: {not: [a, list").is_err());
    }
}
