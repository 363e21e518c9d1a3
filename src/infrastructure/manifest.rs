//! Manifest file loading

use crate::domain::ManifestEntry;
use crate::error::{RetagError, Result};
use std::fs;
use std::path::Path;

/// Load manifest entries from a JSON file.
///
/// Every entry must carry all four manifest keys; a missing one fails the
/// whole load.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let contents = fs::read_to_string(path).map_err(|source| RetagError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<ManifestEntry> =
        serde_json::from_str(&contents).map_err(|source| RetagError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded manifest");
    for entry in &entries {
        tracing::debug!(
            image = %entry.image_name,
            version = %entry.version(),
            repository = %entry.git_repository,
            "manifest entry"
        );
    }

    Ok(entries)
}
