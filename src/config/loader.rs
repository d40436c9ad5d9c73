//! Manifest file loading

use crate::domain::Manifest;
use crate::error::{Result, VersionsError};
use std::fs;
use std::path::Path;

/// Manifest path used when `--file` is not given.
pub const DEFAULT_MANIFEST: &str = "versions.yaml";

pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)
        .map_err(|source| VersionsError::Io { path: path.to_path_buf(), source })?;

    let manifest = parse_manifest(&content).map_err(|err| match err {
        VersionsError::Parse { source, .. } => {
            VersionsError::Parse { path: Some(path.to_path_buf()), source }
        }
        other => other,
    })?;

    tracing::debug!(
        "Loaded manifest {}: {} shared packages, {} targets",
        path.display(),
        manifest.shared_packages.len(),
        manifest.versions.len()
    );
    Ok(manifest)
}

/// Parse manifest YAML without touching the filesystem.
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    serde_yaml::from_str(content).map_err(|source| VersionsError::Parse { path: None, source })
}
