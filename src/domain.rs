//! Core data types for the version manifest

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A pinned software component rendered as `ENV` lines.
///
/// A target entry that only carries a `name` is a placeholder: it is replaced
/// wholesale by the shared package of the same name during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, alias = "gpgKey", skip_serializing_if = "Option::is_none")]
    pub gpg: Option<String>,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into(), major: None, gpg: None }
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn with_gpg(mut self, gpg: impl Into<String>) -> Self {
        self.gpg = Some(gpg.into());
        self
    }
}

/// One Dockerfile to keep in sync, identified by its directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(alias = "directory")]
    pub dir: PathBuf,
    #[serde(default, alias = "repository", skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// Parsed `versions.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Base image written into the `FROM` line of every target.
    #[serde(alias = "baseImage")]
    pub from: String,
    #[serde(default, rename = "sharedPackages")]
    pub shared_packages: Vec<Package>,
    #[serde(default, alias = "targets")]
    pub versions: Vec<Target>,
}
