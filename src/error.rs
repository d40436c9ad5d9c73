//! Error taxonomy for the update pipeline

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VersionsError>;

#[derive(Debug, Error)]
pub enum VersionsError {
    #[error("failed to access {}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("failed to parse manifest{}", format_path(path.as_ref()))]
    Parse { path: Option<PathBuf>, source: serde_yaml::Error },

    #[error("found multiple sharedPackages with the name: {name}")]
    AmbiguousSharedPackage { name: String },

    #[error("package name must not be empty ({location})")]
    EmptyPackageName { location: String },

    #[error("{field} {reason}")]
    InvalidValue { field: String, reason: &'static str },

    #[error("package {name} is listed more than once for {}", dir.display())]
    DuplicatePackage { name: String, dir: PathBuf },

    #[error("failed to find {marker} token")]
    MarkerNotFound { marker: &'static str },

    #[error("{marker} token appears more than once (lines {})", format_lines(lines))]
    DuplicateMarker { marker: &'static str, lines: Vec<usize> },

    #[error("end marker on line {end} precedes begin marker on line {begin}")]
    MarkersOutOfOrder { begin: usize, end: usize },

    #[error("{}", path.display())]
    Target { path: PathBuf, source: Box<VersionsError> },
}

impl VersionsError {
    /// Strip any `Target` wrapping and return the underlying error.
    pub fn root(&self) -> &VersionsError {
        match self {
            VersionsError::Target { source, .. } => source.root(),
            other => other,
        }
    }
}

fn format_path(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

fn format_lines(lines: &[usize]) -> String {
    lines.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
