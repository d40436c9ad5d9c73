//! Per-target update pipeline
//!
//! For each target: read `{dir}/Dockerfile`, resolve its packages against the
//! shared list, render the block, splice it in and write the result back.
//! Targets run in manifest order and the first failure aborts the run; files
//! already written are left as they are.

use crate::domain::{Manifest, Target};
use crate::error::{Result, VersionsError};
use crate::render::render_block;
use crate::resolve::resolve_packages;
use crate::splice::splice_block;
use crate::validate::check_manifest;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// Whether rewritten content is written to disk or only compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Write,
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    pub path: PathBuf,
    /// The rendered content differs from what was on disk before this run.
    pub changed: bool,
}

pub fn dockerfile_path(target: &Target) -> PathBuf {
    target.dir.join(DOCKERFILE_NAME)
}

/// Compute the new content of a Dockerfile without touching the filesystem.
///
/// Newline is the line separator, so a trailing newline in `content` survives
/// as a final empty line. The manifest is checked first so the result always
/// splices back cleanly.
pub fn regenerate(manifest: &Manifest, target: &Target, content: &str) -> Result<String> {
    check_manifest(manifest)?;
    let lines: Vec<&str> = content.split('\n').collect();
    let packages = resolve_packages(&manifest.shared_packages, &target.packages)?;
    let rendered = render_block(&manifest.from, &packages);
    let spliced = splice_block(&lines, &rendered)?;
    Ok(spliced.join("\n"))
}

pub fn update_target(manifest: &Manifest, target: &Target, mode: Mode) -> Result<TargetOutcome> {
    let path = dockerfile_path(target);
    process_file(manifest, target, &path, mode)
        .map_err(|source| VersionsError::Target { path: path.clone(), source: Box::new(source) })
}

fn process_file(
    manifest: &Manifest,
    target: &Target,
    path: &Path,
    mode: Mode,
) -> Result<TargetOutcome> {
    let current = fs::read_to_string(path)
        .map_err(|source| VersionsError::Io { path: path.to_path_buf(), source })?;
    let updated = regenerate(manifest, target, &current)?;
    let changed = updated != current;

    if changed && mode == Mode::Write {
        fs::write(path, &updated)
            .map_err(|source| VersionsError::Io { path: path.to_path_buf(), source })?;
        tracing::info!("Updated {}", path.display());
    } else {
        tracing::debug!("{} changed={} mode={:?}", path.display(), changed, mode);
    }

    Ok(TargetOutcome { path: path.to_path_buf(), changed })
}

/// Run every target in manifest order, stopping at the first error.
///
/// The whole manifest is checked before the first Dockerfile is read.
pub fn update_all(manifest: &Manifest, mode: Mode) -> Result<Vec<TargetOutcome>> {
    check_manifest(manifest)?;

    let mut outcomes = Vec::with_capacity(manifest.versions.len());
    for target in &manifest.versions {
        outcomes.push(update_target(manifest, target, mode)?);
    }
    Ok(outcomes)
}
