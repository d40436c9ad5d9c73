//! Manifest checks run before any Dockerfile is touched

use crate::domain::{Manifest, Package};
use crate::error::{Result, VersionsError};
use crate::resolve::check_shared_packages;
use crate::splice::{BEGIN_MARKER, END_MARKER};
use std::collections::HashSet;

/// Reject manifests whose rendered block would be invalid or would not splice
/// back cleanly on the next run.
///
/// Checks, in order: the base image, every shared package, duplicate shared
/// names, then every target's packages including names listed twice.
pub fn check_manifest(manifest: &Manifest) -> Result<()> {
    check_value("from", &manifest.from)?;

    for (idx, package) in manifest.shared_packages.iter().enumerate() {
        check_package(package, || format!("sharedPackages[{idx}]"))?;
    }
    check_shared_packages(&manifest.shared_packages)?;

    for (target_idx, target) in manifest.versions.iter().enumerate() {
        let mut seen = HashSet::new();
        for (idx, package) in target.packages.iter().enumerate() {
            check_package(package, || format!("versions[{target_idx}].packages[{idx}]"))?;
            if !seen.insert(package.name.as_str()) {
                return Err(VersionsError::DuplicatePackage {
                    name: package.name.clone(),
                    dir: target.dir.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_package(package: &Package, location: impl Fn() -> String) -> Result<()> {
    if package.name.trim().is_empty() {
        return Err(VersionsError::EmptyPackageName { location: location() });
    }
    check_value(&format!("{}.name", package.name), &package.name)?;
    check_value(&format!("{}.version", package.name), &package.version)?;
    if let Some(major) = &package.major {
        check_value(&format!("{}.major", package.name), major)?;
    }
    if let Some(gpg) = &package.gpg {
        check_value(&format!("{}.gpg", package.name), gpg)?;
    }
    Ok(())
}

/// A rendered value must stay on its own line and must not look like a marker.
fn check_value(field: &str, value: &str) -> Result<()> {
    let reason = if value.contains('\n') || value.contains('\r') {
        "contains a line break"
    } else if value.contains(BEGIN_MARKER) || value.contains(END_MARKER) {
        "contains an autogenerated marker token"
    } else {
        return Ok(());
    };
    Err(VersionsError::InvalidValue { field: field.to_string(), reason })
}
