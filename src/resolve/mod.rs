//! Shared package substitution

use crate::domain::Package;
use crate::error::{Result, VersionsError};
use std::collections::HashSet;

/// Replace placeholder entries with the shared package of the same name.
///
/// Entries without a shared counterpart pass through unchanged. A match replaces
/// the whole entry, so any version/major/gpg set on the placeholder is dropped.
/// Output order follows `packages`.
pub fn resolve_packages(shared: &[Package], packages: &[Package]) -> Result<Vec<Package>> {
    packages
        .iter()
        .map(|package| {
            let mut matches = shared.iter().filter(|s| s.name == package.name);
            match (matches.next(), matches.next()) {
                (None, _) => Ok(package.clone()),
                (Some(found), None) => {
                    tracing::debug!("Substituting shared package {}", found.name);
                    Ok(found.clone())
                }
                (Some(_), Some(_)) => {
                    Err(VersionsError::AmbiguousSharedPackage { name: package.name.clone() })
                }
            }
        })
        .collect()
}

/// Reject a shared package list that defines the same name twice.
pub fn check_shared_packages(shared: &[Package]) -> Result<()> {
    let mut seen = HashSet::new();
    for package in shared {
        if !seen.insert(package.name.as_str()) {
            return Err(VersionsError::AmbiguousSharedPackage { name: package.name.clone() });
        }
    }
    Ok(())
}
