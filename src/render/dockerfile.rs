//! Dockerfile `ENV` block rendering

use crate::domain::Package;

pub const BLOCK_BEGIN: &str = "##<autogenerated>##";
pub const BLOCK_END: &str = "##</autogenerated>##";

/// Build the environment variable token for a package, e.g. `GOSU_VERSION`.
pub fn env_name(package: &str, suffix: &str) -> String {
    format!("{}_{}", package.to_ascii_uppercase(), suffix)
}

/// Render the marker-delimited block for one Dockerfile.
///
/// Every package group is preceded by a single blank line and nothing trails
/// the last group, so re-rendering an unchanged manifest reproduces the block
/// byte for byte. For a manifest accepted by
/// [`check_manifest`](crate::validate::check_manifest) the returned lines never
/// contain a newline or a marker token.
pub fn render_block(from: &str, packages: &[Package]) -> Vec<String> {
    let mut lines = Vec::with_capacity(3 + packages.len() * 4);
    lines.push(BLOCK_BEGIN.to_string());
    lines.push(format!("FROM {from}"));

    for package in packages {
        lines.push(String::new());
        lines.push(format!("ENV {} {}", env_name(&package.name, "VERSION"), package.version));
        if let Some(major) = non_empty(package.major.as_deref()) {
            lines.push(format!("ENV {} {}", env_name(&package.name, "MAJOR"), major));
        }
        if let Some(gpg) = non_empty(package.gpg.as_deref()) {
            lines.push(format!("ENV {} {}", env_name(&package.name, "GPG_KEY"), gpg));
        }
    }

    lines.push(BLOCK_END.to_string());
    lines
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
