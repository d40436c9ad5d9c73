//! Manifest loading
//!
//! Reads `versions.yaml` into a [`Manifest`](crate::domain::Manifest). Parsing is
//! purely structural; semantic checks happen during resolution.

pub mod loader;

pub use loader::{load_manifest, parse_manifest, DEFAULT_MANIFEST};
