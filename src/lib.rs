//! dockerfile-versions: Keep a fleet of Dockerfiles in sync with one manifest
//!
//! Reads `versions.yaml`, substitutes shared package definitions into each
//! target's package list, renders `ENV` declarations and splices them between
//! the `<autogenerated>` markers of every target Dockerfile.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod resolve;
pub mod splice;
pub mod update;
pub mod validate;

pub use domain::{Manifest, Package, Target};
pub use error::VersionsError;
