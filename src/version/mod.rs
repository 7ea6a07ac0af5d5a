//! Server version model and supported-version resolution
//!
//! # Overview
//!
//! The version module provides:
//! - `Version` / `Release` - ordered server versions with two sentinels
//! - `VersionSet` - immutable per-action supported sets
//! - `VersionRegistry` - action kind to supported set, built once at startup
//! - `check_compatible` - the construction-time compatibility gate

mod model;
mod registry;

pub use model::{Release, Version};
pub use registry::{
    check_compatible, ActionKind, VersionRegistry, VersionRegistryBuilder, VersionSet,
};

#[cfg(test)]
mod tests;
