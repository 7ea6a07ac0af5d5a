//! Supported-version registry
//!
//! Maps each concrete action kind to the set of server versions it declares
//! support for. The registry is assembled once at startup; there is no
//! runtime type walking. Undeclared kinds resolve to `{unknown}`.

use super::model::{Release, Version};
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Action kinds
// ============================================================================

/// The concrete API action kinds shipped by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// `list=allpages` title listing
    AllPages,
    /// `list=unreviewedpages` title listing (FlaggedRevs)
    UnreviewedPages,
    /// `action=parse` wikitext rendering
    Rendering,
}

// ============================================================================
// Version sets
// ============================================================================

/// An immutable set of supported server versions
///
/// Stored sorted and deduplicated so iteration order is rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSet {
    versions: Vec<Version>,
}

impl VersionSet {
    /// Build a set from any collection of versions
    pub fn new(versions: impl IntoIterator<Item = Version>) -> Self {
        let mut versions: Vec<Version> = versions.into_iter().collect();
        versions.sort();
        versions.dedup();
        Self { versions }
    }

    /// The root default for undeclared kinds: `{unknown}`
    ///
    /// Every real server version ranks above `unknown`, so this set admits
    /// any connected server.
    pub fn unknown_only() -> Self {
        Self {
            versions: vec![Version::Unknown],
        }
    }

    /// Every release from `first` up to the newest known one
    pub fn since(first: Release) -> Self {
        Self::new(
            Release::ALL
                .iter()
                .filter(|r| **r >= first)
                .map(|r| Version::Release(*r)),
        )
    }

    /// Membership test
    pub fn contains(&self, version: Version) -> bool {
        self.versions.contains(&version)
    }

    /// Check a connected server version against this set
    ///
    /// Exact membership wins; otherwise "supports X" is read as "supports X
    /// and everything newer", so any member at or below `connected` passes.
    pub fn allows(&self, connected: Version) -> bool {
        if self.contains(connected) {
            return true;
        }
        self.versions.iter().any(|v| connected.is_at_least(*v))
    }

    /// Iterate members in rank order
    pub fn iter(&self) -> impl Iterator<Item = Version> + '_ {
        self.versions.iter().copied()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// True if the set has no members
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl fmt::Display for VersionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<&str> = self.versions.iter().map(|v| v.number()).collect();
        f.write_str(&numbers.join(", "))
    }
}

/// Validate a connected server version against a supported set
///
/// Runs at action construction, before any network interaction. Fails with
/// [`Error::VersionIncompatible`] when the connected version is neither a
/// member nor at least as new as some member.
pub fn check_compatible(connected: Version, supported: &VersionSet) -> Result<()> {
    if supported.allows(connected) {
        return Ok(());
    }
    Err(Error::version_incompatible(
        connected.number(),
        supported.to_string(),
    ))
}

// ============================================================================
// Registry
// ============================================================================

/// Registry mapping action kinds to their supported-version sets
#[derive(Debug, Clone, Default)]
pub struct VersionRegistry {
    entries: HashMap<ActionKind, VersionSet>,
}

impl VersionRegistry {
    /// Create a registry builder
    pub fn builder() -> VersionRegistryBuilder {
        VersionRegistryBuilder::default()
    }

    /// The process-wide registry with the built-in action declarations
    ///
    /// Initialized exactly once and immutable afterwards; safe to read from
    /// any number of callers.
    pub fn global() -> &'static VersionRegistry {
        static GLOBAL: Lazy<VersionRegistry> = Lazy::new(|| {
            VersionRegistry::builder()
                .declare(ActionKind::AllPages, VersionSet::since(Release::V1_14))
                .declare(
                    ActionKind::UnreviewedPages,
                    VersionSet::new([
                        Version::Release(Release::V1_19),
                        Version::Release(Release::V1_23),
                        Version::Release(Release::V1_24),
                    ]),
                )
                .declare(ActionKind::Rendering, VersionSet::since(Release::V1_15))
                .build()
        });
        &GLOBAL
    }

    /// Resolve the supported set for an action kind
    ///
    /// Deterministic for the process lifetime: the same kind always resolves
    /// to the same set. Undeclared kinds get the `{unknown}` root default.
    pub fn supported(&self, kind: ActionKind) -> VersionSet {
        self.entries
            .get(&kind)
            .cloned()
            .unwrap_or_else(VersionSet::unknown_only)
    }
}

/// Builder for a [`VersionRegistry`]
#[derive(Debug, Default)]
pub struct VersionRegistryBuilder {
    entries: HashMap<ActionKind, VersionSet>,
}

impl VersionRegistryBuilder {
    /// Declare the supported set for a kind
    #[must_use]
    pub fn declare(mut self, kind: ActionKind, versions: VersionSet) -> Self {
        self.entries.insert(kind, versions);
        self
    }

    /// Finish the registry
    pub fn build(self) -> VersionRegistry {
        VersionRegistry {
            entries: self.entries,
        }
    }
}
