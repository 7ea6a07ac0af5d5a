//! MediaWiki server version model
//!
//! An ordered enumeration of server releases with two out-of-band sentinels:
//! `Unknown` ranks below every real release, `Development` above. Comparison
//! is defined explicitly over the three cases.

use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Releases
// ============================================================================

/// A real MediaWiki release, ordered by release date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum Release {
    V1_14,
    V1_15,
    V1_16,
    V1_17,
    V1_18,
    V1_19,
    V1_20,
    V1_21,
    V1_22,
    V1_23,
    V1_24,
    V1_25,
}

impl Release {
    /// All known releases in release order
    pub const ALL: [Release; 12] = [
        Release::V1_14,
        Release::V1_15,
        Release::V1_16,
        Release::V1_17,
        Release::V1_18,
        Release::V1_19,
        Release::V1_20,
        Release::V1_21,
        Release::V1_22,
        Release::V1_23,
        Release::V1_24,
        Release::V1_25,
    ];

    /// The curated production-ready subset, in release order
    pub const STABLE: [Release; 3] = [Release::V1_19, Release::V1_23, Release::V1_24];

    /// The version number as published, e.g. `"1.24"`
    pub fn number(self) -> &'static str {
        match self {
            Release::V1_14 => "1.14",
            Release::V1_15 => "1.15",
            Release::V1_16 => "1.16",
            Release::V1_17 => "1.17",
            Release::V1_18 => "1.18",
            Release::V1_19 => "1.19",
            Release::V1_20 => "1.20",
            Release::V1_21 => "1.21",
            Release::V1_22 => "1.22",
            Release::V1_23 => "1.23",
            Release::V1_24 => "1.24",
            Release::V1_25 => "1.25",
        }
    }
}

// ============================================================================
// Version
// ============================================================================

/// A server version: a real release or one of the two sentinels
///
/// `Unknown` is older than anything, `Development` newer than anything.
/// Neither sentinel is ever stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// Placeholder when the server version could not be determined
    Unknown,
    /// A known release
    Release(Release),
    /// A build newer than the newest known release
    Development,
}

impl Version {
    /// Every version, sentinels included, in rank order
    pub fn all() -> Vec<Version> {
        let mut versions = vec![Version::Unknown];
        versions.extend(Release::ALL.iter().map(|r| Version::Release(*r)));
        versions.push(Version::Development);
        versions
    }

    /// All stable versions in release order
    pub fn values_stable() -> Vec<Version> {
        Release::STABLE.iter().map(|r| Version::Release(*r)).collect()
    }

    /// The highest-ranked stable release (never `Development`)
    pub fn latest() -> Version {
        Version::Release(Release::V1_24)
    }

    /// True only for releases in the curated stable subset
    pub fn is_stable(self) -> bool {
        match self {
            Version::Release(release) => Release::STABLE.contains(&release),
            Version::Unknown | Version::Development => false,
        }
    }

    /// Stability check over an optional version; absent versions are not stable
    pub fn is_stable_version(version: Option<Version>) -> bool {
        version.is_some_and(Version::is_stable)
    }

    /// True iff `self` ranks at or above `other`
    ///
    /// `Unknown` ranks below every real release, `Development` above.
    pub fn is_at_least(self, other: Version) -> bool {
        self >= other
    }

    /// The human-readable version number
    pub fn number(self) -> &'static str {
        match self {
            Version::Unknown => "unknown",
            Version::Release(release) => release.number(),
            Version::Development => "development",
        }
    }

    /// Map a MediaWiki `generator` string (e.g. `"MediaWiki 1.24.1"`) to a version
    ///
    /// Patch levels are ignored. Releases newer than the newest known one map
    /// to `Development`; anything unrecognized maps to `Unknown`.
    pub fn from_generator(generator: &str) -> Version {
        let number = generator.trim().trim_start_matches("MediaWiki").trim();

        for release in Release::ALL {
            let prefix = release.number();
            if number == prefix || number.starts_with(&format!("{prefix}.")) {
                return Version::Release(release);
            }
        }

        // "1.26wmf1" and friends: newer than anything we know
        let mut parts = number.splitn(2, '.');
        let major: Option<u32> = parts.next().and_then(|p| p.parse().ok());
        let minor: Option<u32> = parts
            .next()
            .map(|p| p.chars().take_while(char::is_ascii_digit).collect::<String>())
            .and_then(|p| p.parse().ok());
        match (major, minor) {
            (Some(major), _) if major > 1 => Version::Development,
            (Some(1), Some(minor)) if minor > 25 => Version::Development,
            _ => Version::Unknown,
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Version::Unknown, Version::Unknown) => Ordering::Equal,
            (Version::Unknown, _) => Ordering::Less,
            (_, Version::Unknown) => Ordering::Greater,
            (Version::Development, Version::Development) => Ordering::Equal,
            (Version::Development, _) => Ordering::Greater,
            (_, Version::Development) => Ordering::Less,
            (Version::Release(a), Version::Release(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.number())
    }
}
