//! Tests for the version module

use super::*;
use crate::error::Error;
use std::collections::HashSet;
use test_case::test_case;

// ============================================================================
// Ordering
// ============================================================================

#[test_case(Version::Release(Release::V1_14), Version::Release(Release::V1_15))]
#[test_case(Version::Release(Release::V1_19), Version::Release(Release::V1_23))]
#[test_case(Version::Release(Release::V1_24), Version::Release(Release::V1_25))]
fn test_release_order(older: Version, newer: Version) {
    assert!(!older.is_at_least(newer));
    assert!(newer.is_at_least(older));
}

#[test]
fn test_is_at_least_reflexive() {
    for version in Version::all() {
        assert!(version.is_at_least(version));
    }
}

#[test]
fn test_unknown_is_minimal() {
    for version in Version::all() {
        if version == Version::Unknown {
            continue;
        }
        assert!(version.is_at_least(Version::Unknown));
        assert!(!Version::Unknown.is_at_least(version));
    }
}

#[test]
fn test_development_is_maximal() {
    for version in Version::all() {
        if version == Version::Development {
            continue;
        }
        assert!(Version::Development.is_at_least(version));
        assert!(!version.is_at_least(Version::Development));
    }
}

#[test]
fn test_all_is_strictly_sorted() {
    let all = Version::all();
    for pair in all.windows(2) {
        assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
    }
}

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_values_stable() {
    let expected = vec![
        Version::Release(Release::V1_19),
        Version::Release(Release::V1_23),
        Version::Release(Release::V1_24),
    ];
    assert_eq!(Version::values_stable(), expected);

    let unstable = vec![
        Version::Release(Release::V1_14),
        Version::Release(Release::V1_15),
        Version::Release(Release::V1_16),
        Version::Release(Release::V1_17),
        Version::Release(Release::V1_18),
        Version::Release(Release::V1_20),
        Version::Release(Release::V1_21),
        Version::Release(Release::V1_22),
        Version::Release(Release::V1_25),
    ];
    assert!(!unstable.is_empty(), "reference unstable set must be non-empty");

    let stable: HashSet<Version> = Version::values_stable().into_iter().collect();
    let unstable: HashSet<Version> = unstable.into_iter().collect();
    assert!(
        stable.intersection(&unstable).next().is_none(),
        "no unstable version may be stable"
    );

    let mut partition = stable;
    partition.extend(unstable);
    partition.insert(Version::Unknown);
    partition.insert(Version::Development);
    let all: HashSet<Version> = Version::all().into_iter().collect();
    assert_eq!(partition, all);
}

#[test]
fn test_get_latest() {
    assert_eq!(Version::latest(), Version::Release(Release::V1_24));
}

#[test]
fn test_is_stable_latest() {
    assert!(Version::latest().is_stable());
    assert!(Version::is_stable_version(Some(Version::latest())));
}

#[test]
fn test_is_stable_unknown_fail() {
    assert!(!Version::Unknown.is_stable());
}

#[test]
fn test_is_stable_development_fail() {
    assert!(!Version::Development.is_stable());
}

#[test]
fn test_is_stable_none() {
    assert!(!Version::is_stable_version(None));
}

// ============================================================================
// Generator parsing
// ============================================================================

#[test_case("MediaWiki 1.24.1", Version::Release(Release::V1_24))]
#[test_case("MediaWiki 1.19", Version::Release(Release::V1_19))]
#[test_case("MediaWiki 1.14.0", Version::Release(Release::V1_14))]
#[test_case("MediaWiki 1.26wmf1", Version::Development)]
#[test_case("MediaWiki 2.0", Version::Development)]
#[test_case("MediaWiki 1.13.2", Version::Unknown)]
#[test_case("garbage", Version::Unknown)]
#[test_case("", Version::Unknown)]
fn test_from_generator(generator: &str, expected: Version) {
    assert_eq!(Version::from_generator(generator), expected);
}

#[test]
fn test_number_display() {
    assert_eq!(Version::Release(Release::V1_23).number(), "1.23");
    assert_eq!(Version::Unknown.to_string(), "unknown");
    assert_eq!(Version::Development.to_string(), "development");
}

// ============================================================================
// Version sets
// ============================================================================

#[test]
fn test_version_set_sorted_dedup() {
    let set = VersionSet::new([
        Version::Release(Release::V1_23),
        Version::Release(Release::V1_19),
        Version::Release(Release::V1_23),
    ]);
    assert_eq!(set.len(), 2);
    let members: Vec<Version> = set.iter().collect();
    assert_eq!(
        members,
        vec![
            Version::Release(Release::V1_19),
            Version::Release(Release::V1_23)
        ]
    );
}

#[test]
fn test_version_set_since() {
    let set = VersionSet::since(Release::V1_23);
    let members: Vec<Version> = set.iter().collect();
    assert_eq!(
        members,
        vec![
            Version::Release(Release::V1_23),
            Version::Release(Release::V1_24),
            Version::Release(Release::V1_25)
        ]
    );
}

#[test]
fn test_version_set_allows_exact_member() {
    let set = VersionSet::new([Version::Release(Release::V1_19)]);
    assert!(set.allows(Version::Release(Release::V1_19)));
}

#[test]
fn test_version_set_allows_newer() {
    let set = VersionSet::new([Version::Release(Release::V1_19)]);
    assert!(set.allows(Version::Release(Release::V1_22)));
    assert!(set.allows(Version::Development));
}

#[test]
fn test_version_set_rejects_older() {
    let set = VersionSet::new([
        Version::Release(Release::V1_19),
        Version::Release(Release::V1_23),
    ]);
    assert!(!set.allows(Version::Release(Release::V1_14)));
    assert!(!set.allows(Version::Unknown));
}

#[test]
fn test_unknown_only_admits_any_server() {
    let set = VersionSet::unknown_only();
    for version in Version::all() {
        assert!(set.allows(version), "{version} should pass the root default");
    }
}

#[test]
fn test_version_set_display() {
    let set = VersionSet::new([
        Version::Release(Release::V1_24),
        Version::Release(Release::V1_19),
    ]);
    assert_eq!(set.to_string(), "1.19, 1.24");
}

// ============================================================================
// Compatibility check
// ============================================================================

#[test]
fn test_check_compatible_ok() {
    let set = VersionSet::new([Version::Release(Release::V1_19)]);
    check_compatible(Version::Release(Release::V1_24), &set).unwrap();
}

#[test]
fn test_check_compatible_fails_older() {
    let set = VersionSet::new([Version::Release(Release::V1_19)]);
    let err = check_compatible(Version::Release(Release::V1_14), &set).unwrap_err();
    match err {
        Error::VersionIncompatible { version, supported } => {
            assert_eq!(version, "1.14");
            assert_eq!(supported, "1.19");
        }
        other => panic!("Expected VersionIncompatible, got {other:?}"),
    }
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_resolution_idempotent() {
    let registry = VersionRegistry::global();
    let first = registry.supported(ActionKind::UnreviewedPages);
    let second = registry.supported(ActionKind::UnreviewedPages);
    assert_eq!(first, second);
}

#[test]
fn test_registry_undeclared_defaults_to_unknown() {
    let registry = VersionRegistry::builder().build();
    let set = registry.supported(ActionKind::AllPages);
    assert_eq!(set, VersionSet::unknown_only());
}

#[test]
fn test_registry_builtin_declarations() {
    let registry = VersionRegistry::global();

    let unreviewed = registry.supported(ActionKind::UnreviewedPages);
    assert!(unreviewed.contains(Version::Release(Release::V1_19)));
    assert!(!unreviewed.allows(Version::Release(Release::V1_14)));

    let all_pages = registry.supported(ActionKind::AllPages);
    assert!(all_pages.allows(Version::Release(Release::V1_14)));

    let rendering = registry.supported(ActionKind::Rendering);
    assert!(rendering.allows(Version::Release(Release::V1_15)));
    assert!(!rendering.allows(Version::Release(Release::V1_14)));
}
