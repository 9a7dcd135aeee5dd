//! Go module version precedence.
//!
//! Go versions are semantic versions with a mandatory `v` prefix. `vMAJOR`
//! and `vMAJOR.MINOR` are accepted as shorthands for `.0` patches, build
//! metadata never affects precedence, and every invalid string sorts below
//! every valid one. Pseudo-versions such as
//! `v0.0.0-20191109021931-daa7c04131f5` are ordinary pre-releases under
//! these rules, so they order by timestamp.

use crate::ports::outbound::VersionComparator;
use semver::{BuildMetadata, Version};
use std::cmp::Ordering;

const INCOMPATIBLE: &str = "incompatible";

/// Parses a Go version into a SemVer 2.0 version
///
/// Shorthands are padded with `.0` components. A shorthand may not carry a
/// pre-release or build suffix (`v1-pre`, `v1.2+meta`).
fn parse(version: &str) -> Option<Version> {
    let rest = version.strip_prefix('v')?;
    let core_end = rest.find(['-', '+']).unwrap_or(rest.len());
    let padding = match rest[..core_end].matches('.').count() {
        0 => ".0.0",
        1 => ".0",
        _ => "",
    };

    if padding.is_empty() {
        return Version::parse(rest).ok();
    }
    if core_end != rest.len() {
        return None;
    }
    Version::parse(&format!("{}{}", rest, padding)).ok()
}

/// Reports whether `version` is a valid Go module version
pub fn is_valid(version: &str) -> bool {
    parse(version).is_some()
}

/// Returns the canonical form used in `go.mod` files
///
/// Shorthands are expanded (`v1.2` → `v1.2.0`) and build metadata is
/// dropped, except `+incompatible`, which marks a v2+ module without a
/// `/vN` path suffix. Returns `None` for invalid versions.
pub fn canonical(version: &str) -> Option<String> {
    let mut parsed = parse(version)?;
    if parsed.build.as_str() != INCOMPATIBLE {
        parsed.build = BuildMetadata::EMPTY;
    }
    Some(format!("v{}", parsed))
}

/// Compares two Go module versions by precedence alone
///
/// Two invalid versions compare equal; an invalid version is lower than
/// any valid one.
pub fn compare(v: &str, w: &str) -> Ordering {
    match (parse(v), parse(w)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(pv), Some(pw)) => pv.cmp_precedence(&pw),
    }
}

/// GoSemverComparator adapter implementing Go module version ordering
///
/// Versions with equal precedence but different spelling (`v2.0.0` and
/// `v2.0.0+incompatible`, or two invalid strings) fall back to byte order,
/// so the comparator only returns `Equal` for identical strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoSemverComparator;

impl GoSemverComparator {
    pub fn new() -> Self {
        Self
    }
}

impl VersionComparator for GoSemverComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare(a, b).then_with(|| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_versions() {
        for v in [
            "v1",
            "v1.2",
            "v1.2.3",
            "v0.0.0",
            "v1.2.3-pre",
            "v1.2.3-pre.1",
            "v1.2.3+build.7",
            "v1.2.3-rc.1+meta",
            "v2.0.0+incompatible",
            "v0.0.0-20191109021931-daa7c04131f5",
        ] {
            assert!(is_valid(v), "{} should be valid", v);
        }
    }

    #[test]
    fn test_invalid_versions() {
        for v in [
            "",
            "1.2.3",
            "v",
            "v01.2.3",
            "v1.02.3",
            "v1.2.03",
            "v1.2.3-",
            "v1.2.3-01",
            "v1.2.3-a..b",
            "v1.2.3+",
            "v1-pre",
            "v1.2-pre",
            "v1.2+meta",
            "v1.",
            "v1.2.3.4",
            "v1.2.3 ",
            "latest",
        ] {
            assert!(!is_valid(v), "{} should be invalid", v);
        }
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical("v1").as_deref(), Some("v1.0.0"));
        assert_eq!(canonical("v1.2").as_deref(), Some("v1.2.0"));
        assert_eq!(canonical("v1.2.3-rc.1+meta").as_deref(), Some("v1.2.3-rc.1"));
        assert_eq!(
            canonical("v2.0.0+incompatible").as_deref(),
            Some("v2.0.0+incompatible")
        );
        assert_eq!(canonical("1.2.3"), None);
    }

    #[test]
    fn test_compare_release_ordering() {
        assert_eq!(compare("v1.2.0", "v1.3.0"), Ordering::Less);
        assert_eq!(compare("v1.10.0", "v1.9.0"), Ordering::Greater);
        assert_eq!(compare("v2.0.0", "v10.0.0"), Ordering::Less);
        assert_eq!(compare("v1.2", "v1.2.0"), Ordering::Equal);
    }

    #[test]
    fn test_compare_prerelease_ordering() {
        // SemVer 2.0 example chain
        let chain = [
            "v1.0.0-alpha",
            "v1.0.0-alpha.1",
            "v1.0.0-alpha.beta",
            "v1.0.0-beta",
            "v1.0.0-beta.2",
            "v1.0.0-beta.11",
            "v1.0.0-rc.1",
            "v1.0.0",
        ];
        for pair in chain.windows(2) {
            assert_eq!(compare(pair[0], pair[1]), Ordering::Less, "{:?}", pair);
            assert_eq!(compare(pair[1], pair[0]), Ordering::Greater, "{:?}", pair);
        }
    }

    #[test]
    fn test_compare_pseudo_versions() {
        assert_eq!(
            compare(
                "v0.0.0-20191109021931-daa7c04131f5",
                "v0.0.0-20200101000000-aaaaaaaaaaaa"
            ),
            Ordering::Less
        );
        // A pseudo-version based on v1.2.3 sorts after v1.2.3 and before v1.2.4
        let pseudo = "v1.2.4-0.20191109021931-daa7c04131f5";
        assert_eq!(compare("v1.2.3", pseudo), Ordering::Less);
        assert_eq!(compare(pseudo, "v1.2.4"), Ordering::Less);
    }

    #[test]
    fn test_compare_build_metadata_ignored() {
        assert_eq!(compare("v2.0.0+incompatible", "v2.0.0"), Ordering::Equal);
    }

    #[test]
    fn test_compare_invalid_versions() {
        assert_eq!(compare("bad", "worse"), Ordering::Equal);
        assert_eq!(compare("bad", "v0.0.0"), Ordering::Less);
        assert_eq!(compare("v0.0.0", "bad"), Ordering::Greater);
    }

    #[test]
    fn test_comparator_is_total_over_spellings() {
        let cmp = GoSemverComparator::new();
        assert_eq!(cmp.compare("v1.2.0", "v1.2.0"), Ordering::Equal);
        assert_eq!(cmp.compare("v2.0.0", "v2.0.0+incompatible"), Ordering::Less);
        assert_eq!(cmp.compare("v2.0.0+incompatible", "v2.0.0"), Ordering::Greater);
        assert_eq!(cmp.compare("bad", "worse"), Ordering::Less);
        assert_eq!(cmp.compare("v1.2.0", "v1.3.0"), Ordering::Less);
    }
}
