//! Dotted numeric versions and their ordering.
//!
//! A [`Version`] is the sequence of integers in a string such as `8.0.21`.
//! Versions of different lengths compare as if the shorter one were padded
//! with zeros, so `8.0` equals `8.0.0` and sorts below `8.0.21`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dotted number runs in free text (`mysql-8.0.21-linux`).
static VERSION_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").unwrap());

/// Failure to read a version string as dotted decimal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// The input was empty.
    #[error("empty version string")]
    Empty,

    /// Two dots in a row, or a leading/trailing dot.
    #[error("empty component in version '{input}'")]
    EmptySegment { input: String },

    /// A component that is not a non-negative integer.
    #[error("invalid component '{segment}' in version '{input}'")]
    InvalidSegment { input: String, segment: String },
}

/// An ordered sequence of non-negative integers, e.g. `[8, 0, 21]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    /// Build a version from its numeric components.
    ///
    /// At least one component is required.
    pub fn new(parts: Vec<u64>) -> Result<Self, VersionParseError> {
        if parts.is_empty() {
            return Err(VersionParseError::Empty);
        }
        Ok(Self { parts })
    }

    /// Parse a dotted-decimal string.
    ///
    /// Every `.`-separated segment must be a non-empty run of ASCII digits.
    /// Signs, whitespace and suffixes such as `-log` are rejected.
    pub fn parse(s: &str) -> Result<Self, VersionParseError> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut parts = Vec::new();
        for segment in s.split('.') {
            if segment.is_empty() {
                return Err(VersionParseError::EmptySegment {
                    input: s.to_string(),
                });
            }
            let invalid = || VersionParseError::InvalidSegment {
                input: s.to_string(),
                segment: segment.to_string(),
            };
            if !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            parts.push(segment.parse::<u64>().map_err(|_| invalid())?);
        }

        Ok(Self { parts })
    }

    /// Find the first dotted version embedded in arbitrary text.
    ///
    /// Useful for installation directories and tarball names, which carry
    /// the version between a product prefix and a platform suffix.
    pub fn find_in(text: &str) -> Option<Self> {
        VERSION_IN_TEXT
            .find_iter(text)
            .find_map(|m| Self::parse(m.as_str()).ok())
    }

    /// The numeric components, as parsed.
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// True when `self` is equal to or newer than `other`.
    pub fn is_at_least(&self, other: &Version) -> bool {
        self >= other
    }

    /// Components with trailing zeros removed; the basis of `Eq` and `Hash`.
    fn significant(&self) -> &[u64] {
        let len = self
            .parts
            .iter()
            .rposition(|&p| p != 0)
            .map_or(0, |i| i + 1);
        &self.parts[..len]
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for idx in 0..len {
            let a = self.parts.get(idx).copied().unwrap_or(0);
            let b = other.parts.get(idx).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn parse_three_components() {
        assert_eq!(v("8.0.21").parts(), &[8, 0, 21]);
    }

    #[test]
    fn parse_single_component() {
        assert_eq!(v("10").parts(), &[10]);
    }

    #[test]
    fn parse_leading_zeros_keeps_numeric_value() {
        assert_eq!(v("05.07.009").parts(), &[5, 7, 9]);
        assert_eq!(v("05.07.009").to_string(), "5.7.9");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Version::parse(""), Err(VersionParseError::Empty));
    }

    #[test]
    fn parse_rejects_empty_segment() {
        for bad in ["8..0", ".8.0", "8.0."] {
            assert!(
                matches!(
                    Version::parse(bad),
                    Err(VersionParseError::EmptySegment { .. })
                ),
                "{bad} should fail with an empty segment"
            );
        }
    }

    #[test]
    fn parse_rejects_non_numeric() {
        for bad in ["8.0.x", "8.0.21-log", "-1.0", "+1.0", " 8.0", "8.0.21\n"] {
            assert!(
                matches!(
                    Version::parse(bad),
                    Err(VersionParseError::InvalidSegment { .. })
                ),
                "{bad:?} should fail with an invalid segment"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        let err = Version::parse("99999999999999999999999.0").unwrap_err();
        assert!(matches!(err, VersionParseError::InvalidSegment { .. }));
    }

    #[test]
    fn parse_error_mentions_input() {
        let err = Version::parse("5.x").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("5.x"));
        assert!(msg.contains("'x'"));
    }

    #[test]
    fn compare_basic() {
        assert!(v("8.0.21") > v("8.0.20"));
        assert!(v("8.0.21") < v("8.1.0"));
        assert!(v("10.4.3") > v("8.0.99"));
        assert_eq!(v("5.7.5").cmp(&v("5.7.5")), Ordering::Equal);
    }

    #[test]
    fn compare_is_numeric_not_lexical() {
        assert!(v("5.7.10") > v("5.7.9"));
        assert!(v("10.0") > v("9.9"));
    }

    #[test]
    fn shorter_version_is_zero_padded() {
        assert_eq!(v("8.0"), v("8.0.0"));
        assert!(v("8.0") < v("8.0.21"));
        assert!(!(v("8.0") > v("8.0.21")));
        assert!(v("8.0.21") > v("8.0"));
        assert!(v("8.1") > v("8.0.21"));
    }

    #[test]
    fn is_at_least_boundaries() {
        assert!(v("8.0").is_at_least(&v("8.0.0")));
        assert!(v("8.0.0").is_at_least(&v("8.0")));
        assert!(!v("8.0").is_at_least(&v("8.0.21")));
        assert!(v("8.0.21").is_at_least(&v("8.0")));
        assert!(v("5.7.5").is_at_least(&v("5.7.5")));
    }

    #[test]
    fn hash_agrees_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(v("8.0"));
        assert!(set.contains(&v("8.0.0")));
        assert!(!set.contains(&v("8.0.1")));
    }

    #[test]
    fn display_joins_components() {
        assert_eq!(v("8.0.21").to_string(), "8.0.21");
        assert_eq!(Version::new(vec![10, 4]).unwrap().to_string(), "10.4");
    }

    #[test]
    fn find_in_basedir_name() {
        let found = Version::find_in("mysql-8.0.21-linux-glibc2.12-x86_64").unwrap();
        assert_eq!(found.parts(), &[8, 0, 21]);
    }

    #[test]
    fn find_in_short_name() {
        assert_eq!(Version::find_in("ps5.7.30").unwrap().parts(), &[5, 7, 30]);
        assert_eq!(Version::find_in("10.4").unwrap().parts(), &[10, 4]);
    }

    #[test]
    fn new_rejects_empty_components() {
        assert_eq!(Version::new(vec![]), Err(VersionParseError::Empty));
        assert_eq!(Version::new(vec![0]).unwrap(), v("0"));
    }

    #[test]
    fn find_in_skips_overflowing_runs() {
        let found = Version::find_in("build-99999999999999999999.1-mysql-8.0.21").unwrap();
        assert_eq!(found.parts(), &[8, 0, 21]);
    }

    #[test]
    fn find_in_without_version() {
        assert!(Version::find_in("mysql-latest").is_none());
        assert!(Version::find_in("").is_none());
    }

    #[test]
    fn serde_uses_dotted_string() {
        let json = serde_json::to_string(&v("5.7.5")).unwrap();
        assert_eq!(json, "\"5.7.5\"");

        let parsed: Version = serde_json::from_str("\"8.0.11\"").unwrap();
        assert_eq!(parsed, v("8.0.11"));

        assert!(serde_json::from_str::<Version>("\"8.x\"").is_err());
    }
}
