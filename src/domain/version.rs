use crate::error::{ReleaseGateError, Result};
use semver::Prerelease;
use std::fmt;
use std::str::FromStr;

/// Semantic version with an optional pre-release label
///
/// Field order matters: the derived ordering compares major, minor, patch and
/// then the label, and `Prerelease` sorts an empty label above any non-empty one,
/// so `1.6.0-beta < 1.6.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Prerelease,
}

impl SemanticVersion {
    /// Create a release version without a pre-release label
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
        }
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE]`, tolerating a leading `v` or `V`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let clean = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let (core, label) = match clean.split_once('-') {
            Some((core, label)) => (core, Some(label)),
            None => (clean, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseGateError::invalid_version(
                input,
                "expected MAJOR.MINOR.PATCH[-PRERELEASE]",
            ));
        }

        let major = parse_component(input, "major", parts[0])?;
        let minor = parse_component(input, "minor", parts[1])?;
        let patch = parse_component(input, "patch", parts[2])?;

        let pre = match label {
            None => Prerelease::EMPTY,
            Some("") => {
                return Err(ReleaseGateError::invalid_version(
                    input,
                    "empty pre-release label",
                ))
            }
            Some(label) => Prerelease::new(label).map_err(|e| {
                ReleaseGateError::invalid_version(
                    input,
                    format!("invalid pre-release label '{}': {}", label, e),
                )
            })?,
        };

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            pre,
        })
    }

    /// Whether this version carries a pre-release label
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// The pre-release label, if any
    pub fn prerelease_label(&self) -> Option<&str> {
        if self.pre.is_empty() {
            None
        } else {
            Some(self.pre.as_str())
        }
    }
}

// `u64::from_str` accepts a leading '+', so check the digits ourselves.
fn parse_component(input: &str, name: &str, value: &str) -> Result<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseGateError::invalid_version(
            input,
            format!("{} version '{}' is not a non-negative integer", name, value),
        ));
    }
    if value.len() > 1 && value.starts_with('0') {
        return Err(ReleaseGateError::invalid_version(
            input,
            format!("{} version '{}' has a leading zero", name, value),
        ));
    }

    value.parse::<u64>().map_err(|_| {
        ReleaseGateError::invalid_version(input, format!("{} version '{}' is too large", name, value))
    })
}

impl FromStr for SemanticVersion {
    type Err = ReleaseGateError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}
