use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Prerelease;

use crate::version::error::VersionError;

/// A released version: `major.minor.patch` with an optional pre-release label.
///
/// Build metadata is accepted when parsing but not kept, so two tags that only
/// differ in build metadata are the same `Version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<Prerelease>,
}

impl Version {
    /// Creates a stable version.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Parse a release tag or minimum-version string.
    ///
    /// Strips one leading `v` and pads partial versions with zeros:
    /// - "v1.2.3" -> 1.2.3
    /// - "1" -> 1.0.0
    /// - "1.2" -> 1.2.0
    /// - "1.2-rc.1" -> 1.2.0-rc.1
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let normalized = pad_partial(stripped);

        semver::Version::parse(&normalized)
            .map(Self::from)
            .map_err(|e| VersionError::Invalid {
                input: raw.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&Prerelease> {
        self.pre.as_ref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre.is_some()
    }

    /// Whether both versions belong to the same `major.minor` line.
    pub fn same_minor_line(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

fn pad_partial(version: &str) -> String {
    let split_at = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(split_at);
    match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => version.to_string(),
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Self {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre: (!v.pre.is_empty()).then_some(v.pre),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                // A stable release outranks its own pre-releases
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}
