//! Version identifiers and their total order.
//!
//! Builds are named `MAJOR.MINOR.PATCH` with an optional `-insidersN`
//! suffix marking a prerelease. A release always orders above every
//! prerelease of the same numeric core.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Error returned when a version literal does not match the
/// `MAJOR.MINOR.PATCH[-insidersN]` grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed version {0:?}: expected MAJOR.MINOR.PATCH[-insidersN]")]
pub struct ParseVersionError(pub String);

/// A parsed, immutable version identifier.
///
/// `prerelease` is `None` for a release, `Some(n)` for insiders build `n`.
/// A bare `-insiders` suffix parses as sequence 0, the lowest prerelease
/// of its core-version family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<u32>,
}

impl VersionId {
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    fn core(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionId {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseVersionError(s.to_string());

        let (core, suffix) = match s.split_once('-') {
            Some((core, suffix)) => (core, Some(suffix)),
            None => (s, None),
        };

        let mut parts = core.split('.');
        let mut next_num = || -> Result<u32, ParseVersionError> {
            parts
                .next()
                .and_then(|p| p.parse::<u32>().ok())
                .ok_or_else(malformed)
        };
        let major = next_num()?;
        let minor = next_num()?;
        let patch = next_num()?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let prerelease = match suffix {
            None => None,
            Some(rest) => {
                let digits = rest.strip_prefix("insiders").ok_or_else(malformed)?;
                if digits.is_empty() {
                    Some(0)
                } else {
                    Some(digits.parse::<u32>().map_err(|_| malformed())?)
                }
            }
        };

        Ok(VersionId {
            major,
            minor,
            patch,
            prerelease,
        })
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match self.prerelease {
            None => Ok(()),
            Some(0) => write!(f, "-insiders"),
            Some(n) => write!(f, "-insiders{}", n),
        }
    }
}

impl Ord for VersionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core().cmp(&other.core()).then_with(|| {
            match (self.prerelease, other.prerelease) {
                (None, None) => Ordering::Equal,
                // A release supersedes every insiders build of its core.
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            }
        })
    }
}

impl PartialOrd for VersionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
