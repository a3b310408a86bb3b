//! The build catalog supplied by the release feed.
//!
//! The feed hands over a JSON array of builds, newest first by publish
//! time. Entry order is significant: the resolver inspects the head of the
//! unfiltered catalog to recognize a known-broken current build. Note that
//! "newest" means publish time, not version order; the two can diverge.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::version::VersionId;

/// A platform-specific downloadable artifact for a build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Target platform identifier (e.g., "win32", "linux").
    pub platform_id: String,
    /// Retrieval locator for the artifact.
    pub locator: String,
}

/// A named build from the release feed.
///
/// This type mirrors the feed wire format and is echoed back verbatim as
/// the resolver's output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Build {
    /// Version literal (e.g., "0.27.1-insiders2").
    pub name: String,
    /// Published assets; an empty set marks the build unpublished.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Build {
    /// Whether any asset was successfully published for this build.
    pub fn is_published(&self) -> bool {
        !self.assets.is_empty()
    }
}

/// A catalog entry: a build with its name parsed once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub build: Build,
    pub version: VersionId,
}

/// The ordered sequence of known builds, newest first.
///
/// Construction drops entries whose name fails to parse, so the resolver
/// only ever sees well-formed versions. A partially malformed feed
/// degrades entry by entry instead of aborting resolution outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from feed entries, preserving feed order.
    ///
    /// Entries with a malformed name are dropped with a warning.
    pub fn from_builds(builds: Vec<Build>) -> Self {
        let entries = builds
            .into_iter()
            .filter_map(|build| match build.name.parse::<VersionId>() {
                Ok(version) => Some(CatalogEntry { build, version }),
                Err(e) => {
                    warn!("Dropping catalog entry: {}", e);
                    None
                }
            })
            .collect();
        Catalog { entries }
    }

    /// All entries in feed order (newest first).
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The most recently created entry, if any.
    pub fn newest(&self) -> Option<&CatalogEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
