//! The update decision function.
//!
//! Given the catalog, the currently installed version, and the client's
//! channel, decide whether the client should move to a different build.
//! Pure and stateless: no I/O, no shared state, safe to call once per
//! feed poll with fresh inputs.

use std::cmp::Ordering;

use log::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::channel::UpdateChannel;
use crate::version::VersionId;

/// Resolve the build the client should move to, if any.
///
/// The candidate is the first published build in feed order, restricted to
/// stable releases on the `Default` channel. Relative to `current`:
///
/// - an upgrade is always returned; a client is never left behind a newer
///   published build in its channel;
/// - an equal version yields no target;
/// - a downgrade is returned unconditionally on `Default` (a stable-channel
///   client must not stay on a prerelease build), and on `Insiders` only
///   when the head of the unfiltered catalog names exactly `current` with
///   no published assets. That head state means the build the client is
///   running was attempted but never published, so the client falls back
///   to the newest build that did publish. Any other Insiders downgrade
///   (say, a current version the feed does not know about) yields no
///   target.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    current: &VersionId,
    channel: UpdateChannel,
) -> Option<&'a CatalogEntry> {
    let candidate = catalog
        .entries()
        .iter()
        .filter(|entry| match channel {
            UpdateChannel::Default => !entry.version.is_prerelease(),
            UpdateChannel::Insiders => true,
        })
        .find(|entry| entry.build.is_published())?;

    match candidate.version.cmp(current) {
        Ordering::Greater => Some(candidate),
        Ordering::Equal => {
            debug!("Already on the best published build {}", candidate.version);
            None
        }
        Ordering::Less => match channel {
            UpdateChannel::Default => Some(candidate),
            UpdateChannel::Insiders => {
                let head = catalog.newest()?;
                if head.version == *current && !head.build.is_published() {
                    debug!(
                        "Current build {} is a known-broken head entry, falling back to {}",
                        current, candidate.version
                    );
                    Some(candidate)
                } else {
                    debug!(
                        "Refusing to move {} down to {}: current build is not a known-broken entry",
                        current, candidate.version
                    );
                    None
                }
            }
        },
    }
}
