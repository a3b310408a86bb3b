//! Update channel selection.
//!
//! The channel a client follows decides which builds it may be moved to:
//! `Default` tracks stable releases only, `Insiders` tracks everything.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The update track a client follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UpdateChannel {
    /// Stable releases only; prerelease builds are never offered.
    #[default]
    Default,
    /// Prerelease (insiders) builds included.
    Insiders,
}

impl fmt::Display for UpdateChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateChannel::Default => write!(f, "Default"),
            UpdateChannel::Insiders => write!(f, "Insiders"),
        }
    }
}

impl FromStr for UpdateChannel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(UpdateChannel::Default),
            "insiders" => Ok(UpdateChannel::Insiders),
            _ => anyhow::bail!("Unknown update channel: {}. Expected Default or Insiders.", s),
        }
    }
}
