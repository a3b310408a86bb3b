use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::catalog::{Build, Catalog};
use crate::channel::UpdateChannel;
use crate::resolver;
use crate::version::VersionId;

/// Resolve the next build for a client against a catalog document.
///
/// Reads the catalog JSON from `catalog_path` ("-" or absent means stdin),
/// prints the selected build name (or the full build record with `json`),
/// or a no-update line when there is nothing to do.
#[tracing::instrument(skip(catalog_path))]
pub fn run(
    catalog_path: Option<PathBuf>,
    current: &str,
    channel: UpdateChannel,
    json: bool,
) -> Result<()> {
    let raw = read_catalog(catalog_path.as_deref())?;
    match resolve_catalog_json(&raw, current, channel)? {
        Some(build) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&build)?);
            } else {
                println!("{}", build.name);
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("No update available.");
            }
        }
    }
    Ok(())
}

/// Parse a catalog JSON document and resolve against it.
///
/// Malformed catalog entries are dropped individually; a malformed current
/// version aborts the invocation.
fn resolve_catalog_json(
    raw: &str,
    current: &str,
    channel: UpdateChannel,
) -> Result<Option<Build>> {
    let builds: Vec<Build> =
        serde_json::from_str(raw).context("Failed to parse catalog JSON")?;
    debug!("Loaded {} catalog entries", builds.len());

    let catalog = Catalog::from_builds(builds);
    let current: VersionId = current
        .parse()
        .with_context(|| format!("Invalid current version {:?}", current))?;

    Ok(resolver::resolve(&catalog, &current, channel).map(|entry| entry.build.clone()))
}

fn read_catalog(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("Failed to read catalog from {:?}", p))
        }
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read catalog from stdin")?;
            Ok(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        { "name": "0.27.1-insiders3", "assets": [] },
        {
            "name": "0.27.1-insiders2",
            "assets": [{ "platformId": "linux", "locator": "https://example.com/a" }]
        },
        {
            "name": "0.27.0",
            "assets": [{ "platformId": "linux", "locator": "https://example.com/b" }]
        }
    ]"#;

    #[test]
    fn test_resolve_catalog_json_default_channel() {
        let result =
            resolve_catalog_json(CATALOG, "0.27.1-insiders2", UpdateChannel::Default).unwrap();
        assert_eq!(result.unwrap().name, "0.27.0");
    }

    #[test]
    fn test_resolve_catalog_json_insiders_up_to_date() {
        let result =
            resolve_catalog_json(CATALOG, "0.27.1-insiders2", UpdateChannel::Insiders).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_resolve_catalog_json_tolerates_bad_entries() {
        let raw = r#"[
            { "name": "garbage", "assets": [] },
            {
                "name": "0.28.0",
                "assets": [{ "platformId": "linux", "locator": "https://example.com/c" }]
            }
        ]"#;
        let result = resolve_catalog_json(raw, "0.27.0", UpdateChannel::Default).unwrap();
        assert_eq!(result.unwrap().name, "0.28.0");
    }

    #[test]
    fn test_resolve_catalog_json_rejects_bad_current_version() {
        let err = resolve_catalog_json(CATALOG, "not-a-version", UpdateChannel::Default)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid current version"));
    }

    #[test]
    fn test_resolve_catalog_json_rejects_invalid_json() {
        let err = resolve_catalog_json("{", "0.27.0", UpdateChannel::Default).unwrap_err();
        assert!(err.to_string().contains("catalog JSON"));
    }

    #[test]
    fn test_read_catalog_missing_file_fails() {
        let err = read_catalog(Some(Path::new("/nonexistent/catalog.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
