//! Release directory scanning
//!
//! Release builds live under `{output_dir}/releases/{version}`. The scanner
//! collects the names that look like versions and orders them newest first.

use crate::domain::sort_versions;
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the subdirectory holding one entry per release version
pub const RELEASES_DIR: &str = "releases";

static VERSION_ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+.*$").expect("entry pattern is a valid regex"));

/// Whether a directory entry name looks like a version (starts with an ASCII digit)
pub fn is_version_entry(name: &str) -> bool {
    VERSION_ENTRY_RE.is_match(name)
}

/// Path of the releases directory inside an output directory
pub fn releases_dir(output_dir: impl AsRef<Path>) -> PathBuf {
    output_dir.as_ref().join(RELEASES_DIR)
}

/// Scans `{output_dir}/releases` and sorts the version entries newest first.
///
/// Every immediate entry whose name starts with a digit is kept, files as
/// well as directories. Names that are not valid UTF-8 are skipped.
///
/// # Returns
/// * `Ok(None)` - If the releases directory does not exist
/// * `Ok(Some(versions))` - All matching entries sorted newest first
/// * `Err` - If the directory exists but cannot be read
pub fn scan_release_versions(output_dir: impl AsRef<Path>) -> Result<Option<Vec<String>>> {
    let dir = releases_dir(output_dir);

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no releases directory at {}", dir.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let file_name = entry?.file_name();
        match file_name.to_str() {
            Some(name) if is_version_entry(name) => names.push(name.to_string()),
            Some(name) => log::debug!("skipping non-version entry '{}'", name),
            None => log::debug!("skipping non UTF-8 entry {:?}", file_name),
        }
    }

    log::debug!("found {} release versions in {}", names.len(), dir.display());
    Ok(Some(sort_versions(&names)))
}

/// Lists release versions found under `{output_dir}/releases`, newest first.
///
/// A missing releases directory yields an empty list.
pub fn get_release_versions(output_dir: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(scan_release_versions(output_dir)?.unwrap_or_default())
}

/// Newest release under `{output_dir}/releases`, if any
pub fn latest_release(output_dir: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(get_release_versions(output_dir)?.into_iter().next())
}
