//! Main listing workflow
//!
//! Resolves where versions come from (explicit arguments or a release
//! output directory), orders them, and collects warnings. Printing is left
//! to the caller.

use anyhow::Result;

use crate::boundary::ScanWarning;
use crate::config::Config;
use crate::domain::{sort_versions, VersionEntry};
use crate::scanner;

/// Arguments for the listing workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListWorkflowArgs {
    /// Release output directory, overriding the configured one
    pub output_dir: Option<String>,

    /// Versions to sort instead of scanning a directory
    pub versions: Vec<String>,

    /// Keep only the newest version
    pub latest_only: bool,
}

/// Result of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResult {
    /// Versions, newest first
    pub versions: Vec<String>,

    /// Non-fatal issues to report
    pub warnings: Vec<ScanWarning>,
}

/// Main listing workflow
///
/// 1. Use the explicit versions if any were given, otherwise scan
///    `{output_dir}/releases`
/// 2. Sort newest first
/// 3. Collect warnings for a missing releases directory and, when enabled,
///    for versions ordered by the string fallback
/// 4. Truncate to the newest entry if requested
///
/// # Arguments
///
/// * `args` - Workflow arguments
/// * `config` - Loaded configuration
///
/// # Returns
///
/// The ordered versions and any warnings, or the filesystem error that
/// stopped the scan
pub fn run_list_workflow(args: ListWorkflowArgs, config: &Config) -> Result<ListingResult> {
    let mut warnings = Vec::new();

    let mut versions = if !args.versions.is_empty() {
        sort_versions(&args.versions)
    } else {
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| config.output_dir.clone());

        match scanner::scan_release_versions(&output_dir)? {
            Some(versions) => versions,
            None => {
                warnings.push(ScanWarning::MissingReleasesDir {
                    path: scanner::releases_dir(&output_dir).display().to_string(),
                });
                Vec::new()
            }
        }
    };

    if config.behavior.warn_unsemantic {
        warnings.extend(
            versions
                .iter()
                .filter(|v| !VersionEntry::new(v.as_str()).is_semantic())
                .map(|v| ScanWarning::UnsemanticVersion { version: v.clone() }),
        );
    }

    if args.latest_only {
        versions.truncate(1);
    }

    Ok(ListingResult { versions, warnings })
}
