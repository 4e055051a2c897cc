pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod scanner;
pub mod ui;

pub use domain::{classify, compare, parse_key, precedes, sort_versions};
pub use domain::{ParsedVersion, VersionClassification, VersionEntry};
pub use error::{ReleaseError, Result};
pub use scanner::{get_release_versions, latest_release, scan_release_versions};
