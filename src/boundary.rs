use std::fmt;

/// Non-fatal conditions found while listing releases.
/// These are reported to the user but never stop the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanWarning {
    /// The output directory has no `releases` subdirectory
    MissingReleasesDir { path: String },
    /// Version is not semver and is ordered by plain string comparison
    UnsemanticVersion { version: String },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::MissingReleasesDir { path } => {
                write!(f, "No releases directory at '{}'", path)
            }
            ScanWarning::UnsemanticVersion { version } => {
                write!(
                    f,
                    "Version '{}' is not a semantic version; ordered lexicographically",
                    version
                )
            }
        }
    }
}
