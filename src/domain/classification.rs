//! Shape detection for raw version strings
//!
//! A release name is either a plain version ("1.2.3", "2.0.0-rc.1", "foo")
//! or a `git describe` style pseudo-version ("1.2.3-4-abc123") made of a
//! base version, the number of commits since that base was tagged, and a
//! short hash.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Digits are ASCII only. Hash alphabet is `[A-Ga-g0-9]`, which also admits 'g'/'G'.
static DESCRIBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<ver>[0-9]+\.[0-9]+\.[0-9]+)-(?<commits>[0-9]+)-(?<hash>[A-Ga-g0-9]+)$")
        .expect("describe pattern is a valid regex")
});

/// The two shapes a raw version string can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionClassification {
    /// Anything that is not a describe-form pseudo-version
    Standard(String),
    /// `{base}-{commits_since}-{hash}`
    Describe {
        base: String,
        commits_since: u64,
        hash: String,
    },
}

impl VersionClassification {
    /// Classify a raw version string.
    ///
    /// Never fails: every string is either `Describe` (the whole string
    /// matches the describe pattern) or `Standard`. A commit count that
    /// does not fit in a `u64` saturates to `u64::MAX`.
    ///
    /// # Example
    /// ```ignore
    /// assert!(VersionClassification::classify("0.0.1-2-a1d2g3f").is_describe());
    /// assert!(!VersionClassification::classify("0.0.1").is_describe());
    /// ```
    pub fn classify(raw: &str) -> Self {
        let Some(captures) = DESCRIBE_RE.captures(raw) else {
            return VersionClassification::Standard(raw.to_string());
        };

        // The pattern only admits ASCII digits, so overflow is the only failure
        let commits_since = captures["commits"].parse::<u64>().unwrap_or(u64::MAX);

        VersionClassification::Describe {
            base: captures["ver"].to_string(),
            commits_since,
            hash: captures["hash"].to_string(),
        }
    }

    pub fn is_describe(&self) -> bool {
        matches!(self, VersionClassification::Describe { .. })
    }

    /// String handed to the semver parser.
    ///
    /// Describe-form versions move the commit count and hash into build
    /// metadata (`1.2.3+4-abc123`) so they share precedence with their base.
    pub fn comparison_key(&self) -> String {
        match self {
            VersionClassification::Standard(raw) => raw.clone(),
            VersionClassification::Describe {
                base,
                commits_since,
                hash,
            } => format!("{}+{}-{}", base, commits_since, hash),
        }
    }
}

impl fmt::Display for VersionClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionClassification::Standard(raw) => write!(f, "{}", raw),
            VersionClassification::Describe {
                base,
                commits_since,
                hash,
            } => write!(f, "{}-{}-{}", base, commits_since, hash),
        }
    }
}

/// Shorthand for [`VersionClassification::classify`]
pub fn classify(raw: &str) -> VersionClassification {
    VersionClassification::classify(raw)
}
