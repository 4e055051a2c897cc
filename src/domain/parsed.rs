use crate::domain::classification::VersionClassification;
use semver::Version;
use std::cmp::Ordering;

/// Comparison key derived from a classified version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedVersion {
    /// Parsed per semver.org; build metadata is kept but never compared
    Semantic(Version),
    /// The string that failed to parse, ordered lexicographically
    Unsemantic(String),
}

impl ParsedVersion {
    /// Parse the comparison key of a classification.
    ///
    /// `Standard` versions are parsed as-is; `Describe` versions are parsed
    /// through their synthesized `{base}+{commits}-{hash}` key. Anything the
    /// semver parser rejects (leading zeros, missing components, non-numeric
    /// segments) becomes `Unsemantic` carrying that same key.
    pub fn from_classification(classification: &VersionClassification) -> Self {
        let key = classification.comparison_key();
        match Version::parse(&key) {
            Ok(version) => ParsedVersion::Semantic(version),
            Err(_) => ParsedVersion::Unsemantic(key),
        }
    }

    pub fn as_semantic(&self) -> Option<&Version> {
        match self {
            ParsedVersion::Semantic(version) => Some(version),
            ParsedVersion::Unsemantic(_) => None,
        }
    }
}

/// Semver precedence: major, minor, patch, then prerelease.
///
/// Build metadata is excluded, so `1.2.3` and `1.2.3+4-abc` are equal here.
/// A version without prerelease outranks one with a prerelease.
pub fn precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Shorthand for [`ParsedVersion::from_classification`]
pub fn parse_key(classification: &VersionClassification) -> ParsedVersion {
    ParsedVersion::from_classification(classification)
}
