//! Newest-first ordering over raw version strings
//!
//! Two semver-parsable versions compare by precedence; on a precedence tie
//! the shape decides (describe-form beats plain, more commits beat fewer,
//! plain vs plain falls back to the raw string). Whenever either side is not
//! semver, the two comparison keys are compared as strings.

use crate::domain::classification::VersionClassification;
use crate::domain::parsed::{precedence, ParsedVersion};
use std::cmp::Ordering;

/// A raw version decorated with its classification and parsed key.
///
/// Built once per input so sorting never re-parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub raw: String,
    pub classification: VersionClassification,
    pub parsed: ParsedVersion,
    key: String,
}

impl VersionEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let classification = VersionClassification::classify(&raw);
        let parsed = ParsedVersion::from_classification(&classification);
        let key = classification.comparison_key();
        VersionEntry {
            raw,
            classification,
            parsed,
            key,
        }
    }

    pub fn is_semantic(&self) -> bool {
        self.parsed.as_semantic().is_some()
    }

    /// Raw string for `Standard`, synthesized key for `Describe`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Less` means `self` is newer and sorts first.
    pub fn newest_first(&self, other: &Self) -> Ordering {
        match (self.parsed.as_semantic(), other.parsed.as_semantic()) {
            (Some(a), Some(b)) => precedence(b, a)
                .then_with(|| tie_break(&self.classification, &other.classification)),
            _ => other.key.cmp(&self.key),
        }
    }

    pub fn precedes(&self, other: &Self) -> bool {
        self.newest_first(other) == Ordering::Less
    }
}

fn tie_break(a: &VersionClassification, b: &VersionClassification) -> Ordering {
    use VersionClassification::{Describe, Standard};

    match (a, b) {
        (Standard(a_raw), Standard(b_raw)) => b_raw.cmp(a_raw),
        (Standard(_), Describe { .. }) => Ordering::Greater,
        (Describe { .. }, Standard(_)) => Ordering::Less,
        (
            Describe {
                commits_since: a_commits,
                ..
            },
            Describe {
                commits_since: b_commits,
                ..
            },
        ) => b_commits.cmp(a_commits),
    }
}

/// True iff `a` must come before `b` in a newest-first list.
pub fn precedes(a: &str, b: &str) -> bool {
    VersionEntry::new(a).precedes(&VersionEntry::new(b))
}

/// [`precedes`] as an `Ordering`: `Less` when `a` comes first.
pub fn compare(a: &str, b: &str) -> Ordering {
    VersionEntry::new(a).newest_first(&VersionEntry::new(b))
}

/// Sort version strings newest first.
///
/// Semver and non-semver entries are each sorted with their own total
/// order, then merged using the string fallback between the two heads.
/// The mixed comparison is not transitive, so it is only ever applied
/// by the merge and never handed to `sort_by`.
///
/// # Example
/// ```ignore
/// let sorted = sort_versions(&["0.0.1", "0.0.1-1-deadbeef", "0.0.2"]);
/// assert_eq!(sorted, vec!["0.0.2", "0.0.1-1-deadbeef", "0.0.1"]);
/// ```
pub fn sort_versions<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
    let (mut semantic, mut unsemantic): (Vec<VersionEntry>, Vec<VersionEntry>) = versions
        .iter()
        .map(|v| VersionEntry::new(v.as_ref()))
        .partition(VersionEntry::is_semantic);

    log::trace!(
        "sorting {} semver and {} non-semver versions",
        semantic.len(),
        unsemantic.len()
    );

    semantic.sort_by(VersionEntry::newest_first);
    unsemantic.sort_by(VersionEntry::newest_first);

    merge_runs(semantic, unsemantic)
}

fn merge_runs(semantic: Vec<VersionEntry>, unsemantic: Vec<VersionEntry>) -> Vec<String> {
    let mut merged = Vec::with_capacity(semantic.len() + unsemantic.len());
    let mut left = semantic.into_iter().peekable();
    let mut right = unsemantic.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => !r.precedes(l),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        if let Some(entry) = next {
            merged.push(entry.raw);
        }
    }

    merged
}
