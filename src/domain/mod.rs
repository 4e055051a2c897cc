//! Domain logic - pure version classification and ordering, no filesystem access

pub mod classification;
pub mod ordering;
pub mod parsed;

pub use classification::{classify, VersionClassification};
pub use ordering::{compare, precedes, sort_versions, VersionEntry};
pub use parsed::{parse_key, precedence, ParsedVersion};
