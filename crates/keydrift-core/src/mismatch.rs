//! The mismatch taxonomy: findings, not failures.

use crate::path::KeyPath;
use serde::Serialize;
use std::fmt;

/// Which kind of structural defect a mismatch records.
///
/// `Ord` is the fixed secondary report order: `InconsistentNaming` sorts
/// before `NotInOtherFile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    InconsistentNaming,
    NotInOtherFile,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentNaming => write!(f, "inconsistent_naming"),
            Self::NotInOtherFile => write!(f, "not_in_other_file"),
        }
    }
}

/// A single detected structural defect, discovered while walking the
/// `source` document's tree.
///
/// Invariants: `path` is never empty, and for `NotInOtherFile` the
/// `missing_from` document is never the `source` document itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    /// A key segment name itself contains the separator character, making
    /// its composed path ambiguous.
    InconsistentNaming {
        path: KeyPath,
        source: String,
        segment: String,
    },

    /// `path` exists in `source`'s tree but has no equivalent in
    /// `missing_from`'s tree.
    NotInOtherFile {
        path: KeyPath,
        source: String,
        missing_from: String,
    },
}

impl Mismatch {
    pub fn kind(&self) -> MismatchKind {
        match self {
            Self::InconsistentNaming { .. } => MismatchKind::InconsistentNaming,
            Self::NotInOtherFile { .. } => MismatchKind::NotInOtherFile,
        }
    }

    pub fn path(&self) -> &KeyPath {
        match self {
            Self::InconsistentNaming { path, .. } | Self::NotInOtherFile { path, .. } => path,
        }
    }

    /// The document whose tree was being walked when this was discovered.
    pub fn source(&self) -> &str {
        match self {
            Self::InconsistentNaming { source, .. } | Self::NotInOtherFile { source, .. } => source,
        }
    }

    /// The variant payload that accumulates inside a group: the offending
    /// segment name, or the document the path is missing from.
    pub fn member(&self) -> &str {
        match self {
            Self::InconsistentNaming { segment, .. } => segment,
            Self::NotInOtherFile { missing_from, .. } => missing_from,
        }
    }
}
