//! Error types for keydrift core operations.
//!
//! Key mismatches between documents are findings
//! ([`Mismatch`](crate::Mismatch)), not errors. `DriftError` covers the
//! genuine failure modes: precondition violations that abort a whole
//! comparison run.

/// A comparison run could not be carried out over the supplied documents.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    /// A document's root is not a container node, so there are no keys to
    /// walk. Parsing is assumed to have succeeded before the core is
    /// invoked; a scalar root means that assumption was violated.
    #[error("document {document:?} has no container root to compare")]
    MissingRoot { document: String },

    /// Two supplied documents share a name. Identity is the source name,
    /// so duplicates would make `missing_from` reports ambiguous.
    #[error("duplicate document name {document:?}")]
    DuplicateDocument { document: String },

    /// A traversal descended past [`MAX_DEPTH`](crate::MAX_DEPTH).
    /// Documents parsed from acyclic source formats never trigger this;
    /// it rejects cyclic or degenerate custom tree structures explicitly
    /// instead of looping forever.
    #[error("document {document:?} exceeds maximum key depth {limit}")]
    DepthExceeded { document: String, limit: usize },
}
