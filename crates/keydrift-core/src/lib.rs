//! # Keydrift Core
//!
//! Detects structural key-level drift between hierarchical key/value
//! documents (localization resource files being the canonical case) that
//! are expected to expose the same set of nested keys.
//!
//! The core is **format-agnostic**: it does not parse anything. It consumes
//! already-parsed trees through the [`TreeNode`] accessor boundary and only
//! asks each node whether it is a container and what its named children are.
//! A `TreeNode` impl for `serde_json::Value` ships with the crate so a JSON
//! shell stays thin; YAML or an in-memory map would work identically.
//!
//! ## Pipeline
//!
//! ```text
//! Document<N>            ← named, borrowed parsed tree
//!     │
//! check_naming           ← flags key names embedding the separator
//! compare_keys           ← per ordered document pair, flags absent paths
//!     │
//! Vec<Mismatch>          ← flat finding stream, any order
//!     │
//! aggregate              ← dedup by (path, source, kind), sort, partition
//!     │
//! Vec<ReportSection>     ← deterministic per-source-document sections
//!     │
//! render                 ← human-readable report text
//! ```
//!
//! Findings are data, never `Err`. The only genuine failures are
//! precondition violations surfaced as [`DriftError`].

pub mod aggregate;
pub mod compare;
pub mod error;
pub mod mismatch;
pub mod naming;
pub mod path;
pub mod report;
pub mod tree;

pub use aggregate::{MismatchGroup, ReportSection, aggregate};
pub use compare::{compare_all, compare_keys, path_exists};
pub use error::DriftError;
pub use mismatch::{Mismatch, MismatchKind};
pub use naming::check_naming;
pub use path::{KeyPath, SEPARATOR};
pub use report::{NO_DRIFT_MESSAGE, render};
pub use tree::{Document, MAX_DEPTH, TreeNode};
