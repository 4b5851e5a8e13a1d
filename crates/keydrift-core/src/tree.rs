//! The tree accessor boundary.
//!
//! Everything the core needs from a parsed document is expressed by
//! [`TreeNode`]: is a node a container, and what are its named children.
//! Where the tree came from (JSON, YAML, an in-memory map) is the calling
//! shell's business.

use serde_json::Value;

/// Maximum traversal depth before a walk is rejected.
///
/// Trees produced by the bundled `serde_json::Value` accessor are acyclic
/// and never get near this. The bound exists so a hand-rolled [`TreeNode`]
/// impl over a cyclic or degenerate structure fails with
/// [`DriftError::DepthExceeded`](crate::DriftError::DepthExceeded) instead
/// of recursing forever.
pub const MAX_DEPTH: usize = 128;

/// Accessor capability any tree-shaped document structure must satisfy.
pub trait TreeNode {
    /// True for object-like nodes with named children.
    fn is_container(&self) -> bool;

    /// Named children in declaration/encounter order; empty for leaves.
    ///
    /// The order only influences the order in which findings are first
    /// discovered. Comparison itself is order-insensitive, and the
    /// aggregator imposes the deterministic report order afterwards.
    fn children(&self) -> Vec<(&str, &Self)>;
}

/// Objects are containers. Arrays, scalars, and null are leaves: the drift
/// check is about named keys, and array elements have positions, not names.
impl TreeNode for Value {
    fn is_container(&self) -> bool {
        self.is_object()
    }

    fn children(&self) -> Vec<(&str, &Self)> {
        match self {
            Value::Object(map) => map.iter().map(|(name, child)| (name.as_str(), child)).collect(),
            _ => Vec::new(),
        }
    }
}

/// A named, parsed document. Identity is the source name (e.g. filename).
///
/// The core only borrows the tree for the duration of a comparison run;
/// ownership stays with the caller.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a, N: TreeNode> {
    name: &'a str,
    root: &'a N,
}

impl<'a, N: TreeNode> Document<'a, N> {
    pub fn new(name: &'a str, root: &'a N) -> Self {
        Self { name, root }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn root(&self) -> &'a N {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_are_containers() {
        assert!(json!({"a": 1}).is_container());
        assert!(json!({}).is_container());
    }

    #[test]
    fn scalars_arrays_and_null_are_leaves() {
        assert!(!json!(1).is_container());
        assert!(!json!("text").is_container());
        assert!(!json!([1, 2]).is_container());
        assert!(!json!(null).is_container());
        assert!(json!([1, 2]).children().is_empty());
    }

    #[test]
    fn children_preserve_declaration_order() {
        let value = json!({"zeta": 1, "alpha": {"inner": 2}});
        let names: Vec<&str> = value.children().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }
}
