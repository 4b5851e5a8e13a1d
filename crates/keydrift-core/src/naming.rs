//! Naming consistency check: key names must not embed the separator.

use crate::error::DriftError;
use crate::mismatch::Mismatch;
use crate::path::{KeyPath, SEPARATOR};
use crate::tree::{Document, MAX_DEPTH, TreeNode};

/// Walks one document depth-first and flags every key name that contains
/// the separator character.
///
/// A flagged name does not stop the descent: its subtree may hold further,
/// independent naming defects. Leaves never recurse.
pub fn check_naming<N: TreeNode>(document: &Document<'_, N>) -> Result<Vec<Mismatch>, DriftError> {
    let mut mismatches = Vec::new();
    let mut segments = Vec::new();
    walk(document.root(), document.name(), &mut segments, &mut mismatches)?;
    Ok(mismatches)
}

fn walk<N: TreeNode>(
    node: &N,
    source: &str,
    segments: &mut Vec<String>,
    out: &mut Vec<Mismatch>,
) -> Result<(), DriftError> {
    if segments.len() >= MAX_DEPTH {
        return Err(DriftError::DepthExceeded {
            document: source.to_string(),
            limit: MAX_DEPTH,
        });
    }
    for (name, child) in node.children() {
        segments.push(name.to_string());
        if name.contains(SEPARATOR) {
            out.push(Mismatch::InconsistentNaming {
                path: KeyPath::new(segments.clone()),
                source: source.to_string(),
                segment: name.to_string(),
            });
        }
        if child.is_container() {
            walk(child, source, segments, out)?;
        }
        segments.pop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn naming(name: &str, root: &Value) -> Vec<Mismatch> {
        check_naming(&Document::new(name, root)).expect("naming check should succeed")
    }

    #[test]
    fn flags_key_embedding_the_separator() {
        let doc = json!({"a.b": 1});
        let found = naming("en.json", &doc);
        assert_eq!(
            found,
            vec![Mismatch::InconsistentNaming {
                path: KeyPath::new(vec!["a.b".into()]),
                source: "en.json".into(),
                segment: "a.b".into(),
            }]
        );
    }

    #[test]
    fn clean_names_yield_nothing() {
        let doc = json!({"greeting": {"formal": "Hello", "casual": "Hi"}});
        assert!(naming("en.json", &doc).is_empty());
    }

    #[test]
    fn descends_into_flagged_subtrees() {
        // The offending key is itself a container; its descendants can
        // carry independent defects and must still be visited.
        let doc = json!({"a.b": {"c.d": 1, "clean": 2}});
        let found = naming("en.json", &doc);
        let paths: Vec<String> = found.iter().map(|m| m.path().to_string()).collect();
        assert_eq!(paths, vec!["a.b", "a.b.c.d"]);
        assert_eq!(found[1].member(), "c.d");
    }

    #[test]
    fn flags_nested_key_with_clean_ancestors() {
        let doc = json!({"outer": {"bad.key": "value"}});
        let found = naming("en.json", &doc);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path().to_string(), "outer.bad.key");
        assert_eq!(found[0].member(), "bad.key");
    }

    #[test]
    fn leaf_values_never_recurse() {
        let doc = json!({"list": ["a.b", "c.d"], "scalar": "e.f"});
        assert!(naming("en.json", &doc).is_empty());
    }
}
