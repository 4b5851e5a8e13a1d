//! Cross-document key comparison.

use crate::error::DriftError;
use crate::mismatch::Mismatch;
use crate::naming::check_naming;
use crate::path::KeyPath;
use crate::tree::{Document, MAX_DEPTH, TreeNode};

/// Runs the naming check on every document and the directed key comparison
/// for every ordered document pair, pooling the raw findings.
///
/// For N documents that is N naming walks plus N×(N−1) comparisons, each
/// independent of the others. The returned mismatches carry no ordering
/// guarantee; [`aggregate`](crate::aggregate) imposes the deterministic
/// report order.
pub fn compare_all<N: TreeNode>(
    documents: &[Document<'_, N>],
) -> Result<Vec<Mismatch>, DriftError> {
    for (idx, doc) in documents.iter().enumerate() {
        if !doc.root().is_container() {
            return Err(DriftError::MissingRoot {
                document: doc.name().to_string(),
            });
        }
        if documents[..idx].iter().any(|seen| seen.name() == doc.name()) {
            return Err(DriftError::DuplicateDocument {
                document: doc.name().to_string(),
            });
        }
    }

    let mut mismatches = Vec::new();
    for doc in documents {
        mismatches.extend(check_naming(doc)?);
        for other in documents {
            if other.name() != doc.name() {
                mismatches.extend(compare_keys(doc, other)?);
            }
        }
    }
    Ok(mismatches)
}

/// Walks `source` depth-first and emits one `NotInOtherFile` mismatch for
/// every path that has no equivalent in `other`.
///
/// Descent stops at a missing path: the children of a missing node are
/// trivially also missing, and reporting them would only restate the same
/// defect once per descendant.
pub fn compare_keys<N: TreeNode>(
    source: &Document<'_, N>,
    other: &Document<'_, N>,
) -> Result<Vec<Mismatch>, DriftError> {
    let mut mismatches = Vec::new();
    let mut segments = Vec::new();
    walk(
        source.root(),
        other.root(),
        source.name(),
        other.name(),
        &mut segments,
        &mut mismatches,
    )?;
    Ok(mismatches)
}

fn walk<N: TreeNode>(
    node: &N,
    other_root: &N,
    source: &str,
    other: &str,
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
        if !path_exists(segments, other_root) {
            out.push(Mismatch::NotInOtherFile {
                path: KeyPath::new(segments.clone()),
                source: source.to_string(),
                missing_from: other.to_string(),
            });
        } else if child.is_container() {
            walk(child, other_root, source, other, segments, out)?;
        }
        segments.pop();
    }
    Ok(())
}

/// Segment-by-segment existence check from `node` downwards.
///
/// Each step requires a child whose name exactly equals the next segment;
/// a leaf reached before the segments are exhausted means the path does
/// not exist (a leaf has no children to match against).
pub fn path_exists<N: TreeNode>(segments: &[String], node: &N) -> bool {
    let Some((head, rest)) = segments.split_first() else {
        return true;
    };
    for (name, child) in node.children() {
        if name == head.as_str() {
            return path_exists(rest, child);
        }
    }
    false
}
