//! Mismatch aggregation: dedup, sort, partition into report sections.

use crate::mismatch::{Mismatch, MismatchKind};
use serde::Serialize;
use std::collections::HashMap;

/// Deduplicated mismatches sharing the (path, source, kind) signature.
///
/// The same structural defect is routinely discovered more than once — a
/// key missing from several documents yields one raw mismatch per target.
/// A group keeps one row per signature; `members` collects the distinct
/// variant payloads (offending segment names, or missing-from document
/// names) in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchGroup {
    pub path: String,
    pub source: String,
    pub kind: MismatchKind,
    pub members: Vec<String>,
}

/// One source document's groups, in final report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub source: String,
    pub groups: Vec<MismatchGroup>,
}

/// Collapses a raw mismatch stream into ordered report sections.
///
/// A single pass groups by (path, source, kind); duplicates merge
/// regardless of payload, and distinct payloads accumulate as members.
/// Groups are then sorted by path (lexicographic over the composed
/// string), kind (`InconsistentNaming` before `NotInOtherFile`), and
/// source as the tie-break, and partitioned into per-source sections in
/// the order sources first appear in that sorted sequence. The result is
/// the same whatever order the mismatches arrive in.
pub fn aggregate(mismatches: Vec<Mismatch>) -> Vec<ReportSection> {
    let mut index: HashMap<(String, String, MismatchKind), usize> = HashMap::new();
    let mut groups: Vec<MismatchGroup> = Vec::new();

    for mismatch in &mismatches {
        let signature = (
            mismatch.path().to_string(),
            mismatch.source().to_string(),
            mismatch.kind(),
        );
        let member = mismatch.member();
        match index.get(&signature) {
            Some(&at) => {
                let group = &mut groups[at];
                if !group.members.iter().any(|m| m == member) {
                    group.members.push(member.to_string());
                }
            }
            None => {
                index.insert(signature.clone(), groups.len());
                groups.push(MismatchGroup {
                    path: signature.0,
                    source: signature.1,
                    kind: signature.2,
                    members: vec![member.to_string()],
                });
            }
        }
    }

    // Members accumulate in first-seen order during the pass above; the
    // report contract only needs the distinct set, so canonicalize here to
    // keep the output independent of document iteration order.
    for group in &mut groups {
        group.members.sort();
    }
    groups.sort_by(|a, b| {
        a.path
            .cmp(&b.path)
            .then(a.kind.cmp(&b.kind))
            .then(a.source.cmp(&b.source))
    });

    let mut sections: Vec<ReportSection> = Vec::new();
    for group in groups {
        match sections.iter_mut().find(|s| s.source == group.source) {
            Some(section) => section.groups.push(group),
            None => sections.push(ReportSection {
                source: group.source.clone(),
                groups: vec![group],
            }),
        }
    }
    sections
}
