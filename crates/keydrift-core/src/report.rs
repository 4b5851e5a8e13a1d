//! Report rendering.
//!
//! Thin by design: the section and group ordering is decided by
//! [`aggregate`](crate::aggregate); this module only turns it into text.

use crate::aggregate::ReportSection;
use crate::mismatch::MismatchKind;

/// Printed when a comparison run produced no findings at all.
pub const NO_DRIFT_MESSAGE: &str = "No differences found in keys.";

/// Renders ordered sections as a human-readable report.
///
/// One header per source document; under it, one entry per group with the
/// path and either the offending segment names or the comma-joined list of
/// documents the path is missing from.
pub fn render(sections: &[ReportSection]) -> String {
    if sections.is_empty() {
        return format!("{NO_DRIFT_MESSAGE}\n");
    }
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("{}:\n\n", section.source));
        for group in &section.groups {
            match group.kind {
                MismatchKind::InconsistentNaming => {
                    out.push_str(&format!(
                        "\t{} has inconsistent naming of sub-key:\n",
                        group.path
                    ));
                    for segment in &group.members {
                        out.push_str(&format!("\t\t{segment}\n"));
                    }
                }
                MismatchKind::NotInOtherFile => {
                    out.push_str(&format!("\t{} does not exist in files:\n", group.path));
                    out.push_str(&format!("\t\t{}\n", group.members.join(", ")));
                }
            }
            out.push('\n');
        }
    }
    out
}
