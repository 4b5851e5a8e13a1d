//! The comparison entry point: load files, run the core, print the report.

use keydrift_core::{Document, ReportSection, aggregate, compare_all, render};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::process;

const CHECK_KIND: &str = "keydrift.compare.v1";

pub fn run(files: Vec<String>, json_output: bool) {
    let mut trees: Vec<Value> = Vec::with_capacity(files.len());
    for file in &files {
        match load_document(Path::new(file)) {
            Ok(tree) => trees.push(tree),
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(2);
            }
        }
    }

    let documents: Vec<Document<'_, Value>> = files
        .iter()
        .zip(&trees)
        .map(|(name, root)| Document::new(name, root))
        .collect();

    let mismatches = match compare_all(&documents) {
        Ok(mismatches) => mismatches,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    let sections = aggregate(mismatches);
    let accepted = sections.is_empty();

    if json_output {
        print_json(&files, &sections, accepted);
    } else {
        print!("{}", render(&sections));
    }

    if !accepted {
        process::exit(1);
    }
}

fn print_json(files: &[String], sections: &[ReportSection], accepted: bool) {
    let group_count: usize = sections.iter().map(|s| s.groups.len()).sum();
    let payload = json!({
        "schema": 1,
        "checkKind": CHECK_KIND,
        "result": if accepted { "accepted" } else { "rejected" },
        "documents": files,
        "groupCount": group_count,
        "sections": sections,
    });
    let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render compare payload: {err}");
        process::exit(2);
    });
    println!("{rendered}");
}

fn load_document(path: &Path) -> Result<Value, String> {
    let payload = fs::read_to_string(path)
        .map_err(|err| format!("failed reading {}: {err}", path.display()))?;
    serde_json::from_str(&payload)
        .map_err(|err| format!("failed parsing {}: {err}", path.display()))
}
