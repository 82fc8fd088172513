//! Hygiene — production sources in `expr/src` must not contain panicking or
//! error-swallowing constructs. Budgets only ever go down.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it matters)
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on malformed user input"),
    (".expect(", 0, "panics on malformed user input"),
    ("panic!(", 0, "crashes the UI thread"),
    ("unreachable!(", 0, "crashes the UI thread"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards an error unseen"),
    (".ok()", 0, "discards an error unseen"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let name = path.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

#[test]
fn production_sources_stay_within_budget() {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for (pattern, budget, why) in RULES {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let n = content.lines().filter(|l| l.contains(pattern)).count();
                (n > 0).then(|| format!("  {path}: {n}"))
            })
            .collect();
        let count: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|l| l.contains(pattern)).count())
            .sum();
        if count > *budget {
            failures.push(format!("`{pattern}` ({why}): found {count}, max {budget}\n{}", hits.join("\n")));
        }
    }

    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}
