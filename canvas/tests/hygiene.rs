//! Hygiene — the plot engine runs inside the terminal UI loop, so production
//! sources in `canvas/src` must not panic or swallow errors. Budgets only go
//! down.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it matters)
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "a bad expression would take the terminal down"),
    (".expect(", 0, "a bad expression would take the terminal down"),
    ("panic!(", 0, "leaves the terminal in raw mode"),
    ("unreachable!(", 0, "leaves the terminal in raw mode"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards a result unseen"),
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
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|(path, content)| (path.clone(), content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[test]
fn production_sources_stay_within_budget() {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for (pattern, budget, why) in RULES {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > *budget {
            let detail: Vec<String> = found.iter().map(|(p, n)| format!("  {p}: {n}")).collect();
            failures.push(format!("`{pattern}` ({why}): found {count}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}
