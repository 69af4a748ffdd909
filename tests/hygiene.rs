//! Hygiene: enforces coding standards for `src/` at test time.
//!
//! Each antipattern has a budget (ideally zero). Test files (`*_test.rs`)
//! are exempt. The budget never grows: fix an existing hit before adding one.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    // Panics crash the WASM module and take the whole page down.
    Rule { pattern: ".unwrap()", budget: 0, why: "panics on None/Err" },
    Rule { pattern: ".expect(", budget: 0, why: "panics on None/Err" },
    Rule { pattern: "panic!(", budget: 0, why: "explicit panic" },
    Rule { pattern: "unreachable!(", budget: 0, why: "explicit panic" },
    Rule { pattern: "todo!(", budget: 0, why: "unfinished stub" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "unfinished stub" },
    // Silent loss: errors discarded without inspection.
    Rule { pattern: "let _ =", budget: 0, why: "discards a result" },
    Rule { pattern: ".ok()", budget: 0, why: "discards an error" },
    // Style / structure.
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "hides unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files under `src/`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "src/lib.rs not found");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` ({}) budget exceeded: found {count}, max {}\n{detail}",
                rule.pattern, rule.why, rule.budget
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn components_do_not_hardcode_explorer_host() {
    let files = source_files();
    let found: Vec<_> = hits(&files, "etherscan.io")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("explorer.rs"))
        .collect();
    assert!(
        found.is_empty(),
        "explorer host must come from util::explorer, found in: {found:?}"
    );
}
