//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that crash the page or
//! swallow errors, and checks that browser bindings stay inside the
//! `browser` module. Budgets only go down.

use std::fs;
use std::path::Path;

/// File allowed to touch web-sys / wasm-bindgen directly.
const BROWSER_MODULE: &str = "browser.rs";

struct SourceFile {
    path: String,
    content: String,
}

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

fn hits<'a>(files: impl IntoIterator<Item = &'a SourceFile>, pattern: &str) -> Vec<(String, usize)> {
    files
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize, found: &[(String, usize)]) {
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let detail = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{detail}");
}

#[test]
fn source_tree_is_not_empty() {
    assert!(!source_files().is_empty(), "no sources found under src/");
}

#[test]
fn panic_budgets() {
    let files = source_files();
    for (pattern, max) in [
        (".unwrap()", 0),
        (".expect(", 0),
        ("panic!(", 0),
        ("unreachable!(", 0),
        ("todo!(", 0),
        ("unimplemented!(", 0),
    ] {
        assert_budget(pattern, max, &hits(&files, pattern));
    }
}

#[test]
fn silent_discard_budgets() {
    let files = source_files();
    for (pattern, max) in [("let _ =", 0), (".ok()", 0), ("#[allow(dead_code)]", 0)] {
        assert_budget(pattern, max, &hits(&files, pattern));
    }
}

#[test]
fn browser_bindings_stay_in_browser_module() {
    let files = source_files();
    let outside: Vec<&SourceFile> = files.iter().filter(|f| !f.path.ends_with(BROWSER_MODULE)).collect();
    for pattern in ["web_sys::", "wasm_bindgen", "gloo_net::", ".forget()"] {
        assert_budget(pattern, 0, &hits(outside.iter().copied(), pattern));
    }
}
