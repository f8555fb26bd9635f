use std::fs;

use super::*;
use crate::scanner::gitignore::GitignoreRules;
use tempfile::TempDir;

#[test]
fn describes_known_files() {
    assert_eq!(
        describe_top_level_entry("README.md", false),
        "Project overview and getting started"
    );
    assert_eq!(
        describe_top_level_entry("package.json", false),
        "JavaScript/TypeScript dependencies and scripts"
    );
    assert_eq!(
        describe_top_level_entry("Pipfile", false),
        "Python dependencies and tooling"
    );
    assert_eq!(
        describe_top_level_entry("LICENSE", false),
        "Project process / legal / handoff documentation"
    );
    assert_eq!(describe_top_level_entry(".gitignore", false), "Git configuration");
    assert_eq!(
        describe_top_level_entry("Cargo.toml", false),
        "Rust crate manifest and dependencies"
    );
}

#[test]
fn describes_known_directories() {
    assert_eq!(
        describe_top_level_entry("src", true),
        "Main application source code"
    );
    assert_eq!(
        describe_top_level_entry(".github", true),
        "GitHub configuration (CI, templates, workflows)"
    );
    assert_eq!(describe_top_level_entry("__tests__", true), "Tests");
    assert_eq!(
        describe_top_level_entry("K8s", true),
        "Infrastructure / deployment"
    );
}

#[test]
fn kind_selects_the_table() {
    // A directory named like a known file falls back, and vice versa.
    assert_eq!(describe_top_level_entry("readme.md", true), FALLBACK_DIR_PURPOSE);
    assert_eq!(describe_top_level_entry("src", false), FALLBACK_FILE_PURPOSE);
}

#[test]
fn unknown_names_use_fallbacks() {
    assert_eq!(describe_top_level_entry("widgets", true), FALLBACK_DIR_PURPOSE);
    assert_eq!(describe_top_level_entry("notes.txt", false), FALLBACK_FILE_PURPOSE);
}

#[test]
fn description_is_deterministic() {
    assert_eq!(
        describe_top_level_entry("docs", true),
        describe_top_level_entry("DOCS", true)
    );
}

#[test]
fn summarize_orders_and_filters_entries() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::create_dir(temp_dir.path().join("node_modules")).unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(temp_dir.path().join("README.md"), "").unwrap();
    fs::write(temp_dir.path().join("package.json"), "{}").unwrap();

    let entries = summarize_top_level(temp_dir.path(), &IgnorePolicy::builtin());
    let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["src/", "package.json", "README.md"]);
    assert_eq!(entries[0].kind, EntryKind::Dir);
    assert_eq!(entries[1].kind, EntryKind::File);
}

#[test]
fn summarize_applies_gitignore_patterns() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.log"), "").unwrap();
    fs::write(temp_dir.path().join("app.ts"), "").unwrap();

    let policy =
        IgnorePolicy::builtin().with_patterns(GitignoreRules::parse("*.log\n").patterns);
    let entries = summarize_top_level(temp_dir.path(), &policy);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "app.ts");
}

#[test]
fn summarize_empty_root() {
    let temp_dir = TempDir::new().unwrap();
    assert!(summarize_top_level(temp_dir.path(), &IgnorePolicy::builtin()).is_empty());
}

#[cfg(unix)]
#[test]
fn summarize_describes_symlinked_directory_as_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    std::os::unix::fs::symlink(temp_dir.path().join("src"), temp_dir.path().join("docs"))
        .unwrap();

    let entries = summarize_top_level(temp_dir.path(), &IgnorePolicy::builtin());
    let docs = entries.iter().find(|e| e.path == "docs/").unwrap();
    assert_eq!(docs.kind, EntryKind::Dir);
    assert_eq!(docs.purpose, describe_top_level_entry("docs", true));
}
