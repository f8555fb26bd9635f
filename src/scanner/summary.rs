use std::path::Path;

use super::listing::list_children;
use super::policy::IgnorePolicy;
use super::types::{EntryKind, TopLevelEntry};

pub const FALLBACK_DIR_PURPOSE: &str = "Project-specific directory (see tree)";
pub const FALLBACK_FILE_PURPOSE: &str = "Key file (see tree for context)";

/// Purposes for well-known top-level files, keyed by lowercase name.
const FILE_PURPOSES: &[(&[&str], &str)] = &[
    (&["readme.md"], "Project overview and getting started"),
    (&["agents.md"], "Agent working conventions / repo rules"),
    (
        &[
            "changelog.md",
            "handoff.md",
            "contributing.md",
            "license",
            "license.md",
        ],
        "Project process / legal / handoff documentation",
    ),
    (
        &[
            "package.json",
            "pnpm-lock.yaml",
            "yarn.lock",
            "package-lock.json",
        ],
        "JavaScript/TypeScript dependencies and scripts",
    ),
    (
        &[
            "pyproject.toml",
            "requirements.txt",
            "poetry.lock",
            "pipfile",
            "pipfile.lock",
        ],
        "Python dependencies and tooling",
    ),
    (&["cargo.toml", "cargo.lock"], "Rust crate manifest and dependencies"),
    (&["go.mod", "go.sum"], "Go module definition and dependencies"),
    (&[".gitignore", ".gitattributes"], "Git configuration"),
];

/// Purposes for well-known top-level directories, keyed by lowercase name.
const DIR_PURPOSES: &[(&[&str], &str)] = &[
    (&["src"], "Main application source code"),
    (&["app", "apps"], "Application(s) (often runnable targets)"),
    (&["packages", "pkg"], "Packages (shared modules/libraries)"),
    (&["libs", "lib"], "Shared libraries/utilities"),
    (&["services", "service"], "Backend services / service layer"),
    (&["api", "apis"], "API layer (routes/controllers/handlers)"),
    (&["tests", "test", "__tests__"], "Tests"),
    (&["docs", "documentation"], "Documentation"),
    (&["scripts", "tools"], "Automation scripts / tooling"),
    (&["public", "static", "assets"], "Static assets"),
    (&[".github"], "GitHub configuration (CI, templates, workflows)"),
    (&[".claude"], "AI tooling / agent workflows (project-local)"),
    (&[".codex"], "Codex CLI skills / configuration (project-local)"),
    (
        &["infra", "infrastructure", "deploy", "ops", "k8s", "terraform"],
        "Infrastructure / deployment",
    ),
];

/// One-line purpose for a top-level entry. Same name and kind always give
/// the same text.
#[must_use]
pub fn describe_top_level_entry(name: &str, is_dir: bool) -> &'static str {
    let lower = name.to_lowercase();
    let (table, fallback) = if is_dir {
        (DIR_PURPOSES, FALLBACK_DIR_PURPOSE)
    } else {
        (FILE_PURPOSES, FALLBACK_FILE_PURPOSE)
    };

    table
        .iter()
        .find(|(names, _)| names.contains(&lower.as_str()))
        .map_or(fallback, |&(_, purpose)| purpose)
}

/// Describe every non-ignored direct child of `root`, directories first.
///
/// Lists the root on its own rather than reusing the tree walk.
#[must_use]
pub fn summarize_top_level(root: &Path, policy: &IgnorePolicy) -> Vec<TopLevelEntry> {
    list_children(root)
        .into_iter()
        .filter(|child| !policy.should_ignore(&child.name, &child.name))
        .map(|child| {
            let (path, kind) = if child.is_dir {
                (format!("{}/", child.name), EntryKind::Dir)
            } else {
                (child.name.clone(), EntryKind::File)
            };
            TopLevelEntry {
                path,
                kind,
                purpose: describe_top_level_entry(&child.name, child.is_dir).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
