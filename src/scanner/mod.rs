mod gitignore;
mod glob;
mod listing;
mod policy;
mod summary;
mod tree;
mod types;

pub use gitignore::{GITIGNORE_NAME, GitignoreRules, IgnorePattern, PatternKind};
pub use glob::SimpleGlob;
pub use listing::{ChildEntry, compare_entries, list_children};
pub use policy::{BASE_IGNORES, IgnorePolicy};
pub use summary::{
    FALLBACK_DIR_PURPOSE, FALLBACK_FILE_PURPOSE, describe_top_level_entry, summarize_top_level,
};
pub use tree::{TreeWalker, root_line};
pub use types::{EntryKind, ScanResult, ScanStats, TopLevelEntry};

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classifier::Classifier;

/// Default traversal depth when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Knobs for a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub max_depth: usize,
    /// Read and apply `<root>/.gitignore`.
    pub respect_gitignore: bool,
    /// Names added to the built-in deny-set.
    pub extra_ignores: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            respect_gitignore: true,
            extra_ignores: Vec::new(),
        }
    }
}

/// Scans one project root.
///
/// The ignore policy is built once in [`ProjectScanner::new`]; every call to
/// [`ProjectScanner::scan`] starts from fresh statistics, so a scanner can be
/// reused.
#[derive(Debug)]
pub struct ProjectScanner {
    root: PathBuf,
    options: ScanOptions,
    policy: IgnorePolicy,
    classifier: Classifier,
    warnings: Vec<String>,
}

impl ProjectScanner {
    /// Resolve `root` and build the ignore policy.
    ///
    /// Never fails: an unreadable `.gitignore` is recorded as a warning and
    /// only the deny-set applies.
    #[must_use]
    pub fn new(root: &Path, options: ScanOptions) -> Self {
        let root = resolve_root(root);
        let mut warnings = Vec::new();
        let mut policy =
            IgnorePolicy::builtin().with_extra_names(options.extra_ignores.iter().cloned());

        if options.respect_gitignore {
            match GitignoreRules::read(&root) {
                Ok(rules) => {
                    for skipped in &rules.skipped {
                        warnings.push(format!(
                            "Skipping .gitignore pattern: {}",
                            skipped.detailed()
                        ));
                    }
                    policy = policy.with_patterns(rules.patterns);
                }
                Err(e) => {
                    debug!(root = %root.display(), error = %e, "gitignore unreadable");
                    warnings.push(format!("Could not read .gitignore: {}", e.detailed()));
                }
            }
        }

        Self {
            root,
            options,
            policy,
            classifier: Classifier::new(),
            warnings,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    #[must_use]
    pub const fn policy(&self) -> &IgnorePolicy {
        &self.policy
    }

    /// Non-fatal problems met while preparing the scan.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Walk the tree and collect statistics.
    #[must_use]
    pub fn scan(&self) -> ScanResult {
        info!(
            root = %self.root.display(),
            max_depth = self.options.max_depth,
            gitignore = self.options.respect_gitignore,
            "scanning"
        );
        let result =
            TreeWalker::new(&self.policy, &self.classifier, self.options.max_depth).walk(&self.root);
        info!(
            files = result.stats.total_files,
            dirs = result.stats.total_dirs,
            "scan finished"
        );
        result
    }

    /// Describe the direct children of the root.
    #[must_use]
    pub fn top_level_map(&self) -> Vec<TopLevelEntry> {
        summarize_top_level(&self.root, &self.policy)
    }
}

/// Absolute form of the root; symlinks are resolved when possible.
fn resolve_root(root: &Path) -> PathBuf {
    dunce::canonicalize(root)
        .or_else(|_| std::path::absolute(root))
        .unwrap_or_else(|_| root.to_path_buf())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
