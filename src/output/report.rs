use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::classifier::infer_main_language;
use crate::scanner::{ProjectScanner, ScanStats, TopLevelEntry};

/// Everything a formatter needs to render one project index.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub generated: DateTime<Local>,
    pub root_path: PathBuf,
    pub max_depth: usize,
    pub respect_gitignore: bool,
    pub stats: ScanStats,
    pub main_language: String,
    pub top_level_map: Vec<TopLevelEntry>,
    pub tree: Vec<String>,
}

impl Report {
    /// Run the tree walk and the top-level summary and combine them.
    #[must_use]
    pub fn build(scanner: &ProjectScanner) -> Self {
        let result = scanner.scan();
        let top_level_map = scanner.top_level_map();
        let main_language = infer_main_language(&result.stats).to_string();

        Self {
            generated: Local::now(),
            root_path: scanner.root().to_path_buf(),
            max_depth: scanner.options().max_depth,
            respect_gitignore: scanner.options().respect_gitignore,
            stats: result.stats,
            main_language,
            top_level_map,
            tree: result.tree,
        }
    }

    /// Replace the timestamp; useful for reproducible output.
    #[must_use]
    pub const fn with_generated(mut self, generated: DateTime<Local>) -> Self {
        self.generated = generated;
        self
    }

    #[must_use]
    pub fn tree_text(&self) -> String {
        self.tree.join("\n")
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
