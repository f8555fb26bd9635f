mod patterns;
mod registry;

pub use patterns::{CONFIG_FILE_PATTERNS, ENTRY_POINT_PATTERNS, KEY_FILE_PATTERNS, NamePatterns};
pub use registry::{
    CATEGORY_TABLE, CODE_CATEGORIES, Category, CategoryRegistry, OTHER_CATEGORY, UNKNOWN_LANGUAGE,
    extension_of,
};

use crate::scanner::ScanStats;

/// Everything the classifier knows about one file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileClass {
    pub category: &'static str,
    pub entry_point: bool,
    pub config_file: bool,
    pub key_file: bool,
}

/// Name-based file classification.
///
/// Every check is a pure function of the file name; recording the outcome is
/// left to the caller.
#[derive(Debug)]
pub struct Classifier {
    registry: CategoryRegistry,
    entry_points: NamePatterns,
    config_files: NamePatterns,
    key_files: NamePatterns,
}

impl Classifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: CategoryRegistry::default(),
            entry_points: NamePatterns::entry_points(),
            config_files: NamePatterns::config_files(),
            key_files: NamePatterns::key_files(),
        }
    }

    #[must_use]
    pub fn categorize(&self, file_name: &str) -> &'static str {
        self.registry.categorize(file_name)
    }

    #[must_use]
    pub fn is_entry_point(&self, name: &str) -> bool {
        self.entry_points.is_match(name)
    }

    #[must_use]
    pub fn is_config_file(&self, name: &str) -> bool {
        self.config_files.is_match(name)
    }

    #[must_use]
    pub fn is_key_file(&self, name: &str) -> bool {
        self.key_files.is_match(name)
    }

    #[must_use]
    pub fn classify(&self, name: &str) -> FileClass {
        FileClass {
            category: self.categorize(name),
            entry_point: self.is_entry_point(name),
            config_file: self.is_config_file(name),
            key_file: self.is_key_file(name),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// The code category with the most files.
///
/// Ties go to the category declared first in [`CODE_CATEGORIES`]; returns
/// [`UNKNOWN_LANGUAGE`] when no code file was counted.
#[must_use]
pub fn infer_main_language(stats: &ScanStats) -> &'static str {
    let mut best = UNKNOWN_LANGUAGE;
    let mut best_count = 0;
    for &category in CODE_CATEGORIES {
        let count = stats.category_count(category);
        if count > best_count {
            best = category;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
