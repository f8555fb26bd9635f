use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aggregate counters collected during one tree walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_files: usize,
    pub total_dirs: usize,
    /// Files per category, in the order each category was first seen.
    pub by_category: IndexMap<String, usize>,
    pub entry_points: Vec<String>,
    pub config_files: Vec<String>,
    pub key_files: Vec<String>,
}

impl ScanStats {
    pub const fn record_dir(&mut self) {
        self.total_dirs += 1;
    }

    /// Record one file: one category increment plus any flag lists it belongs to.
    pub fn record_file(
        &mut self,
        rel_path: &str,
        category: &str,
        entry_point: bool,
        config_file: bool,
        key_file: bool,
    ) {
        self.total_files += 1;
        *self.by_category.entry(category.to_string()).or_insert(0) += 1;

        if entry_point {
            self.entry_points.push(rel_path.to_string());
        }
        if config_file {
            self.config_files.push(rel_path.to_string());
        }
        if key_file {
            self.key_files.push(rel_path.to_string());
        }
    }

    #[must_use]
    pub fn category_count(&self, category: &str) -> usize {
        self.by_category.get(category).copied().unwrap_or(0)
    }

    /// Categories sorted by descending count; equal counts keep first-seen order.
    #[must_use]
    pub fn categories_by_count(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self
            .by_category
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Output of a tree walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Rendered tree, one entry per line, starting with the root line.
    pub tree: Vec<String>,
    pub stats: ScanStats,
}

impl ScanResult {
    /// The tree as a single newline-joined string.
    #[must_use]
    pub fn tree_text(&self) -> String {
        self.tree.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dir => "dir",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the top-level map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLevelEntry {
    /// Entry name, with a trailing `/` for directories.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub purpose: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
