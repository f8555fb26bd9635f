use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// A direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
    /// True for directories and for symlinks that resolve to one.
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// List the direct children of `dir`: directories first, then
/// case-insensitive name order.
///
/// A directory that cannot be read yields no children. Individual entries
/// whose metadata cannot be read are dropped.
#[must_use]
pub fn list_children(dir: &Path) -> Vec<ChildEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by(|a, b| {
            compare_entries(
                resolves_to_dir(a),
                &a.file_name().to_string_lossy(),
                resolves_to_dir(b),
                &b.file_name().to_string_lossy(),
            )
        })
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(ChildEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: resolves_to_dir(&entry),
                is_symlink: entry.path_is_symlink(),
                path: entry.into_path(),
            }),
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect()
}

/// Directory check that looks through a symlink without walking it.
fn resolves_to_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Sibling order: directories before files, then case-insensitive name, then
/// the exact name so the order is total.
#[must_use]
pub fn compare_entries(a_is_dir: bool, a_name: &str, b_is_dir: bool, b_name: &str) -> Ordering {
    b_is_dir
        .cmp(&a_is_dir)
        .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
        .then_with(|| a_name.cmp(b_name))
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
