use std::iter::Peekable;
use std::path::Path;
use std::vec::IntoIter;

use tracing::debug;

use super::listing::{ChildEntry, list_children};
use super::policy::IgnorePolicy;
use super::types::{ScanResult, ScanStats};
use crate::classifier::Classifier;
use crate::path_utils::join_relative;

const BRANCH: &str = "|-- ";
const CORNER: &str = "`-- ";
const PIPE: &str = "|   ";
const BLANK: &str = "    ";

/// A retained child together with its root-relative path.
struct Visible {
    entry: ChildEntry,
    rel_path: String,
}

/// One directory whose children are still being emitted.
struct Frame {
    children: Peekable<IntoIter<Visible>>,
    /// Continuation markers of every ancestor, prepended to each child line.
    prefix: String,
    /// Depth of the listed directory; the root is 0.
    depth: usize,
}

/// Depth-first, depth-bounded walk that renders the tree and collects stats.
///
/// Uses an explicit stack of frames instead of native recursion.
pub struct TreeWalker<'a> {
    policy: &'a IgnorePolicy,
    classifier: &'a Classifier,
    max_depth: usize,
}

impl<'a> TreeWalker<'a> {
    #[must_use]
    pub const fn new(policy: &'a IgnorePolicy, classifier: &'a Classifier, max_depth: usize) -> Self {
        Self {
            policy,
            classifier,
            max_depth,
        }
    }

    /// Walk `root` and return the rendered tree plus statistics.
    ///
    /// The root line is always present. Directories that cannot be listed
    /// contribute no lines and no statistics. A symlink to a directory is
    /// drawn and counted as a directory but not descended into.
    #[must_use]
    pub fn walk(&self, root: &Path) -> ScanResult {
        let mut tree = vec![root_line(root)];
        let mut stats = ScanStats::default();
        let mut stack = vec![self.frame(root, "", String::new(), 0)];

        while let Some(frame) = stack.last_mut() {
            let Some(child) = frame.children.next() else {
                stack.pop();
                continue;
            };
            let is_last = frame.children.peek().is_none();
            let (connector, continuation) = if is_last {
                (CORNER, BLANK)
            } else {
                (BRANCH, PIPE)
            };
            let line_prefix = format!("{}{connector}", frame.prefix);
            let depth = frame.depth;

            if child.entry.is_dir {
                stats.record_dir();
                tree.push(format!("{line_prefix}{}/", child.entry.name));
                // symlinked directories are shown but never entered
                if depth < self.max_depth && !child.entry.is_symlink {
                    let prefix = format!("{}{continuation}", frame.prefix);
                    let next = self.frame(&child.entry.path, &child.rel_path, prefix, depth + 1);
                    stack.push(next);
                }
            } else {
                let class = self.classifier.classify(&child.entry.name);
                stats.record_file(
                    &child.rel_path,
                    class.category,
                    class.entry_point,
                    class.config_file,
                    class.key_file,
                );
                tree.push(format!("{line_prefix}{}", child.entry.name));
            }
        }

        ScanResult { tree, stats }
    }

    fn frame(&self, dir: &Path, rel_dir: &str, prefix: String, depth: usize) -> Frame {
        let visible: Vec<_> = list_children(dir)
            .into_iter()
            .filter_map(|entry| {
                let rel_path = join_relative(rel_dir, &entry.name);
                if self.policy.should_ignore(&entry.name, &rel_path) {
                    debug!(path = %rel_path, "ignored");
                    None
                } else {
                    Some(Visible { entry, rel_path })
                }
            })
            .collect();

        Frame {
            children: visible.into_iter().peekable(),
            prefix,
            depth,
        }
    }
}

/// First tree line: the root's own name followed by `/`.
#[must_use]
pub fn root_line(root: &Path) -> String {
    root.file_name().map_or_else(
        || {
            let shown = root.display().to_string();
            if shown.ends_with('/') || shown.ends_with('\\') {
                shown
            } else {
                format!("{shown}/")
            }
        },
        |name| format!("{}/", name.to_string_lossy()),
    )
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
