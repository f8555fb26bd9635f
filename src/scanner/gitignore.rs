use std::path::Path;

use super::glob::SimpleGlob;
use crate::error::{ProjectIndexError, Result};

pub const GITIGNORE_NAME: &str = ".gitignore";

/// How a `.gitignore` line is compared against an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// Trailing `/`: the stripped path itself and everything below it.
    Directory(String),
    /// Contains `/`: glob against the whole root-relative path.
    Path,
    /// Neither: glob against the bare entry name.
    Name,
}

#[derive(Debug, Clone)]
pub struct IgnorePattern {
    /// Pattern text after `!` and leading `/` were removed.
    pub pattern: String,
    pub kind: PatternKind,
    /// Set for `!` lines. Negation is recorded but never re-includes anything.
    pub negated: bool,
    glob: Option<SimpleGlob>,
}

impl IgnorePattern {
    /// Parse one `.gitignore` line.
    ///
    /// Returns `Ok(None)` for blank lines, comments, and lines that are empty
    /// once `!` and the leading `/` are removed.
    ///
    /// # Errors
    /// Returns an error if the glob cannot be compiled.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (negated, rest) = line
            .strip_prefix('!')
            .map_or((false, line), |rest| (true, rest));
        let pattern = rest.strip_prefix('/').unwrap_or(rest);
        if pattern.is_empty() {
            return Ok(None);
        }

        if let Some(dir) = pattern.strip_suffix('/') {
            return Ok(Some(Self {
                pattern: pattern.to_string(),
                kind: PatternKind::Directory(dir.to_string()),
                negated,
                glob: None,
            }));
        }

        let kind = if pattern.contains('/') {
            PatternKind::Path
        } else {
            PatternKind::Name
        };
        Ok(Some(Self {
            pattern: pattern.to_string(),
            kind,
            negated,
            glob: Some(SimpleGlob::new(pattern)?),
        }))
    }

    /// Whether this pattern matches an entry. Ignores the `negated` flag.
    #[must_use]
    pub fn matches(&self, name: &str, relative_path: &str) -> bool {
        match (&self.kind, &self.glob) {
            (PatternKind::Directory(dir), _) => {
                relative_path == dir
                    || relative_path
                        .strip_prefix(dir.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            (PatternKind::Path, Some(glob)) => glob.is_match(relative_path),
            (PatternKind::Name, Some(glob)) => glob.is_match(name),
            _ => false,
        }
    }
}

/// Patterns parsed from one `.gitignore`, plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct GitignoreRules {
    pub patterns: Vec<IgnorePattern>,
    pub skipped: Vec<ProjectIndexError>,
}

impl GitignoreRules {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut rules = Self::default();
        for line in content.lines() {
            match IgnorePattern::parse(line) {
                Ok(Some(pattern)) => rules.patterns.push(pattern),
                Ok(None) => {}
                Err(e) => rules.skipped.push(e),
            }
        }
        rules
    }

    /// Read `<root>/.gitignore`. A missing file yields no patterns.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read as UTF-8 text.
    pub fn read(root: &Path) -> Result<Self> {
        let path = root.join(GITIGNORE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ProjectIndexError::FileRead { path, source })?;
        Ok(Self::parse(&content))
    }
}

#[cfg(test)]
#[path = "gitignore_tests.rs"]
mod tests;
