use std::collections::HashSet;

use super::gitignore::IgnorePattern;

/// Well-known noise: VCS and OS metadata, dependency and build output,
/// virtualenvs, tool caches, IDE folders, and local secret files.
pub const BASE_IGNORES: &[&str] = &[
    // VCS / OS
    ".git",
    ".DS_Store",
    "Thumbs.db",
    // Dependencies / build outputs
    "node_modules",
    "dist",
    "build",
    "out",
    "coverage",
    ".next",
    ".nuxt",
    ".turbo",
    // Python virtualenv / caches
    "venv",
    ".venv",
    "env",
    ".tox",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    // Tooling caches / IDE
    ".cache",
    ".idea",
    ".vscode",
    // .NET / Rust outputs
    "bin",
    "obj",
    "target",
    // Secrets
    ".env",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
];

/// Decides which entries are left out of the scan.
///
/// Built once per scan and only read afterwards.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    deny: HashSet<String>,
    patterns: Vec<IgnorePattern>,
}

impl IgnorePolicy {
    /// Policy with only the built-in deny-set.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            deny: BASE_IGNORES.iter().map(|s| (*s).to_string()).collect(),
            patterns: Vec::new(),
        }
    }

    /// Add names to the deny-set.
    #[must_use]
    pub fn with_extra_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append `.gitignore` patterns, evaluated in the given order.
    #[must_use]
    pub fn with_patterns(mut self, patterns: Vec<IgnorePattern>) -> Self {
        self.patterns.extend(patterns);
        self
    }

    #[must_use]
    pub fn is_denied_name(&self, name: &str) -> bool {
        self.deny.contains(name)
    }

    /// Whether an entry is excluded, given its bare name and its
    /// `/`-separated path relative to the scan root.
    #[must_use]
    pub fn should_ignore(&self, name: &str, relative_path: &str) -> bool {
        if self.is_denied_name(name) || self.is_denied_name(relative_path) {
            return true;
        }

        if relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .any(|segment| self.is_denied_name(segment))
        {
            return true;
        }

        self.patterns
            .iter()
            .filter(|p| !p.negated)
            .any(|p| p.matches(name, relative_path))
    }
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
