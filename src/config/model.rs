use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::scanner::{DEFAULT_MAX_DEPTH, ScanOptions};

/// Contents of `.project-index.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[scan]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Default traversal depth when the command line gives none.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Read and apply the root `.gitignore` (default: true).
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Names added to the built-in deny-set.
    #[serde(default)]
    pub extra_ignores: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            respect_gitignore: true,
            extra_ignores: Vec::new(),
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn to_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.max_depth,
            respect_gitignore: self.respect_gitignore,
            extra_ignores: self.extra_ignores.clone(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
