use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ProjectIndexError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

/// Name of the configuration file discovered in the scan root.
pub const LOCAL_CONFIG_NAME: &str = ".project-index.toml";

/// Result of loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// File the configuration came from; `None` when defaults were used.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `.project-index.toml` from `root`, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self, root: &Path) -> Result<LoadResult>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn read(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ProjectIndexError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, root: &Path) -> Result<LoadResult> {
        let path = root.join(LOCAL_CONFIG_NAME);
        if !self.fs.is_file(&path) {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(LoadResult::defaults());
        }
        self.read(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        if !self.fs.is_file(path) {
            return Err(ProjectIndexError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        self.read(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
