//! Configuration for fileops
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::analyze::ErrorMatcher;

/// Main configuration for a fileops instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for every stored file (uploads and merge outputs)
    /// Internal structure is flat:
    ///   {storage_root}/
    ///     ├── a.txt
    ///     ├── b.txt
    ///     └── a_b_merged.txt
    pub storage_root: PathBuf,

    // -------------------------------------------------------------------------
    // Analysis Configuration
    // -------------------------------------------------------------------------
    /// Predicate deciding whether a log line is an error line
    pub matcher: ErrorMatcher,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("./data/uploads"),
            matcher: ErrorMatcher::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage root directory
    pub fn storage_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_root = path.into();
        self
    }

    /// Set the error-line matcher
    pub fn matcher(mut self, matcher: ErrorMatcher) -> Self {
        self.config.matcher = matcher;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
