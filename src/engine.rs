//! Engine Module
//!
//! The facade that ties storage, merging, and analysis together.
//!
//! ## Responsibilities
//! - Open the upload store from a `Config`
//! - Hand out mergers and analyzers bound to that store
//! - Route protocol commands to the right component

use std::path::Path;

use crate::analyze::{ErrorMatcher, ErrorSummary, LogAnalyzer};
use crate::config::Config;
use crate::error::Result;
use crate::merge::Merger;
use crate::protocol::{Command, Outcome, Upload};
use crate::storage::{sanitize, UploadStore};

/// File merge and log analysis over one storage root
///
/// ## Concurrency Model
///
/// Every call runs to completion synchronously and holds no locks. Two
/// concurrent merges of the same pair both write the same output name;
/// whichever rename lands last is what later reads observe.
pub struct FileOps {
    /// Engine configuration
    config: Config,

    /// Store shared by the merger and the analyzer
    store: UploadStore,
}

impl FileOps {
    /// Open with the given config, creating the storage root if missing
    pub fn open(config: Config) -> Result<Self> {
        let store = UploadStore::open(&config.storage_root)?;

        tracing::debug!("Storage root ready at {}", store.root().display());

        Ok(Self { config, store })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified storage root
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().storage_root(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        tracing::trace!("Executing {:?}", command.command_type());

        match command {
            Command::Upload(upload) => self.upload(&upload).map(Outcome::Stored),
            Command::Merge { name1, name2 } => self.merge(&name1, &name2).map(Outcome::Merged),
            Command::MergeUploads { first, second } => {
                self.merge_uploads(&first, &second).map(Outcome::Merged)
            }
            Command::CountErrors { log_name } => {
                self.count_errors(&log_name).map(Outcome::Summary)
            }
            Command::List => self.store.list().map(Outcome::Files),
        }
    }

    /// Store an uploaded file; returns its sanitized name
    pub fn upload(&self, upload: &Upload) -> Result<String> {
        self.store.save(&upload.name, &upload.contents)
    }

    /// Merge two stored files; returns the merged file's name
    pub fn merge(&self, name1: &str, name2: &str) -> Result<String> {
        Merger::new(&self.store).merge(name1, name2)
    }

    /// Store both uploads, then merge them by their stored names
    ///
    /// Both names are validated before either file is written, so an
    /// invalid second name leaves the store untouched.
    pub fn merge_uploads(&self, first: &Upload, second: &Upload) -> Result<String> {
        sanitize(&first.name)?;
        sanitize(&second.name)?;

        let name1 = self.upload(first)?;
        let name2 = self.upload(second)?;
        self.merge(&name1, &name2)
    }

    /// Count error lines in a stored log
    pub fn count_errors(&self, log_name: &str) -> Result<ErrorSummary> {
        LogAnalyzer::new(&self.store, &self.config.matcher).count_errors(log_name)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the upload store
    pub fn store(&self) -> &UploadStore {
        &self.store
    }

    /// Get the active error matcher
    pub fn matcher(&self) -> &ErrorMatcher {
        &self.config.matcher
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
