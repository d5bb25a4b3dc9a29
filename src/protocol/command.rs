//! Command definitions
//!
//! Requests a caller layer can hand to [`crate::FileOps::execute`].

use crate::analyze::ErrorSummary;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Upload,
    Merge,
    MergeUploads,
    CountErrors,
    List,
}

/// An uploaded file: client-supplied name plus raw contents
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub contents: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// A parsed command
#[derive(Debug, Clone)]
pub enum Command {
    /// Store one uploaded file
    Upload(Upload),

    /// Merge two already-stored files by name
    Merge { name1: String, name2: String },

    /// Store two uploads, then merge them under their stored names
    MergeUploads { first: Upload, second: Upload },

    /// Count error lines in a stored log
    CountErrors { log_name: String },

    /// List stored files
    List,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Upload(_) => CommandType::Upload,
            Command::Merge { .. } => CommandType::Merge,
            Command::MergeUploads { .. } => CommandType::MergeUploads,
            Command::CountErrors { .. } => CommandType::CountErrors,
            Command::List => CommandType::List,
        }
    }
}

/// Successful result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Name an upload was stored under
    Stored(String),

    /// Name of the merged output file
    Merged(String),

    /// Error summary of an analyzed log
    Summary(ErrorSummary),

    /// Stored file names
    Files(Vec<String>),
}
