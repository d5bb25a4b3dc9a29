//! # fileops
//!
//! File utilities behind an internal dashboard:
//! - Sandboxed upload storage under one root directory
//! - Merging two stored text files into a new one
//! - Counting error lines in a stored log
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Caller (CLI / web handler)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        FileOps                              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Merger    │          │ LogAnalyzer │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └───────────┬────────────┘
//!                      ▼
//!              ┌─────────────┐
//!              │ UploadStore │
//!              │   (root)    │
//!              └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod storage;
pub mod merge;
pub mod analyze;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FileOpsError, Result};
pub use config::Config;
pub use engine::FileOps;
pub use storage::UploadStore;
pub use merge::Merger;
pub use analyze::{ErrorMatcher, ErrorSummary, LogAnalyzer};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fileops
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
