//! Analyze Module
//!
//! Line-oriented error counting for stored log files.
//!
//! ## Responsibilities
//! - Read a stored log as text (invalid UTF-8 replaced, not rejected)
//! - Classify each line with one configurable [`ErrorMatcher`]
//! - Return an [`ErrorSummary`] (total count plus line positions)
//!
//! Default marker: case-insensitive substring `"error"`.

mod analyzer;
mod matcher;
mod summary;

pub use analyzer::{scan, LogAnalyzer};
pub use matcher::{ErrorMatcher, DEFAULT_MARKER};
pub use summary::ErrorSummary;
