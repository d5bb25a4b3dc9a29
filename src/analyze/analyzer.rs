//! Log Analyzer
//!
//! Counts error lines in a stored log file.

use crate::error::Result;
use crate::storage::{sanitize, UploadStore};

use super::{ErrorMatcher, ErrorSummary};

/// Read-only error counter over stored logs
pub struct LogAnalyzer<'a> {
    store: &'a UploadStore,
    matcher: &'a ErrorMatcher,
}

impl<'a> LogAnalyzer<'a> {
    /// Create an analyzer reading from `store` and classifying with `matcher`
    pub fn new(store: &'a UploadStore, matcher: &'a ErrorMatcher) -> Self {
        Self { store, matcher }
    }

    /// Count error lines in `log_name`
    ///
    /// Fails with `InvalidName` or `FileNotFound`; otherwise returns a
    /// summary. Does not modify the store.
    pub fn count_errors(&self, log_name: &str) -> Result<ErrorSummary> {
        let stored = sanitize(log_name)?;
        let text = self.store.read_to_string(log_name)?;

        let summary = scan(&stored, &text, self.matcher);

        tracing::info!(
            "Analyzed {}: {} error lines out of {}",
            stored,
            summary.total_errors,
            summary.total_lines
        );

        Ok(summary)
    }
}

/// Classify every line of `text`
///
/// Lines split on `\n` with an optional trailing `\r` dropped; an
/// unterminated final line still counts, and empty text has no lines.
pub fn scan(log_name: &str, text: &str, matcher: &ErrorMatcher) -> ErrorSummary {
    let mut summary = ErrorSummary::new(log_name);
    for line in text.lines() {
        summary.record(matcher.is_match(line));
    }
    summary
}
