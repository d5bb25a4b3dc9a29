//! Error summary
//!
//! Plain data returned by log analysis. Never persisted.

use serde::{Deserialize, Serialize};

/// Result of scanning one log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSummary {
    /// Sanitized name of the analyzed file
    pub log_name: String,

    /// Number of lines scanned
    pub total_lines: usize,

    /// Number of lines matching the error marker
    pub total_errors: usize,

    /// 1-based line number of the first error line
    pub first_error_line: Option<usize>,

    /// 1-based line numbers of every error line, ascending
    pub error_lines: Vec<usize>,
}

impl ErrorSummary {
    /// Empty summary for `log_name`
    pub fn new(log_name: impl Into<String>) -> Self {
        Self {
            log_name: log_name.into(),
            total_lines: 0,
            total_errors: 0,
            first_error_line: None,
            error_lines: Vec::new(),
        }
    }

    /// Record one scanned line
    pub fn record(&mut self, is_error: bool) {
        self.total_lines += 1;
        if is_error {
            self.total_errors += 1;
            if self.first_error_line.is_none() {
                self.first_error_line = Some(self.total_lines);
            }
            self.error_lines.push(self.total_lines);
        }
    }

    /// True if no error lines were found
    pub fn is_clean(&self) -> bool {
        self.total_errors == 0
    }
}
