//! Error line matcher
//!
//! The single predicate deciding whether a log line counts as an error.

use regex::Regex;

use crate::error::{FileOpsError, Result};

/// Marker used when nothing else is configured
pub const DEFAULT_MARKER: &str = "error";

/// Predicate classifying a log line as an error line
///
/// Built only through [`ErrorMatcher::substring`],
/// [`ErrorMatcher::case_sensitive`], [`ErrorMatcher::regex`] or `Default`,
/// so a case-insensitive marker is always stored lowercased.
#[derive(Debug, Clone)]
pub struct ErrorMatcher {
    rule: Rule,
}

#[derive(Debug, Clone)]
enum Rule {
    /// Line contains `marker`; when `case_sensitive` is false, `marker` is
    /// lowercase and lines are lowercased before comparison
    Substring { marker: String, case_sensitive: bool },

    /// Line matches a regular expression anywhere
    Pattern(Regex),
}

impl Default for ErrorMatcher {
    /// Case-insensitive substring `"error"`
    fn default() -> Self {
        Self {
            rule: Rule::Substring {
                marker: DEFAULT_MARKER.to_string(),
                case_sensitive: false,
            },
        }
    }
}

impl ErrorMatcher {
    /// Case-insensitive substring matcher
    pub fn substring(marker: &str) -> Result<Self> {
        Self::check_marker(marker)?;
        Ok(Self {
            rule: Rule::Substring {
                marker: marker.to_lowercase(),
                case_sensitive: false,
            },
        })
    }

    /// Case-sensitive substring matcher
    pub fn case_sensitive(marker: &str) -> Result<Self> {
        Self::check_marker(marker)?;
        Ok(Self {
            rule: Rule::Substring {
                marker: marker.to_string(),
                case_sensitive: true,
            },
        })
    }

    /// Regular-expression matcher
    pub fn regex(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| FileOpsError::Config(format!("Invalid error pattern: {}", e)))?;
        Ok(Self {
            rule: Rule::Pattern(regex),
        })
    }

    /// Does `line` count as an error line
    pub fn is_match(&self, line: &str) -> bool {
        match &self.rule {
            Rule::Substring {
                marker,
                case_sensitive: true,
            } => line.contains(marker.as_str()),
            Rule::Substring {
                marker,
                case_sensitive: false,
            } => line.to_lowercase().contains(marker.as_str()),
            Rule::Pattern(regex) => regex.is_match(line),
        }
    }

    // An empty marker would match every line
    fn check_marker(marker: &str) -> Result<()> {
        if marker.is_empty() {
            return Err(FileOpsError::Config("Error marker must not be empty".to_string()));
        }
        Ok(())
    }
}
