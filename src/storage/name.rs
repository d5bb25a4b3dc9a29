//! Logical name sanitization
//!
//! Turns a caller-supplied name into a single path segment that is safe to
//! join onto the storage root. Purely lexical: never touches the filesystem.

use crate::error::{FileOpsError, Result};

/// Separators treated as directory boundaries regardless of host platform
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Sanitize a logical name into a bare file name
///
/// Rules:
/// - empty or whitespace-only names are rejected
/// - names containing NUL or `:` are rejected
/// - any `..` segment is rejected (traversal is refused, not stripped)
/// - remaining directory components are stripped: `sub/a.txt` → `a.txt`
/// - a final segment that is empty or `.` is rejected
pub fn sanitize(name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(invalid(name));
    }

    if name.contains('\0') || name.contains(':') {
        return Err(invalid(name));
    }

    if name.split(&SEPARATORS[..]).any(|segment| segment.trim() == "..") {
        tracing::warn!("Rejected traversal attempt in name {:?}", name);
        return Err(invalid(name));
    }

    let last = name.rsplit(&SEPARATORS[..]).next().unwrap_or_default().trim();
    if last.is_empty() || last == "." {
        return Err(invalid(name));
    }

    Ok(last.to_string())
}

/// Split a bare file name into (stem, extension-with-dot)
///
/// A leading dot does not start an extension: `.env` → (".env", "").
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

fn invalid(name: &str) -> FileOpsError {
    FileOpsError::InvalidName(name.to_string())
}
