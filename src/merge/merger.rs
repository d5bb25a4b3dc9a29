//! Merger
//!
//! Concatenates two stored files into a new stored file.

use crate::error::Result;
use crate::storage::UploadStore;

use super::naming::merged_name;

/// Combines two stored files into one
///
/// Borrows the store it reads from and writes into; holds no other state.
pub struct Merger<'a> {
    store: &'a UploadStore,
}

impl<'a> Merger<'a> {
    /// Create a merger over `store`
    pub fn new(store: &'a UploadStore) -> Self {
        Self { store }
    }

    /// Merge `name1` then `name2` into a new stored file
    ///
    /// Steps:
    /// 1. Sanitize both names and derive the output name
    /// 2. Read `name1`, then `name2` (first missing one is reported)
    /// 3. Concatenate (see [`merge_contents`])
    /// 4. Write the output atomically and return its name
    pub fn merge(&self, name1: &str, name2: &str) -> Result<String> {
        let output = merged_name(name1, name2)?;

        let first = self.store.read(name1)?;
        let second = self.store.read(name2)?;

        let merged = merge_contents(&first, &second);
        let written = self.store.write_atomic(&output, &merged)?;

        tracing::info!(
            "Merged {:?} ({} bytes) + {:?} ({} bytes) into {}",
            name1,
            first.len(),
            name2,
            second.len(),
            written
        );

        Ok(written)
    }
}

/// Concatenate `first` and `second`
///
/// If `first` is non-empty and its last line is unterminated, a `\n` is
/// inserted so `second` starts on its own line. `second` is copied verbatim.
pub fn merge_contents(first: &[u8], second: &[u8]) -> Vec<u8> {
    let needs_newline = first.last().is_some_and(|&b| b != b'\n');

    let mut merged = Vec::with_capacity(first.len() + second.len() + 1);
    merged.extend_from_slice(first);
    if needs_newline {
        merged.push(b'\n');
    }
    merged.extend_from_slice(second);
    merged
}
