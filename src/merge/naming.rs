//! Merge output naming
//!
//! Output names are deterministic: the same input pair always maps to the
//! same output, so repeated merges overwrite rather than accumulate.

use crate::error::Result;
use crate::storage::{sanitize, split_extension};

/// Marker appended to the joined stems
const MERGED_SUFFIX: &str = "_merged";

/// Extension used when the first input has none
const DEFAULT_EXTENSION: &str = ".txt";

/// Derive the output name for merging `name1` with `name2`
///
/// `{stem1}_{stem2}_merged{ext}` with `ext` taken from `name1`
/// (`.txt` if it has none). The result is longer than `name1`, and its stem
/// strictly contains `name2`'s stem, so it never equals either input.
///
/// The mapping is not injective. Stems may contain `_`, and `name2`'s
/// extension is dropped, so `a_b.txt` + `c.txt` and `a.txt` + `b_c.txt` both
/// give `a_b_c_merged.txt`, as do `a.txt` + `b.txt` and `a.txt` + `b.log`
/// (`a_b_merged.txt`). A later merge of a colliding pair replaces the
/// earlier output.
///
/// `a.txt` + `b.log` → `a_b_merged.txt`
pub fn merged_name(name1: &str, name2: &str) -> Result<String> {
    let first = sanitize(name1)?;
    let second = sanitize(name2)?;

    let (stem1, ext1) = split_extension(&first);
    let (stem2, _) = split_extension(&second);
    let ext = if ext1.is_empty() { DEFAULT_EXTENSION } else { ext1 };

    Ok(format!("{stem1}_{stem2}{MERGED_SUFFIX}{ext}"))
}
