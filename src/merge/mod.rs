//! Merge Module
//!
//! Combines two stored files into a third.
//!
//! ## Policy
//! - Pure concatenation in argument order, no deduplication
//! - The first file's last line is terminated before the second begins
//! - Output name is derived from both inputs and is stable per pair
//!
//! ```text
//! a.txt ──┐
//!         ├──► a_b_merged.txt  (a's lines, then b's lines)
//! b.txt ──┘
//! ```

mod merger;
mod naming;

pub use merger::{merge_contents, Merger};
pub use naming::merged_name;
