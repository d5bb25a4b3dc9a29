//! Storage Module
//!
//! Flat file storage under a single root directory.
//!
//! ## Responsibilities
//! - Own the storage root and create it on first use
//! - Sanitize every logical name before resolving it
//! - Be the only component that decides whether a named file exists
//! - Write files atomically (temp file + rename)
//!
//! ## Layout
//! ```text
//! {root}/
//!   ├── a.txt                  (uploaded)
//!   ├── b.txt                  (uploaded)
//!   ├── a_b_merged.txt         (merge output)
//!   └── .fileops-tmp-XXXXXX    (in-flight write, renamed on completion)
//! ```

mod name;
mod store;

pub use name::{sanitize, split_extension};
pub use store::UploadStore;
