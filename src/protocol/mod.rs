//! Protocol Module
//!
//! Request/response types for whatever layer fronts the library
//! (the bundled CLI, or a web handler).
//!
//! ### Commands
//! - Upload        - store one file
//! - Merge         - merge two stored files by name
//! - MergeUploads  - store two files, then merge them
//! - CountErrors   - summarize error lines in a stored log
//! - List          - list stored files
//!
//! ### Response Bodies
//! ```text
//! Upload        {"stored_file": "a.txt"}
//! Merge         {"merged_file": "a_b_merged.txt"}
//! CountErrors   {"log_name": "app.log", "total_errors": 3, ...}
//! List          {"files": ["a.txt", "b.txt"]}
//! any failure   {"error": "File not found: missing.txt"}
//! ```
//!
//! ### Status Codes
//! - Ok           (200)
//! - ClientError  (400) - InvalidName, FileNotFound
//! - ServerError  (500) - everything else

mod command;
mod response;

pub use command::{Command, CommandType, Outcome, Upload};
pub use response::{Response, Status};
