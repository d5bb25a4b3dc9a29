//! Tests for protocol responses
//!
//! These tests verify:
//! - JSON bodies for each outcome
//! - Client vs server error classification
//! - HTTP status code mapping

use fileops::analyze::ErrorSummary;
use fileops::protocol::{Command, CommandType, Outcome, Response, Status, Upload};
use fileops::FileOpsError;
use serde_json::json;

// =============================================================================
// Success Bodies
// =============================================================================

#[test]
fn test_merged_body() {
    let response = Response::ok(Outcome::Merged("a_b_merged.txt".into())).unwrap();

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.body, json!({ "merged_file": "a_b_merged.txt" }));
}

#[test]
fn test_stored_and_files_bodies() {
    let stored = Response::ok(Outcome::Stored("a.txt".into())).unwrap();
    let files = Response::ok(Outcome::Files(vec!["a.txt".into(), "b.txt".into()])).unwrap();

    assert_eq!(stored.body, json!({ "stored_file": "a.txt" }));
    assert_eq!(files.body, json!({ "files": ["a.txt", "b.txt"] }));
}

#[test]
fn test_summary_body_has_total_errors() {
    let mut summary = ErrorSummary::new("app.log");
    summary.record(false);
    summary.record(true);

    let response = Response::ok(Outcome::Summary(summary)).unwrap();

    assert_eq!(response.body["total_errors"], json!(1));
    assert_eq!(response.body["total_lines"], json!(2));
    assert_eq!(response.body["first_error_line"], json!(2));
    assert_eq!(response.body["log_name"], json!("app.log"));
}

// =============================================================================
// Error Classification
// =============================================================================

#[test]
fn test_not_found_is_client_error() {
    let response = Response::error(&FileOpsError::FileNotFound("x.txt".into()));

    assert_eq!(response.status, Status::ClientError);
    assert_eq!(response.status.http_code(), 400);
    assert_eq!(response.body, json!({ "error": "File not found: x.txt" }));
}

#[test]
fn test_invalid_name_is_client_error() {
    let response = Response::error(&FileOpsError::InvalidName("..".into()));

    assert_eq!(response.status, Status::ClientError);
}

#[test]
fn test_io_is_server_error() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let response = Response::from_result(Err(FileOpsError::from(io)));

    assert_eq!(response.status, Status::ServerError);
    assert_eq!(response.status.http_code(), 500);
    assert!(!response.is_ok());
}

#[test]
fn test_from_result_ok() {
    let response = Response::from_result(Ok(Outcome::Merged("m.txt".into())));

    assert!(response.is_ok());
    assert_eq!(response.status.http_code(), 200);
    assert!(response.to_json().unwrap().contains("\"merged_file\""));
}

// =============================================================================
// Command Types
// =============================================================================

#[test]
fn test_command_types() {
    let upload = Upload::new("a.txt", b"x".to_vec());

    assert_eq!(Command::Upload(upload.clone()).command_type(), CommandType::Upload);
    assert_eq!(
        Command::Merge { name1: "a".into(), name2: "b".into() }.command_type(),
        CommandType::Merge
    );
    assert_eq!(
        Command::MergeUploads { first: upload.clone(), second: upload }.command_type(),
        CommandType::MergeUploads
    );
    assert_eq!(
        Command::CountErrors { log_name: "l".into() }.command_type(),
        CommandType::CountErrors
    );
    assert_eq!(Command::List.command_type(), CommandType::List);
}
