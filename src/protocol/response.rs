//! Response definitions
//!
//! Translates command results into a status plus a JSON body.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{FileOpsError, Result};

use super::Outcome;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    /// Bad input from the caller (invalid or missing file name)
    ClientError,
    /// Anything else (I/O, configuration)
    ServerError,
}

impl Status {
    /// Equivalent HTTP status code
    pub fn http_code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::ClientError => 400,
            Status::ServerError => 500,
        }
    }
}

/// A response to send to the caller
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// JSON body
    pub body: Value,
}

impl Response {
    /// Create an OK response from a command outcome
    pub fn ok(outcome: Outcome) -> Result<Self> {
        let body = match outcome {
            Outcome::Stored(name) => json!({ "stored_file": name }),
            Outcome::Merged(name) => json!({ "merged_file": name }),
            Outcome::Summary(summary) => serde_json::to_value(summary)?,
            Outcome::Files(names) => json!({ "files": names }),
        };

        Ok(Self {
            status: Status::Ok,
            body,
        })
    }

    /// Create an error response, classified by error kind
    pub fn error(err: &FileOpsError) -> Self {
        let status = if err.is_client_error() {
            Status::ClientError
        } else {
            Status::ServerError
        };

        Self {
            status,
            body: json!({ "error": err.to_string() }),
        }
    }

    /// Build a response from a command result
    pub fn from_result(result: Result<Outcome>) -> Self {
        match result.and_then(Self::ok) {
            Ok(response) => response,
            Err(e) => Self::error(&e),
        }
    }

    /// Whether the status is `Ok`
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Render the body as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.body)?)
    }
}
