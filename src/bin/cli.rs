//! fileops CLI
//!
//! Command-line front end: uploads files, merges them, and counts log
//! errors, printing the same JSON bodies the dashboard endpoints return.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fileops::protocol::{Command, Response, Status, Upload};
use fileops::{Config, ErrorMatcher, FileOps, FileOpsError};
use tracing_subscriber::{fmt, EnvFilter};

/// fileops CLI
#[derive(Parser, Debug)]
#[command(name = "fileops")]
#[command(about = "Merge uploaded files and count errors in logs")]
#[command(version)]
struct Args {
    /// Storage root directory
    #[arg(short, long, env = "FILEOPS_ROOT", default_value = "./data/uploads")]
    root: PathBuf,

    /// Substring that marks an error line (case-insensitive)
    #[arg(
        short,
        long,
        default_value = fileops::analyze::DEFAULT_MARKER,
        conflicts_with = "regex"
    )]
    marker: String,

    /// Match the marker case-sensitively
    #[arg(long, conflicts_with = "regex")]
    case_sensitive: bool,

    /// Regular expression marking an error line
    #[arg(long)]
    regex: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge two stored files by name
    Merge {
        /// First stored file
        name1: String,

        /// Second stored file
        name2: String,
    },

    /// Store two local files, then merge them
    MergeUploads {
        /// First local file
        path1: PathBuf,

        /// Second local file
        path2: PathBuf,
    },

    /// Count error lines in a stored log
    CountErrors {
        /// Stored log name
        log: String,
    },

    /// Store a local file
    Upload {
        /// Local file to store
        path: PathBuf,
    },

    /// List stored files
    List,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays pure JSON
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fileops=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("fileops v{}", fileops::VERSION);
    tracing::debug!("Storage root: {}", args.root.display());

    let response = Response::from_result(run(args));

    match response.to_json() {
        Ok(body) => println!("{}", body),
        Err(e) => {
            tracing::error!("Failed to render response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match response.status {
        Status::Ok => ExitCode::SUCCESS,
        Status::ClientError => ExitCode::from(2),
        Status::ServerError => ExitCode::FAILURE,
    }
}

fn run(args: Args) -> fileops::Result<fileops::protocol::Outcome> {
    let matcher = match &args.regex {
        Some(pattern) => ErrorMatcher::regex(pattern)?,
        None if args.case_sensitive => ErrorMatcher::case_sensitive(&args.marker)?,
        None => ErrorMatcher::substring(&args.marker)?,
    };

    let config = Config::builder()
        .storage_root(&args.root)
        .matcher(matcher)
        .build();

    let ops = FileOps::open(config)?;

    let command = match args.command {
        Commands::Merge { name1, name2 } => Command::Merge { name1, name2 },
        Commands::MergeUploads { path1, path2 } => Command::MergeUploads {
            first: read_upload(&path1)?,
            second: read_upload(&path2)?,
        },
        Commands::CountErrors { log } => Command::CountErrors { log_name: log },
        Commands::Upload { path } => Command::Upload(read_upload(&path)?),
        Commands::List => Command::List,
    };

    ops.execute(command)
}

/// Load a local file as an upload named after its file name
fn read_upload(path: &Path) -> fileops::Result<Upload> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FileOpsError::InvalidName(path.display().to_string()))?;

    let contents = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpsError::FileNotFound(path.display().to_string()),
        _ => FileOpsError::Io(e),
    })?;

    Ok(Upload::new(name, contents))
}
