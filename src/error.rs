//! Custom error types for rsr.
//!
//! Uses thiserror for ergonomic error definitions.
//!
//! Most failures in rsr are reported as diagnostics and degrade gracefully;
//! the variants here cover the few cases that terminate the invocation, the
//! main one being a package.json that exists but is not valid JSON.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for rsr.
///
/// When a script runs, its exit code is forwarded as-is; these constants only
/// cover the tool's own lifecycle.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// package.json exists but could not be parsed.
    pub const BAD_MANIFEST: i32 = 2;
    /// Child terminated by a signal (128 + SIGINT by convention).
    pub const INTERRUPTED: i32 = 130;
}

/// Main error type for rsr.
#[derive(Error, Debug)]
pub enum RsrError {
    /// package.json exists but is not valid JSON.
    #[error("Failed to parse package.json at {path}:\n  {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RsrError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RsrError::ManifestParse { .. } => exit_code::BAD_MANIFEST,
            RsrError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            RsrError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for rsr operations.
pub type Result<T> = std::result::Result<T, RsrError>;
