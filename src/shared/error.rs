use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a detected version drift
/// from a broken invocation or an unreadable workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every dependency is required at a single version
    Success = 0,
    /// At least one dependency is required at more than one version
    MismatchFound = 1,
    /// Invalid command-line arguments, including a missing search path
    InvalidArguments = 2,
    /// Application error (file I/O, parse failure, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MismatchFound => write!(f, "Mismatch Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency consistency checks.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum DepsyncError {
    #[error("Failed to read manifest file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ManifestReadError { path: PathBuf, details: String },

    #[error("Failed to parse manifest file: {path}\nDetails: {details}\n\n💡 Hint: Run `go mod tidy` in that module, or fix the reported line")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to parse workspace file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the go.work file is in the correct format")]
    WorkspaceParseError { path: PathBuf, details: String },

    /// Validation error for builder patterns and user-supplied patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },
}
