use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - manifest already up to date, or every missing package was added
    Success = 0,
    /// Fatal preflight or application error (uv missing, analyzer install failed, ...)
    PreflightFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// The sync completed but one or more `uv add` invocations failed
    AddFailures = 3,
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
            ExitCode::PreflightFailure => write!(f, "Preflight Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::AddFailures => write!(f, "Add Failures (3)"),
        }
    }
}

/// Application-specific errors for dependency syncing.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DepsyncError {
    #[error("The 'uv' executable was not found on PATH\n\n💡 Hint: Install uv from https://docs.astral.sh/uv/ and make sure it is on your PATH")]
    PackageManagerNotFound,

    #[error("deptry is not available and could not be installed\nDetails: {details}\n\n💡 Hint: Try running 'uv add deptry --group dev' manually inside the project")]
    AnalyzerInstallFailed { details: String },

    #[error("Failed to run the dependency scan\nDetails: {details}\n\n💡 Hint: Check that the project has a pyproject.toml and that 'uv run deptry .' works")]
    ScanFailed { details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },
}
