//! Error types and exit codes for netpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//!
//! Graph queries report "no route" as a normal result value, never through
//! this error type.

use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during netpath operations
#[derive(Error, Debug)]
pub enum NetpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl NetpathError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NetpathError::UnknownFormat(_)
            | NetpathError::DuplicateFormat
            | NetpathError::UsageError(_) => ExitCode::Usage,

            NetpathError::Json(_) | NetpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NetpathError::UnknownFormat(_) => "unknown_format",
            NetpathError::DuplicateFormat => "duplicate_format",
            NetpathError::UsageError(_) => "usage_error",
            NetpathError::Json(_) => "json_error",
            NetpathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for netpath operations
pub type Result<T> = std::result::Result<T, NetpathError>;
