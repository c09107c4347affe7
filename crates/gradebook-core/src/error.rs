//! Error types and exit codes for gradebook
//!
//! Every failure exits with code 1. The variants exist so that callers and
//! tests can tell the failure modes apart, and so that `--format json` can
//! report a stable `type` identifier.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::validate::ValidationErrors;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Any failure (1)
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during gradebook operations
#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid argument for --{flag}: {value:?}")]
    InvalidArgument { flag: &'static str, value: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("problem parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("directory {:?} does not exist", .path.display().to_string())]
    DirectoryNotFound { path: PathBuf },

    #[error("[{name}] does not contain a valid YYYYMMDD date")]
    MalformedFilename { name: String },

    #[error("{term:?} is not a valid term")]
    MissingTerm { term: String },

    #[error("no student with email {email:?}")]
    UnknownStudent { email: String },

    #[error("unrecognized assignment type {assignment_type:?}")]
    UnknownAssignmentType { assignment_type: String },

    #[error("unrecognized assignment category {category:?}")]
    UnknownCategory { category: String },

    #[error("problem validating class:\n{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{:?} already exists", .path.display().to_string())]
    FileExists { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GradebookError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GradebookError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::Failure
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

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GradebookError::Usage(_) => "usage_error",
            GradebookError::InvalidArgument { .. } => "invalid_argument",
            GradebookError::Io { .. } => "io_error",
            GradebookError::Parse { .. } => "parse_error",
            GradebookError::DirectoryNotFound { .. } => "directory_not_found",
            GradebookError::MalformedFilename { .. } => "malformed_filename",
            GradebookError::MissingTerm { .. } => "missing_term",
            GradebookError::UnknownStudent { .. } => "unknown_student",
            GradebookError::UnknownAssignmentType { .. } => "unknown_assignment_type",
            GradebookError::UnknownCategory { .. } => "unknown_category",
            GradebookError::Validation(_) => "validation_error",
            GradebookError::FileExists { .. } => "file_exists",
            GradebookError::Json(_) => "json_error",
        }
    }
}

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, GradebookError>;
