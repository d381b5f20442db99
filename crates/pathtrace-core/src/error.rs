//! Error types and exit codes for pathtrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable or invalid graph file, unknown node)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pathtrace binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph file, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathtrace operations
#[derive(Error, Debug)]
pub enum PathtraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphFileNotFound { path: PathBuf },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    #[error("replay interrupted")]
    Interrupted,
}

impl PathtraceError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathtraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph that fails validation
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        PathtraceError::InvalidGraph {
            reason: reason.into(),
        }
    }

    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        PathtraceError::NodeNotFound { id: id.to_string() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathtraceError::UnknownFormat(_)
            | PathtraceError::UsageError(_)
            | PathtraceError::InvalidValue { .. } => ExitCode::Usage,

            PathtraceError::GraphFileNotFound { .. }
            | PathtraceError::InvalidGraph { .. }
            | PathtraceError::NodeNotFound { .. }
            | PathtraceError::Json(_) => ExitCode::Data,

            PathtraceError::Io(_)
            | PathtraceError::Toml(_)
            | PathtraceError::Other(_)
            | PathtraceError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathtraceError::UnknownFormat(_) => "unknown_format",
            PathtraceError::UsageError(_) => "usage_error",
            PathtraceError::InvalidValue { .. } => "invalid_value",
            PathtraceError::GraphFileNotFound { .. } => "graph_file_not_found",
            PathtraceError::InvalidGraph { .. } => "invalid_graph",
            PathtraceError::NodeNotFound { .. } => "node_not_found",
            PathtraceError::Io(_) => "io_error",
            PathtraceError::Json(_) => "json_error",
            PathtraceError::Toml(_) => "toml_error",
            PathtraceError::Other(_) => "other",
            PathtraceError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for pathtrace operations
pub type Result<T> = std::result::Result<T, PathtraceError>;
