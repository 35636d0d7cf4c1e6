//! Error types and exit codes for digraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unsupported operation)
//! - 3: Data error (blank labels, undeclared vertices in a graph file)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph contents (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("{operation} is not implemented")]
    NotImplemented { operation: String },

    // Data errors (exit code 3)
    #[error("invalid {context}: {reason}")]
    InvalidArgument { context: String, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("{container} is empty")]
    EmptyContainer { container: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize graph: {0}")]
    TomlSer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for a blank or otherwise unusable argument
    pub fn invalid_argument(context: &str, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidArgument {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for removing or peeking from an empty container
    pub fn empty_container(container: &'static str) -> Self {
        GraphError::EmptyContainer { container }
    }

    /// Create an error for a deliberately unsupported operation
    pub fn not_implemented(operation: &str) -> Self {
        GraphError::NotImplemented {
            operation: operation.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::NotImplemented { .. } => ExitCode::Usage,

            GraphError::InvalidArgument { .. } | GraphError::NotFound { .. } => ExitCode::Data,

            GraphError::EmptyContainer { .. }
            | GraphError::Io(_)
            | GraphError::TomlDe(_)
            | GraphError::TomlSer(_)
            | GraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::NotImplemented { .. } => "not_implemented",
            GraphError::InvalidArgument { .. } => "invalid_argument",
            GraphError::NotFound { .. } => "not_found",
            GraphError::EmptyContainer { .. } => "empty_container",
            GraphError::Io(_) => "io_error",
            GraphError::TomlDe(_) | GraphError::TomlSer(_) => "toml_error",
            GraphError::Json(_) => "json_error",
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

/// Result type alias for digraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
