//! Error types and exit codes for edgegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unreadable options)
//! - 3: Graph data error (unknown or duplicate nodes, empty edge lists)

mod macros;

use thiserror::Error;

/// Exit codes used by the edgegraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error (3)
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
    // Graph data errors (exit code 3)
    #[error("node already exists in this graph: {name}")]
    DuplicateNode { name: String },

    #[error("node not found in this graph: {name}")]
    UnknownNode { name: String },

    #[error("node name cannot be an empty string")]
    EmptyNodeName,

    #[error("no edges provided for connection {from} -> {to}")]
    NoEdgesProvided { from: String, to: String },

    #[error("{target} cannot be converted to {hint}")]
    InvalidNumericConversion {
        target: &'static str,
        hint: &'static str,
    },

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for a node name that is already taken
    pub fn duplicate_node(name: impl Into<String>) -> Self {
        GraphError::DuplicateNode { name: name.into() }
    }

    /// Create an error for a node name that is not in the graph
    pub fn unknown_node(name: impl Into<String>) -> Self {
        GraphError::UnknownNode { name: name.into() }
    }

    /// Create an error for a connection descriptor without edges
    pub fn no_edges(from: impl Into<String>, to: impl Into<String>) -> Self {
        GraphError::NoEdgesProvided {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for a disallowed primitive coercion
    pub fn invalid_conversion(target: &'static str, hint: &'static str) -> Self {
        GraphError::InvalidNumericConversion { target, hint }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::DuplicateNode { .. }
            | GraphError::UnknownNode { .. }
            | GraphError::EmptyNodeName
            | GraphError::NoEdgesProvided { .. }
            | GraphError::InvalidNumericConversion { .. } => ExitCode::Data,

            GraphError::UsageError(_) | GraphError::Toml(_) => ExitCode::Usage,

            GraphError::Io(_) | GraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateNode { .. } => "duplicate_node",
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::EmptyNodeName => "empty_node_name",
            GraphError::NoEdgesProvided { .. } => "no_edges_provided",
            GraphError::InvalidNumericConversion { .. } => "invalid_numeric_conversion",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
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

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
