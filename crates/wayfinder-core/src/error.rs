//! Error types and exit codes for wayfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph/data error (invalid edge, unknown node, unreachable destination,
//!   path cost overflow)

mod macros;

use thiserror::Error;

/// Process exit codes for the wayfinder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph/data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or computing routes
#[derive(Error, Debug)]
pub enum WayfinderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph/data errors (exit code 3)
    #[error("invalid edge {from} - {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("no path found from {from} to {to}")]
    NoPathFound { from: String, to: String },

    #[error("path cost overflows past {from} - {to}")]
    CostOverflow { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfinderError {
    /// Create an error for an edge that cannot be added to a graph
    pub fn invalid_edge(from: &str, to: &str, reason: impl std::fmt::Display) -> Self {
        WayfinderError::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a node identifier absent from the graph
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        WayfinderError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for a path whose total cost leaves the `f64` range
    pub fn cost_overflow(from: &str, to: &str) -> Self {
        WayfinderError::CostOverflow {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an unreachable destination
    pub fn no_path(from: &str, to: &str) -> Self {
        WayfinderError::NoPathFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfinderError::UnknownFormat(_)
            | WayfinderError::UsageError(_)
            | WayfinderError::InvalidValue { .. } => ExitCode::Usage,

            WayfinderError::InvalidEdge { .. }
            | WayfinderError::UnknownNode { .. }
            | WayfinderError::NoPathFound { .. }
            | WayfinderError::CostOverflow { .. } => ExitCode::Data,

            WayfinderError::Io(_)
            | WayfinderError::Yaml(_)
            | WayfinderError::Json(_)
            | WayfinderError::Toml(_)
            | WayfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in structured output
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfinderError::UnknownFormat(_) => "unknown_format",
            WayfinderError::UsageError(_) => "usage_error",
            WayfinderError::InvalidValue { .. } => "invalid_value",
            WayfinderError::InvalidEdge { .. } => "invalid_edge",
            WayfinderError::UnknownNode { .. } => "unknown_node",
            WayfinderError::NoPathFound { .. } => "no_path_found",
            WayfinderError::CostOverflow { .. } => "cost_overflow",
            WayfinderError::Io(_) => "io_error",
            WayfinderError::Yaml(_) => "yaml_error",
            WayfinderError::Json(_) => "json_error",
            WayfinderError::Toml(_) => "toml_error",
            WayfinderError::Other(_) => "other",
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

/// Result type alias for wayfinder operations
pub type Result<T> = std::result::Result<T, WayfinderError>;
