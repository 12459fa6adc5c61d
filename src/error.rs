//! Error types for viewforge

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling a view project
#[derive(Error, Debug)]
pub enum ViewForgeError {
    #[error("Failed to read project file: {path}")]
    ProjectReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project file: {path}")]
    ProjectParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid project file: {message}")]
    InvalidProjectFormat { message: String },

    #[error("Failed to read schema file: {path}")]
    SchemaFileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL parse error in {path}: {message}")]
    SchemaParseError { path: PathBuf, message: String },

    #[error("View '{view}' references unknown table '{table}'")]
    UnknownTable { view: String, table: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Failed to write DDL to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ViewForgeError {
    /// Shorthand for the fail-fast validation errors raised by the DDL builder.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ViewForgeError::InvalidArgument {
            message: message.into(),
        }
    }
}
