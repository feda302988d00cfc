//! Error types for tasklens.
//!
//! The filter and statistics engines are total and never fail; these errors
//! come from the host around them (config, task file, argument parsing).

use thiserror::Error;

/// Errors surfaced by the tasklens host.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Configuration could not be read, parsed or written.
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A new task was rejected by the add-task rules.
    #[error("invalid task: {0}")]
    Validation(String),

    /// No task with the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// A command-line value could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
