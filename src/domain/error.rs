use std::io;

use thiserror::Error;

/// Library-wide error type for chaps operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The working directory is not inside a git repository.
    #[error("Not inside a git repository: `git rev-parse --show-toplevel` reported no toplevel")]
    NotARepository,

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Pants execution failed.
    #[error("Pants error running '{command}': {details}")]
    PantsError { command: String, details: String },

    /// Bare target missing its leading `:`.
    #[error("Malformed target '{0}': bare targets start with ':'")]
    MalformedTarget(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}
