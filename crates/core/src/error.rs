//! Error model shared by every example crate.

use thiserror::Error;

/// Result type used across the workspace.
pub type DesignResult<T> = Result<T, DesignError>;

/// Workspace-level error.
///
/// Contract violations (a variant missing an operation) never reach this type:
/// trait bounds reject them at compile time. What remains is input validation at
/// construction and failures of the output channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// A value failed validation at construction time.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Writing to the output channel failed.
    #[error("output failed: {0}")]
    Output(String),
}

impl DesignError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

impl From<std::io::Error> for DesignError {
    fn from(err: std::io::Error) -> Self {
        Self::output(err.to_string())
    }
}
