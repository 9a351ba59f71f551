//! Custom error types for forgelog with improved type safety.

use thiserror::Error;

/// Main error type for forgelog operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Repository not found: {path}")]
    RepoNotFound { path: String },

    #[error("Forge API request failed with status {status}: {endpoint}")]
    ApiError {
        status: reqwest::StatusCode,
        endpoint: String,
    },

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

impl ChangelogError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a repository not found error
    pub fn repo_not_found(path: impl Into<String>) -> Self {
        Self::RepoNotFound { path: path.into() }
    }

    /// Create an API error from a response status and endpoint
    pub fn api(status: reqwest::StatusCode, endpoint: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            endpoint: endpoint.into(),
        }
    }
}
