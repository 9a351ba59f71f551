//! Interface to hosted Git forge platforms.
//!
//! Provides token-based authentication, tag and branch listing, commit
//! comparison, and repository file content operations through a common
//! trait.

/// Configuration and authentication for forge platforms.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Request and response value types shared across forge implementations.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;
