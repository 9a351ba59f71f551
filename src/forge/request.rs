//! Value types exchanged with forge implementations.
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A named, immutable pointer to a commit, used as a release marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub sha: String,
}

/// A repository branch and its current tip.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub name: String,
    pub sha: String,
}

/// A normalized commit returned from a forge.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    /// Full raw commit message.
    pub message: String,
    /// Committer date.
    pub timestamp: DateTime<FixedOffset>,
}

/// An existing file at the publish target path.
///
/// The sha is the forge's optimistic-concurrency token: attaching it to a
/// put request turns the call into an update instead of a create.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistingFile {
    pub sha: String,
}

/// Request to create or update a repository file.
///
/// Serializes directly as the GitHub contents API request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PutFileRequest {
    /// Commit message for the file write.
    pub message: String,
    /// Branch the file is committed to.
    pub branch: String,
    /// Base64 encoded file content.
    pub content: String,
    /// Sha of the existing file, present only when updating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}
