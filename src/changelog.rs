//! Changelog assembly: tag ordering, range selection, commit
//! classification, reference annotation, rendering, and publication.

/// Commit message classification for merged pull requests.
pub mod commits;

/// JIRA-style issue key annotation.
pub mod jira;

/// Publish-or-update orchestration against a forge.
pub mod publisher;

/// Derivation of (base, head) commit ranges from tag history.
pub mod ranges;

/// Markdown document assembly.
pub mod render;

/// Version-aware ordering for tag names.
pub mod tags;
