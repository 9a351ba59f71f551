//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{Branch, CommitRecord, ExistingFile, PutFileRequest, Tag},
    },
    result::Result,
};

/// Operations the changelog publisher requires from a forge platform.
///
/// Lookups that can legitimately come up empty (a missing file) return
/// `Option` rather than an error; transport and API faults propagate
/// unchanged as fatal failures for the run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    fn remote_config(&self) -> RemoteConfig;

    /// List the repository's tags.
    async fn get_tags(&self) -> Result<Vec<Tag>>;

    /// List the repository's branches.
    async fn get_branches(&self) -> Result<Vec<Branch>>;

    /// Commits reachable from `head_sha` but not from `base_sha`.
    async fn compare_commits(
        &self,
        base_sha: &str,
        head_sha: &str,
    ) -> Result<Vec<CommitRecord>>;

    /// Fetch a single commit, used for committer date lookup.
    async fn get_commit(&self, sha: &str) -> Result<CommitRecord>;

    /// Fetch file metadata at `path` on `branch`, `None` if absent.
    async fn get_file(
        &self,
        path: &str,
        branch: &str,
    ) -> Result<Option<ExistingFile>>;

    /// Create or update a file, updating when `req.sha` is present.
    async fn put_file(&self, path: &str, req: PutFileRequest) -> Result<()>;
}
