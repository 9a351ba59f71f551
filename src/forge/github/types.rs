//! Serde DTOs for the subset of the GitHub REST API used by forgelog.
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GithubObject {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubTag {
    pub name: String,
    pub commit: GithubObject,
}

#[derive(Debug, Deserialize)]
pub struct GithubBranch {
    pub name: String,
    pub commit: GithubObject,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommitActor {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommitDetail {
    pub message: String,
    pub committer: GithubCommitActor,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommit {
    pub commit: GithubCommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct GithubCompare {
    pub commits: Vec<GithubCommit>,
}

#[derive(Debug, Deserialize)]
pub struct GithubContents {
    pub sha: String,
}
