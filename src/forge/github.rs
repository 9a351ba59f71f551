//! Implements the Forge trait for Github
use async_trait::async_trait;
use chrono::DateTime;
use log::*;
use reqwest::{
    Client, StatusCode, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::{
    error::ChangelogError,
    forge::{
        config::{DEFAULT_GITHUB_HOST, RemoteConfig},
        github::types::{
            GithubBranch, GithubCommit, GithubCompare, GithubContents,
            GithubTag,
        },
        request::{Branch, CommitRecord, ExistingFile, PutFileRequest, Tag},
        traits::Forge,
    },
    result::Result,
};

mod types;

/// Page size for list endpoints. A single page is requested; pagination is
/// the transport collaborator's concern.
const PAGE_SIZE: u8 = 100;

/// GitHub forge implementation using reqwest for API interactions with
/// tags, branches, commit comparisons, and repository file contents.
pub struct Github {
    config: RemoteConfig,
    base_url: Url,
    client: Client,
}

impl Github {
    /// Create GitHub client with token authentication and API base URL
    /// configuration, then verify the repository exists. A missing
    /// repository is fatal since nothing downstream can proceed.
    pub async fn new(config: RemoteConfig) -> Result<Self> {
        let token = config.token.expose_secret();

        let mut headers = HeaderMap::new();

        let token_value =
            HeaderValue::from_str(format!("token {}", token).as_str())?;

        headers.append("Authorization", token_value);
        headers.append(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.append("User-Agent", HeaderValue::from_static("forgelog"));

        let client = Client::builder().default_headers(headers).build()?;

        // github.com serves its API from a dedicated subdomain; Enterprise
        // hosts serve it under /api/v3
        let api_root = if config.host == DEFAULT_GITHUB_HOST {
            format!("{}://api.{}/", config.scheme, config.host)
        } else {
            format!("{}://{}/api/v3/", config.scheme, config.host)
        };

        let base_url = Url::parse(&api_root)?
            .join(&format!("repos/{}/{}/", config.owner, config.repo))?;

        let response = client.get(base_url.clone()).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ChangelogError::repo_not_found(config.path()).into());
        }

        response.error_for_status()?;

        info!(
            "repository {} found for owner {}",
            config.repo, config.owner
        );

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T> {
        let url = self.base_url.join(route)?;
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(
                ChangelogError::api(response.status(), url.as_str()).into()
            );
        }

        Ok(response.json().await?)
    }

    fn commit_record(commit: GithubCommit) -> Result<CommitRecord> {
        let timestamp =
            DateTime::parse_from_rfc3339(&commit.commit.committer.date)?;

        Ok(CommitRecord {
            message: commit.commit.message,
            timestamp,
        })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_tags(&self) -> Result<Vec<Tag>> {
        let tags: Vec<GithubTag> =
            self.get_json(&format!("tags?per_page={PAGE_SIZE}")).await?;

        Ok(tags
            .into_iter()
            .map(|t| Tag {
                name: t.name,
                sha: t.commit.sha,
            })
            .collect())
    }

    async fn get_branches(&self) -> Result<Vec<Branch>> {
        let branches: Vec<GithubBranch> = self
            .get_json(&format!("branches?per_page={PAGE_SIZE}"))
            .await?;

        Ok(branches
            .into_iter()
            .map(|b| Branch {
                name: b.name,
                sha: b.commit.sha,
            })
            .collect())
    }

    async fn compare_commits(
        &self,
        base_sha: &str,
        head_sha: &str,
    ) -> Result<Vec<CommitRecord>> {
        let compare: GithubCompare = self
            .get_json(&format!("compare/{base_sha}...{head_sha}"))
            .await?;

        compare
            .commits
            .into_iter()
            .map(Self::commit_record)
            .collect()
    }

    async fn get_commit(&self, sha: &str) -> Result<CommitRecord> {
        let commit: GithubCommit =
            self.get_json(&format!("commits/{sha}")).await?;

        Self::commit_record(commit)
    }

    async fn get_file(
        &self,
        path: &str,
        branch: &str,
    ) -> Result<Option<ExistingFile>> {
        let path = path.strip_prefix("./").unwrap_or(path);
        let url = self
            .base_url
            .join(&format!("contents/{path}?ref={branch}"))?;

        let response = self.client.get(url.clone()).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            info!("no file found for path: {path}");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(
                ChangelogError::api(response.status(), url.as_str()).into()
            );
        }

        let contents: GithubContents = response.json().await?;

        Ok(Some(ExistingFile { sha: contents.sha }))
    }

    async fn put_file(&self, path: &str, req: PutFileRequest) -> Result<()> {
        let path = path.strip_prefix("./").unwrap_or(path);
        let url = self.base_url.join(&format!("contents/{path}"))?;

        debug!("putting file contents to: {url}");

        let response = self.client.put(url.clone()).json(&req).send().await?;

        if !response.status().is_success() {
            return Err(
                ChangelogError::api(response.status(), url.as_str()).into()
            );
        }

        Ok(())
    }
}
