//! CLI argument parsing and forge configuration.
use clap::Parser;
use secrecy::SecretString;
use std::env;

use crate::{
    changelog::{jira::JiraConfig, publisher::PublishConfig},
    error::ChangelogError,
    forge::config::{DEFAULT_GITHUB_HOST, RemoteConfig},
    result::Result,
};

/// CLI arguments for changelog generation and publication.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Git forge host (github.com or a GitHub Enterprise host).
    #[arg(long, default_value = DEFAULT_GITHUB_HOST)]
    pub host: String,

    /// Access token. Falls back to GITHUB_TOKEN env var.
    #[arg(long, default_value = "")]
    pub token: String,

    /// Repository owner.
    #[arg(long)]
    pub owner: String,

    /// Repository name.
    #[arg(long)]
    pub repo: String,

    /// Branch the changelog file is committed to.
    #[arg(long)]
    pub changelog_branch: String,

    /// Changelog file path relative to the repository root.
    #[arg(long, default_value = "CHANGELOG.md")]
    pub changelog_path: String,

    /// Rewrite JIRA-style issue keys in PR titles as links.
    #[arg(long, default_value_t = false)]
    pub parse_jira_references: bool,

    /// JIRA base URL used when rewriting issue keys.
    #[arg(long, default_value = "")]
    pub jira_url: String,

    /// Enable debug logging.
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn remote_config(&self) -> Result<RemoteConfig> {
        let mut token = self.token.clone();

        if token.is_empty()
            && let Ok(env_token) = env::var("GITHUB_TOKEN")
        {
            token = env_token;
        }

        if token.is_empty() {
            return Err(ChangelogError::invalid_args(
                "must configure an access token",
            )
            .into());
        }

        Ok(RemoteConfig {
            scheme: "https".into(),
            host: self.host.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            token: SecretString::from(token),
        })
    }

    /// Publish settings derived from CLI arguments.
    pub fn publish_config(&self) -> PublishConfig {
        PublishConfig {
            changelog_branch: self.changelog_branch.clone(),
            changelog_path: self.changelog_path.clone(),
            pull_request_base_url: format!(
                "https://{}/{}/{}/pull/",
                self.host, self.owner, self.repo
            ),
            jira: JiraConfig {
                enabled: self.parse_jira_references,
                base_url: self.jira_url.clone(),
            },
        }
    }
}
