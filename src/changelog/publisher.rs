//! Orchestrates one changelog generation run against a forge.
use base64::{Engine, prelude::BASE64_STANDARD};
use log::*;

use crate::{
    changelog::{
        commits::{self, ChangelogEntry},
        jira::{self, JiraConfig},
        ranges::{self, Range},
        render::ChangelogRenderer,
        tags,
    },
    forge::{request::PutFileRequest, traits::Forge},
    result::Result,
};

/// Commit message attached to the changelog file write.
pub const COMMIT_MESSAGE: &str = "Auto-generated Change Log from Build";

/// Branch holding not-yet-released merged work, looked up by exact name.
pub const INTEGRATION_BRANCH: &str = "integration";

/// Caller-supplied settings for one publish run.
#[derive(Debug, Clone, Default)]
pub struct PublishConfig {
    /// Branch the changelog file is committed to.
    pub changelog_branch: String,
    /// Changelog file path relative to the repository root.
    pub changelog_path: String,
    /// Base URL for pull request links, ending in `/pull/`.
    pub pull_request_base_url: String,
    /// Issue-tracker annotation settings.
    pub jira: JiraConfig,
}

/// Walks a repository's tag history and publishes the assembled changelog.
///
/// A run is all-or-nothing: ranges are processed strictly sequentially,
/// any fetch failure aborts before the single publish call, and the write
/// happens exactly once at the end with the fully assembled text.
pub struct ChangelogPublisher {
    forge: Box<dyn Forge>,
    config: PublishConfig,
}

impl ChangelogPublisher {
    pub fn new(forge: Box<dyn Forge>, config: PublishConfig) -> Self {
        Self { forge, config }
    }

    /// Generate the changelog and commit it to the configured branch.
    ///
    /// Returns the published Markdown text.
    pub async fn run(&self) -> Result<String> {
        let existing = self
            .forge
            .get_file(&self.config.changelog_path, &self.config.changelog_branch)
            .await?;

        if existing.is_some() {
            info!(
                "existing change log {} found for update",
                self.config.changelog_path
            );
        }

        let mut tag_list = self.forge.get_tags().await?;
        tags::sort_newest_first(&mut tag_list);

        let branches = self.forge.get_branches().await?;
        let integration =
            branches.iter().find(|b| b.name == INTEGRATION_BRANCH);

        if integration.is_none() {
            debug!("no {INTEGRATION_BRANCH} branch: skipping upcoming section");
        }

        let selected = ranges::select_ranges(&tag_list, integration);

        let mut renderer =
            ChangelogRenderer::new(&self.config.pull_request_base_url);

        for range in &selected {
            self.append_section(&mut renderer, range).await?;
        }

        let markdown = renderer.finish();

        let request = PutFileRequest {
            message: COMMIT_MESSAGE.into(),
            branch: self.config.changelog_branch.clone(),
            content: BASE64_STANDARD.encode(markdown.as_bytes()),
            sha: existing.map(|file| file.sha),
        };

        self.forge
            .put_file(&self.config.changelog_path, request)
            .await?;

        let remote = self.forge.remote_config();
        info!(
            "change log generation complete - {}://{}/{}/blob/{}/{}",
            remote.scheme,
            remote.host,
            remote.path(),
            self.config.changelog_branch,
            self.config.changelog_path
        );

        Ok(markdown)
    }

    /// Fetch one range's comparison, classify and annotate its commits,
    /// and append the rendered section.
    async fn append_section(
        &self,
        renderer: &mut ChangelogRenderer,
        range: &Range,
    ) -> Result<()> {
        info!("generating changelog for version {}", range.title);

        let compared =
            self.forge.compare_commits(&range.base, &range.head).await?;

        let head = self.forge.get_commit(&range.head).await?;

        let entries = compared
            .iter()
            .filter_map(|record| commits::classify(&record.message))
            .map(|entry| ChangelogEntry {
                title: jira::annotate(&entry.title, &self.config.jira),
                pr_number: entry.pr_number,
            })
            .collect::<Vec<ChangelogEntry>>();

        renderer.append_section(&range.title, head.timestamp, &entries);

        Ok(())
    }
}
