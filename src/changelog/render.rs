//! Markdown assembly for the changelog document.
use chrono::{DateTime, FixedOffset};

use crate::changelog::commits::ChangelogEntry;

/// Fixed top-level heading of the document.
pub const CHANGELOG_TITLE: &str = "## Change Log\n";

/// Accumulates the changelog document one release section at a time.
///
/// Sections are appended in the order given, which the publisher arranges
/// newest first. A section with no entries renders header-only; that is
/// valid output, not an error.
pub struct ChangelogRenderer {
    text: String,
    pull_request_base_url: String,
}

impl ChangelogRenderer {
    pub fn new(pull_request_base_url: &str) -> Self {
        Self {
            text: CHANGELOG_TITLE.to_string(),
            pull_request_base_url: pull_request_base_url.to_string(),
        }
    }

    /// Append one release section: a sub-heading with the range title and
    /// the head commit's committer date, then one bullet per entry in
    /// source-commit order.
    pub fn append_section(
        &mut self,
        title: &str,
        date: DateTime<FixedOffset>,
        entries: &[ChangelogEntry],
    ) {
        // RFC 2822 in UTC keeps the timestamp locale-independent
        self.text.push_str(&format!(
            "\n### {} ({})\n",
            title,
            date.to_utc().to_rfc2822()
        ));

        for entry in entries {
            self.text.push_str(&format!(
                "- [#{n}]({base}{n}) {title}\n",
                n = entry.pr_number,
                base = self.pull_request_base_url,
                title = entry.title
            ));
        }
    }

    /// The finished Markdown document.
    pub fn finish(self) -> String {
        self.text
    }
}
