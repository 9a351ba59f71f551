//! Classifies commit messages and extracts merged-pull-request entries.

/// Literal marker for a GitHub-style pull request merge commit.
pub const MERGE_PREFIX: &str = "Merge pull request #";

/// A single changelog bullet derived from a merge commit.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogEntry {
    pub pr_number: String,
    pub title: String,
}

/// Extract a changelog entry from a commit message.
///
/// A commit qualifies iff its message starts with the literal merge
/// marker. The message splits on the first blank-line boundary into the
/// merge line (carrying `#<number> `) and the PR title, taken verbatim.
/// Anything beyond the second blank-line boundary is unused. Messages
/// that carry the marker but fail the split — no blank line, no space
/// after the number, or nothing after the blank line — are omitted, not
/// errors: tag history is heterogeneous and direct pushes or squash
/// merges produce no entry.
pub fn classify(message: &str) -> Option<ChangelogEntry> {
    if !message.starts_with(MERGE_PREFIX) {
        return None;
    }

    let (merge_line, rest) = message.split_once("\n\n")?;

    let after_hash = merge_line.split_once('#')?.1;
    let (pr_number, _) = after_hash.split_once(' ')?;

    let title = rest.split("\n\n").next().filter(|t| !t.is_empty())?;

    Some(ChangelogEntry {
        pr_number: pr_number.into(),
        title: title.into(),
    })
}
