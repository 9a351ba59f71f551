//! Derives the (base, head) commit ranges to summarize from the tag list
//! plus the integration branch.
use crate::forge::request::{Branch, Tag};

/// Section title for the trailing range of not-yet-released work.
pub const UPCOMING_TITLE: &str = "upcoming";

/// One release's worth of changes: a display title plus the commit
/// references bounding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub title: String,
    pub base: String,
    pub head: String,
}

/// Derive ranges from tags sorted newest first, in the order the renderer
/// prints them.
///
/// The trailing "upcoming" range (newest tag -> integration branch tip)
/// comes first when an integration branch exists, followed by one range
/// per adjacent tag pair titled with the newer tag's name. With no tags
/// nothing is emitted, even when a branch is present.
pub fn select_ranges(tags: &[Tag], integration: Option<&Branch>) -> Vec<Range> {
    let mut ranges = vec![];

    let Some(newest) = tags.first() else {
        return ranges;
    };

    if let Some(branch) = integration {
        ranges.push(Range {
            title: UPCOMING_TITLE.into(),
            base: newest.sha.clone(),
            head: branch.sha.clone(),
        });
    }

    for pair in tags.windows(2) {
        ranges.push(Range {
            title: pair[0].name.clone(),
            base: pair[1].sha.clone(),
            head: pair[0].sha.clone(),
        });
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, sha: &str) -> Tag {
        Tag {
            name: name.into(),
            sha: sha.into(),
        }
    }

    fn integration(sha: &str) -> Branch {
        Branch {
            name: "integration".into(),
            sha: sha.into(),
        }
    }

    #[test]
    fn emits_one_range_per_tag_when_branch_present() {
        let tags = vec![
            tag("v1.2.0", "c"),
            tag("v1.1.0", "b"),
            tag("v1.0.0", "a"),
        ];
        let branch = integration("tip");

        let ranges = select_ranges(&tags, Some(&branch));

        assert_eq!(ranges.len(), 3);
        assert_eq!(
            ranges[0],
            Range {
                title: "upcoming".into(),
                base: "c".into(),
                head: "tip".into(),
            }
        );
        assert_eq!(
            ranges[1],
            Range {
                title: "v1.2.0".into(),
                base: "b".into(),
                head: "c".into(),
            }
        );
        assert_eq!(
            ranges[2],
            Range {
                title: "v1.1.0".into(),
                base: "a".into(),
                head: "b".into(),
            }
        );
    }

    #[test]
    fn emits_pairs_only_without_branch() {
        let tags = vec![
            tag("v1.2.0", "c"),
            tag("v1.1.0", "b"),
            tag("v1.0.0", "a"),
        ];

        let ranges = select_ranges(&tags, None);

        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].title, "v1.2.0");
        assert_eq!(ranges[1].title, "v1.1.0");
    }

    #[test]
    fn emits_nothing_for_zero_tags() {
        let branch = integration("tip");
        assert!(select_ranges(&[], Some(&branch)).is_empty());
        assert!(select_ranges(&[], None).is_empty());
    }

    #[test]
    fn single_tag_yields_only_upcoming() {
        let tags = vec![tag("v1.0.0", "a")];
        let branch = integration("tip");

        let ranges = select_ranges(&tags, Some(&branch));

        assert_eq!(ranges.len(), 1);
        assert_eq!(
            ranges[0],
            Range {
                title: "upcoming".into(),
                base: "a".into(),
                head: "tip".into(),
            }
        );

        assert!(select_ranges(&tags, None).is_empty());
    }
}
