//! Version-aware ordering for tag names.
//!
//! Tag names are compared by the numeric segments embedded in them, so
//! `asset-version-1.0.2` sorts after `asset-version-1.0.1` and textual
//! prefixes never influence the order.
use std::cmp::Ordering;

use crate::forge::request::Tag;

/// One numeric segment of a tag name: a digit run with leading zeros
/// stripped. Comparing by length first and then lexicographically gives
/// numeric order without parsing, so digit runs of any length compare
/// correctly.
#[derive(PartialEq, Eq)]
struct Segment<'a>(&'a str);

impl Ord for Segment<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Segment<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric segments of a tag name, in order of appearance.
///
/// The name is split on maximal runs of non-digit characters, so segments
/// are always pure digit runs. Names without digits yield an empty
/// sequence.
fn version_segments(name: &str) -> Vec<Segment<'_>> {
    name.split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| Segment(s.trim_start_matches('0')))
        .collect()
}

/// Total order over tag names derived from their numeric segments.
///
/// Segments compare positionally; the first differing segment decides. A
/// strict prefix sorts before the longer sequence, and equal sequences
/// compare equal even when the literal names differ.
pub fn compare_tag_names(a: &str, b: &str) -> Ordering {
    // slice ordering is lexicographic with shorter-prefix-first, which is
    // exactly the contract here
    version_segments(a).cmp(&version_segments(b))
}

/// Sort tags in place, newest version first.
pub fn sort_newest_first(tags: &mut [Tag]) {
    tags.sort_by(|a, b| compare_tag_names(&b.name, &a.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> Tag {
        Tag {
            name: name.into(),
            sha: format!("sha-{name}"),
        }
    }

    #[test]
    fn identical_names_compare_equal() {
        assert_eq!(compare_tag_names("1.2.3.29", "1.2.3.29"), Ordering::Equal);
    }

    #[test]
    fn identical_names_with_text_compare_equal() {
        assert_eq!(
            compare_tag_names(
                "asset-text-version-0.0.0.0.30.29",
                "asset-text-version-0.0.0.0.30.29"
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn differing_text_prefixes_compare_equal() {
        assert_eq!(
            compare_tag_names(
                "asset-text-version-0.0.0.0.30.29",
                "asset-version-0.0.0.0.30.29"
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn numeric_segments_decide_order() {
        assert_eq!(
            compare_tag_names("asset-version-1.0.1", "asset-version-1.0.2"),
            Ordering::Less
        );
        assert_eq!(
            compare_tag_names("asset-version-1.0.2", "asset-version-1.0.1"),
            Ordering::Greater
        );
    }

    #[test]
    fn strict_prefix_sorts_first() {
        assert_eq!(compare_tag_names("1.2.3", "1.2.3.4"), Ordering::Less);
    }

    #[test]
    fn patch_bump_sorts_after() {
        assert_eq!(compare_tag_names("v1.2.3", "v1.2.4"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_do_not_affect_order() {
        assert_eq!(compare_tag_names("v1.02.3", "v1.2.3"), Ordering::Equal);
        assert_eq!(compare_tag_names("v1.0.9", "v1.0.10"), Ordering::Less);
    }

    #[test]
    fn digit_runs_beyond_machine_width_compare_numerically() {
        let lo = "v1.340282366920938463463374607431768211456";
        let hi = "v1.340282366920938463463374607431768211457";
        assert_eq!(compare_tag_names(lo, hi), Ordering::Less);
        assert_eq!(compare_tag_names(hi, lo), Ordering::Greater);
        assert_eq!(compare_tag_names(lo, lo), Ordering::Equal);
    }

    #[test]
    fn names_without_digits_tie_with_each_other() {
        assert_eq!(compare_tag_names("alpha", "beta"), Ordering::Equal);
        assert_eq!(compare_tag_names("alpha", "v1"), Ordering::Less);
    }

    #[test]
    fn sorts_newest_first() {
        let mut tags = vec![tag("v1.0.0"), tag("v1.2.0"), tag("v1.1.0")];
        sort_newest_first(&mut tags);
        let names: Vec<&str> =
            tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["v1.2.0", "v1.1.0", "v1.0.0"]);
    }
}
