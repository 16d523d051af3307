//! Section derivation and ordering.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Preferred order used when the configuration does not name one.
pub const DEFAULT_ORDER: [&str; 2] = ["docs", "blog"];

/// Section a page belongs to: the first segment of a nested path.
///
/// Flat top-level files (`about.mdx`) belong to no section.
#[must_use]
pub fn section_of(resource_path: &str) -> Option<&str> {
    resource_path
        .split_once('/')
        .map(|(first, _)| first)
        .filter(|first| !first.is_empty())
}

/// Compare two strings the way a default collation would.
///
/// Case-insensitive first; on a tie lowercase sorts before uppercase, and
/// identical strings compare equal.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Section comparator.
///
/// Sections named in `order` come first, in that order. Everything else
/// follows, sorted with [`locale_cmp`].
pub fn compare_sections<S: AsRef<str>>(a: &str, b: &str, order: &[S]) -> Ordering {
    let position = |name: &str| order.iter().position(|o| o.as_ref() == name);

    match (position(a), position(b)) {
        (None, None) => locale_cmp(a, b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ia), Some(ib)) => ia.cmp(&ib),
    }
}

/// Deduplicated, ordered list of top-level sections.
///
/// Only paths containing a `/` contribute. The result depends only on the set
/// of paths, not on their order.
///
/// # Example
///
/// ```
/// use ignite_sections::{DEFAULT_ORDER, top_level_sections};
///
/// let pages = ["guides/c.mdx", "docs/a.mdx", "blog/b.mdx", "about.mdx"];
/// assert_eq!(
///     top_level_sections(pages, &DEFAULT_ORDER),
///     vec!["docs", "blog", "guides"],
/// );
/// ```
pub fn top_level_sections<'a, I, S>(resource_paths: I, order: &[S]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    S: AsRef<str>,
{
    let unique: BTreeSet<&str> = resource_paths.into_iter().filter_map(section_of).collect();

    let mut sections: Vec<&str> = unique.into_iter().collect();
    sections.sort_by(|a, b| compare_sections(a, b, order));
    sections.into_iter().map(str::to_owned).collect()
}

/// Pages that live under `section`, in input order.
pub fn pages_in_section<'a, I>(resource_paths: I, section: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    resource_paths
        .into_iter()
        .filter(|p| section_of(p) == Some(section))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_order_example() {
        let pages = ["docs/a.mdx", "blog/b.mdx", "guides/c.mdx"];
        assert_eq!(
            top_level_sections(pages, &DEFAULT_ORDER),
            vec!["docs", "blog", "guides"]
        );
    }

    #[test]
    fn test_flat_files_are_ignored() {
        let pages = ["index.mdx", "about.mdx", "docs/a.mdx"];
        assert_eq!(top_level_sections(pages, &DEFAULT_ORDER), vec!["docs"]);
    }

    #[test]
    fn test_duplicates_are_removed() {
        let pages = ["docs/a.mdx", "docs/b.mdx", "docs/nested/c.mdx"];
        assert_eq!(top_level_sections(pages, &DEFAULT_ORDER), vec!["docs"]);
    }

    #[test]
    fn test_unnamed_sections_sorted_alphabetically() {
        let pages = ["zeta/a.mdx", "Alpha/a.mdx", "beta/a.mdx", "docs/a.mdx"];
        assert_eq!(
            top_level_sections(pages, &DEFAULT_ORDER),
            vec!["docs", "Alpha", "beta", "zeta"]
        );
    }

    #[test]
    fn test_custom_order() {
        let pages = ["docs/a.mdx", "blog/b.mdx", "api/c.mdx", "guides/d.mdx"];
        let order = vec!["guides".to_owned(), "docs".to_owned()];
        assert_eq!(
            top_level_sections(pages, &order),
            vec!["guides", "docs", "api", "blog"]
        );
    }

    #[test]
    fn test_order_entries_without_pages_are_skipped() {
        let pages = ["blog/b.mdx"];
        assert_eq!(top_level_sections(pages, &DEFAULT_ORDER), vec!["blog"]);
    }

    #[test]
    fn test_empty_input() {
        let pages: [&str; 0] = [];
        assert!(top_level_sections(pages, &DEFAULT_ORDER).is_empty());
    }

    #[test]
    fn test_compare_sections_rules() {
        let order = ["docs", "blog"];
        assert_eq!(compare_sections("docs", "blog", &order), Ordering::Less);
        assert_eq!(compare_sections("blog", "docs", &order), Ordering::Greater);
        assert_eq!(compare_sections("api", "blog", &order), Ordering::Greater);
        assert_eq!(compare_sections("blog", "api", &order), Ordering::Less);
        assert_eq!(compare_sections("api", "zoo", &order), Ordering::Less);
        assert_eq!(compare_sections("docs", "docs", &order), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_section_of() {
        assert_eq!(section_of("docs/a.mdx"), Some("docs"));
        assert_eq!(section_of("blog/2020/post.mdx"), Some("blog"));
        assert_eq!(section_of("about.mdx"), None);
        assert_eq!(section_of("/weird.mdx"), None);
    }

    #[test]
    fn test_pages_in_section() {
        let pages = ["blog/a.mdx", "docs/b.mdx", "blog/2020/c.mdx", "blog.mdx"];
        assert_eq!(
            pages_in_section(pages, "blog"),
            vec!["blog/a.mdx", "blog/2020/c.mdx"]
        );
    }
}
