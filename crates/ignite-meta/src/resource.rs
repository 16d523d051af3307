//! Helpers for interpreting resource paths.
//!
//! A resource path is the content file's path relative to the pages root,
//! always `/`-separated (e.g. `"index.mdx"`, `"docs/getting-started.mdx"`).

/// Extension of content files, without the dot.
pub const CONTENT_EXTENSION: &str = "mdx";

/// File stem of per-section sidebar override files.
pub const SIDEBAR_FILE_STEM: &str = "_sidebar";

/// Resource path of the site root index page.
pub const ROOT_INDEX: &str = "index.mdx";

/// Strip the trailing `.mdx` extension, if any.
#[must_use]
pub fn strip_content_extension(resource_path: &str) -> &str {
    resource_path
        .strip_suffix(CONTENT_EXTENSION)
        .and_then(|p| p.strip_suffix('.'))
        .unwrap_or(resource_path)
}

/// True for the site root index page.
#[must_use]
pub fn is_root_index(resource_path: &str) -> bool {
    resource_path == ROOT_INDEX
}

/// True if the resource path names a sidebar override file (`_sidebar.*`).
#[must_use]
pub fn is_sidebar_override(resource_path: &str) -> bool {
    file_name(resource_path)
        .split_once('.')
        .is_some_and(|(stem, _)| stem == SIDEBAR_FILE_STEM)
}

/// Derive a display title from the resource path.
///
/// Index pages take their directory name; the root index is "Home".
#[must_use]
pub fn title_from_path(resource_path: &str) -> String {
    let stem_path = strip_content_extension(resource_path);
    let (dir, stem) = stem_path.rsplit_once('/').unwrap_or(("", stem_path));

    let slug = if stem == "index" {
        dir.rsplit('/').next().unwrap_or_default()
    } else {
        stem
    };

    match slug {
        "" => "Home".to_owned(),
        slug => titlecase_from_slug(slug),
    }
}

fn file_name(resource_path: &str) -> &str {
    resource_path
        .rsplit_once('/')
        .map_or(resource_path, |(_, name)| name)
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_content_extension() {
        assert_eq!(strip_content_extension("docs/a.mdx"), "docs/a");
        assert_eq!(strip_content_extension("index.mdx"), "index");
        assert_eq!(strip_content_extension("docs/a.md"), "docs/a.md");
        assert_eq!(strip_content_extension("docs/amdx"), "docs/amdx");
    }

    #[test]
    fn test_is_root_index() {
        assert!(is_root_index("index.mdx"));
        assert!(!is_root_index("docs/index.mdx"));
        assert!(!is_root_index("index.js"));
    }

    #[test]
    fn test_is_sidebar_override() {
        assert!(is_sidebar_override("docs/_sidebar.mdx"));
        assert!(is_sidebar_override("docs/_sidebar.js"));
        assert!(is_sidebar_override("_sidebar.mdx"));
        assert!(!is_sidebar_override("docs/sidebar.mdx"));
        assert!(!is_sidebar_override("docs/_sidebar-notes.mdx"));
        assert!(!is_sidebar_override("_sidebar/intro.mdx"));
    }

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path("docs/getting-started.mdx"), "Getting Started");
        assert_eq!(title_from_path("docs/my_page.mdx"), "My Page");
        assert_eq!(title_from_path("docs/index.mdx"), "Docs");
        assert_eq!(title_from_path("guides/deep/index.mdx"), "Deep");
        assert_eq!(title_from_path("index.mdx"), "Home");
        assert_eq!(title_from_path("about.mdx"), "About");
    }
}
