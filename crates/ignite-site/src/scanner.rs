//! Content discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use ignite_meta::resource::CONTENT_EXTENSION;

/// File extensions that make an `index` file at the pages root a homepage.
const HOMEPAGE_EXTENSIONS: [&str; 5] = ["mdx", "js", "jsx", "ts", "tsx"];

/// Discovers content files under the pages directory.
#[derive(Clone, Debug)]
pub struct PageScanner {
    pages_dir: PathBuf,
}

impl PageScanner {
    /// Create a scanner rooted at `pages_dir`.
    #[must_use]
    pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
        }
    }

    /// Resource paths of every content file, sorted.
    ///
    /// Paths use `/` separators regardless of platform. Hidden files and
    /// directories are skipped. Returns an empty Vec if the directory doesn't
    /// exist.
    #[must_use]
    pub fn scan(&self) -> Vec<String> {
        let mut pages = Vec::new();
        if self.pages_dir.is_dir() {
            scan_directory(&self.pages_dir, "", &mut pages);
        }
        pages.sort();
        pages
    }

    /// Whether an `index` page exists at the pages root.
    #[must_use]
    pub fn has_homepage(&self) -> bool {
        HOMEPAGE_EXTENSIONS
            .iter()
            .any(|ext| self.pages_dir.join(format!("index.{ext}")).is_file())
    }
}

fn scan_directory(dir: &Path, prefix: &str, pages: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let resource_path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };

        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        let path = entry.path();
        if is_dir {
            scan_directory(&path, &resource_path, pages);
        } else if path.extension().is_some_and(|e| e == CONTENT_EXTENSION) {
            pages.push(resource_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_scan_nested_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "index.mdx");
        touch(tmp.path(), "docs/setup.mdx");
        touch(tmp.path(), "blog/2020/launch.mdx");
        touch(tmp.path(), "docs/_sidebar.mdx");

        let pages = PageScanner::new(tmp.path()).scan();

        assert_eq!(
            pages,
            vec![
                "blog/2020/launch.mdx",
                "docs/_sidebar.mdx",
                "docs/setup.mdx",
                "index.mdx",
            ]
        );
    }

    #[test]
    fn test_scan_skips_hidden_and_other_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "docs/a.mdx");
        touch(tmp.path(), "docs/.draft.mdx");
        touch(tmp.path(), ".cache/b.mdx");
        touch(tmp.path(), "docs/notes.md");
        touch(tmp.path(), "docs/_sidebar.js");

        let pages = PageScanner::new(tmp.path()).scan();

        assert_eq!(pages, vec!["docs/a.mdx"]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let pages = PageScanner::new(tmp.path().join("missing")).scan();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_has_homepage() {
        let tmp = TempDir::new().unwrap();
        let scanner = PageScanner::new(tmp.path());
        assert!(!scanner.has_homepage());

        touch(tmp.path(), "docs/index.mdx");
        assert!(!scanner.has_homepage());

        touch(tmp.path(), "index.tsx");
        assert!(scanner.has_homepage());
    }
}
