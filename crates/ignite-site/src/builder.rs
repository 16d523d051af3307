//! Build pipeline: pages in, front matter records out.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use ignite_meta::{
    Extraction, LayoutCatalog, LayoutResolver, MetadataExtractor, PageMetadata,
    split_front_matter,
};
use ignite_store::{FrontMatterRecord, FrontMatterStore};
use ignite_vcs::HistoryLookup;

use crate::BuildError;
use crate::scanner::PageScanner;

/// Result of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Completed page records, in resource path order.
    pub pages: Vec<PageMetadata>,
    /// Sidebar override files encountered.
    pub sidebar_overrides: Vec<String>,
}

/// Runs extraction and layout resolution over every page and fills the store.
///
/// Processing is sequential; each page costs at most one history query.
pub struct SiteBuilder<'a> {
    pages_dir: PathBuf,
    history: &'a dyn HistoryLookup,
    layouts: &'a dyn LayoutCatalog,
    store: &'a dyn FrontMatterStore,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder.
    ///
    /// `history` must resolve paths relative to `pages_dir`.
    #[must_use]
    pub fn new(
        pages_dir: impl Into<PathBuf>,
        history: &'a dyn HistoryLookup,
        layouts: &'a dyn LayoutCatalog,
        store: &'a dyn FrontMatterStore,
    ) -> Self {
        Self {
            pages_dir: pages_dir.into(),
            history,
            layouts,
            store,
        }
    }

    /// Rebuild the store from the pages on disk.
    ///
    /// Missing history never fails the build; unreadable files, broken front
    /// matter and store write failures do.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] encountered.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let extractor = MetadataExtractor::new(self.history);
        let resolver = LayoutResolver::new(self.layouts);

        self.store.clear()?;

        let mut report = BuildReport::default();
        for resource_path in PageScanner::new(&self.pages_dir).scan() {
            let path = self.pages_dir.join(&resource_path);
            let source = fs::read_to_string(&path)
                .map_err(|source| BuildError::Io { path, source })?;
            let (front_matter, body) =
                split_front_matter(&source).map_err(|source| BuildError::FrontMatter {
                    resource_path: resource_path.clone(),
                    source,
                })?;

            match extractor.extract(&resource_path, &front_matter, body) {
                Extraction::Page(extracted) => {
                    let Some(page) = resolver.complete(extracted) else {
                        continue;
                    };
                    self.store.put(&FrontMatterRecord::from(&page))?;
                    report.pages.push(page);
                }
                Extraction::SidebarOverride => report.sidebar_overrides.push(resource_path),
            }
        }

        tracing::info!(
            pages = report.pages.len(),
            sidebars = report.sidebar_overrides.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "site build finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::Path;

    use ignite_store::MemoryStore;
    use ignite_vcs::{MockHistory, NoHistory};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn layouts(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_build_fills_store() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "index.mdx", "# Welcome\n");
        write(
            tmp.path(),
            "docs/setup.mdx",
            "---\ntitle: Setup\nauthor: Grace\nemail: grace@example.com\n---\nBody\n",
        );
        write(tmp.path(), "blog/launch.mdx", "---\nlayout: custom\n---\n# Launch\n");
        write(tmp.path(), "docs/_sidebar.mdx", "- [Setup](/docs/setup)\n");

        let history = MockHistory::new().with_commit(
            "docs/setup.mdx",
            "Tue, 3 Mar 2020 09:00:00 +0000",
            "Ada",
            "ada@example.com",
        );
        let catalog = layouts(&["blog"]);
        let store = MemoryStore::new();

        let report = SiteBuilder::new(tmp.path(), &history, &catalog, &store)
            .build()
            .unwrap();

        let summary: Vec<_> = report
            .pages
            .iter()
            .map(|p| (p.resource_path.as_str(), p.layout.as_str(), p.title.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("blog/launch.mdx", "custom", "Launch"),
                ("docs/setup.mdx", "docs", "Setup"),
                ("index.mdx", "home-page", "Welcome"),
            ]
        );
        assert_eq!(report.sidebar_overrides, vec!["docs/_sidebar.mdx"]);

        let setup = store.get("docs/setup.mdx").unwrap();
        assert_eq!(setup.date, "Tue, 3 Mar 2020 09:00:00 +0000");
        assert_eq!(setup.author, "Grace");
        assert_eq!(setup.email, "grace@example.com");
        assert_eq!(store.get("docs/_sidebar.mdx"), None);
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn test_build_without_history() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "docs/getting-started.mdx", "No heading here.\n");
        let catalog = layouts(&[]);
        let store = MemoryStore::new();

        let report = SiteBuilder::new(tmp.path(), &NoHistory, &catalog, &store)
            .build()
            .unwrap();

        let page = &report.pages[0];
        assert_eq!(page.title, "Getting Started");
        assert_eq!(page.date, "");
        assert_eq!(page.author, "");
        assert_eq!(page.email, "");
    }

    #[test]
    fn test_build_clears_stale_records() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "docs/a.mdx", "# A\n");
        let catalog = layouts(&[]);
        let store = MemoryStore::new();
        store
            .put(&FrontMatterRecord {
                resource_path: "docs/removed.mdx".to_owned(),
                ..Default::default()
            })
            .unwrap();

        SiteBuilder::new(tmp.path(), &NoHistory, &catalog, &store)
            .build()
            .unwrap();

        assert_eq!(store.get("docs/removed.mdx"), None);
        assert!(store.get("docs/a.mdx").is_some());
    }

    #[test]
    fn test_broken_front_matter_aborts() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "docs/bad.mdx", "---\ntitle: Bad\n");
        let catalog = layouts(&[]);
        let store = MemoryStore::new();

        let err = SiteBuilder::new(tmp.path(), &NoHistory, &catalog, &store)
            .build()
            .unwrap_err();

        assert!(matches!(err, BuildError::FrontMatter { ref resource_path, .. } if resource_path == "docs/bad.mdx"));
    }

    #[test]
    fn test_failed_history_degrades() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "docs/a.mdx", "# A\n");
        let history = MockHistory::new().with_failure("docs/a.mdx");
        let catalog = layouts(&[]);
        let store = MemoryStore::new();

        let report = SiteBuilder::new(tmp.path(), &history, &catalog, &store)
            .build()
            .unwrap();

        assert_eq!(report.pages[0].date, "");
        assert_eq!(history.queries(), vec![Path::new("docs/a.mdx").to_path_buf()]);
    }
}
