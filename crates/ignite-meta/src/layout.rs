//! Layout resolution.
//!
//! Every page is wrapped by a named layout template. The layout is chosen by a
//! fixed priority chain, first match wins:
//!
//! 1. `layout` declared in front matter
//! 2. the site root index uses [`HOME_LAYOUT`]
//! 3. sidebar override files get no layout at all
//! 4. a template named after the page's top-level section
//! 5. [`DEFAULT_LAYOUT`]

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use ignite_sections::section_of;

use crate::metadata::{ExtractedMetadata, PageMetadata};
use crate::resource::{is_root_index, is_sidebar_override};

/// Layout for the site root index page.
pub const HOME_LAYOUT: &str = "home-page";

/// Layout used when nothing more specific applies.
pub const DEFAULT_LAYOUT: &str = "docs";

/// Set of available layout templates.
pub trait LayoutCatalog {
    /// True if a template with this identifier exists.
    fn contains(&self, layout: &str) -> bool;
}

impl LayoutCatalog for BTreeSet<String> {
    fn contains(&self, layout: &str) -> bool {
        BTreeSet::contains(self, layout)
    }
}

impl LayoutCatalog for HashSet<String> {
    fn contains(&self, layout: &str) -> bool {
        HashSet::contains(self, layout)
    }
}

/// Layout templates found in a directory, identified by file stem.
///
/// `layouts/docs.js` and `layouts/blog.tsx` provide `docs` and `blog`. The
/// directory is read once; lookups never touch the filesystem.
#[derive(Clone, Debug, Default)]
pub struct LayoutDir {
    names: BTreeSet<String>,
}

impl LayoutDir {
    /// Read the template names from `dir`.
    ///
    /// A missing or unreadable directory yields an empty catalog.
    #[must_use]
    pub fn scan(dir: &Path) -> Self {
        let Ok(entries) = fs::read_dir(dir) else {
            tracing::debug!("no layouts directory at {}", dir.display());
            return Self::default();
        };

        let names = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|e| {
                let path = e.path();
                let stem = path.file_stem()?.to_string_lossy().into_owned();
                (!stem.starts_with('.')).then_some(stem)
            })
            .collect();

        Self { names }
    }

    /// Template identifiers, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl LayoutCatalog for LayoutDir {
    fn contains(&self, layout: &str) -> bool {
        self.names.contains(layout)
    }
}

/// Result of layout resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutDecision {
    /// Use this layout.
    Layout(String),
    /// The file is not a page and needs no layout.
    Skip,
}

/// Picks the layout for each page.
///
/// Resolution is deterministic and performs a single catalog lookup at most.
pub struct LayoutResolver<'a> {
    catalog: &'a dyn LayoutCatalog,
}

impl<'a> LayoutResolver<'a> {
    /// Create a resolver backed by `catalog`.
    #[must_use]
    pub fn new(catalog: &'a dyn LayoutCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the layout for a resource path and its declared layout.
    #[must_use]
    pub fn resolve(&self, resource_path: &str, declared: Option<&str>) -> LayoutDecision {
        if let Some(layout) = declared.filter(|l| !l.is_empty()) {
            return LayoutDecision::Layout(layout.to_owned());
        }
        if is_root_index(resource_path) {
            return LayoutDecision::Layout(HOME_LAYOUT.to_owned());
        }
        if is_sidebar_override(resource_path) {
            return LayoutDecision::Skip;
        }
        match section_of(resource_path) {
            Some(section) if self.catalog.contains(section) => {
                LayoutDecision::Layout(section.to_owned())
            }
            _ => LayoutDecision::Layout(DEFAULT_LAYOUT.to_owned()),
        }
    }

    /// Complete extracted metadata with its resolved layout.
    ///
    /// Returns `None` for files that need no layout.
    #[must_use]
    pub fn complete(&self, page: ExtractedMetadata) -> Option<PageMetadata> {
        match self.resolve(&page.resource_path, page.layout.as_deref()) {
            LayoutDecision::Layout(layout) => Some(page.with_layout(layout)),
            LayoutDecision::Skip => None,
        }
    }
}
