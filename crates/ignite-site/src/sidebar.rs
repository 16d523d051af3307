//! Per-section sidebar overrides.
//!
//! A section directory may contain a `_sidebar` file that replaces the
//! generated link list. Candidates are tried in [`SidebarFormat::ALL`] order
//! and the first one that loads wins. A candidate that is absent or malformed
//! simply yields nothing; no error ever reaches the caller.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use ignite_meta::resource::SIDEBAR_FILE_STEM;
use ignite_meta::split_front_matter;
use serde::Serialize;

/// File formats a sidebar override can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarFormat {
    /// MDX markup.
    Mdx,
    /// Plain script module.
    Js,
}

impl SidebarFormat {
    /// Candidate formats, richest first.
    pub const ALL: [Self; 2] = [Self::Mdx, Self::Js];

    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mdx => "mdx",
            Self::Js => "js",
        }
    }

    /// Override file name (`_sidebar.mdx`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{SIDEBAR_FILE_STEM}.{}", self.extension())
    }
}

impl fmt::Display for SidebarFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A loaded sidebar override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarOverride {
    /// Section the override belongs to.
    pub section: String,
    /// Format it was loaded from.
    pub format: SidebarFormat,
    /// Definition source, rendered in place of the generated links.
    pub source: String,
}

impl SidebarOverride {
    /// Location published with the active state (`/<section>`).
    #[must_use]
    pub fn location(&self) -> String {
        format!("/{}", self.section)
    }
}

/// One way of loading a sidebar override.
pub trait SidebarLoader {
    /// Load the override for `section` in `format`.
    ///
    /// Returns `None` when the candidate does not exist or cannot be used.
    fn load(&self, section: &str, format: SidebarFormat) -> Option<SidebarOverride>;
}

/// Loads overrides from `<pages_dir>/<section>/_sidebar.<ext>`.
#[derive(Clone, Debug)]
pub struct FileSidebarLoader {
    pages_dir: PathBuf,
}

impl FileSidebarLoader {
    /// Create a loader rooted at the pages directory.
    #[must_use]
    pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
        }
    }
}

impl SidebarLoader for FileSidebarLoader {
    fn load(&self, section: &str, format: SidebarFormat) -> Option<SidebarOverride> {
        if section.is_empty() || section.contains(['/', '\\']) || section == ".." {
            return None;
        }

        let path = self.pages_dir.join(section).join(format.file_name());
        let source = fs::read_to_string(&path).ok()?;

        let usable = match format {
            SidebarFormat::Mdx => split_front_matter(&source).is_ok(),
            SidebarFormat::Js => !source.trim().is_empty(),
        };
        if !usable {
            tracing::debug!("ignoring malformed sidebar override {}", path.display());
            return None;
        }

        Some(SidebarOverride {
            section: section.to_owned(),
            format,
            source,
        })
    }
}

/// Finds the sidebar override for a section.
pub struct SidebarOverrideLocator<'a> {
    loader: &'a dyn SidebarLoader,
}

impl<'a> SidebarOverrideLocator<'a> {
    /// Create a locator using `loader` for each candidate.
    #[must_use]
    pub fn new(loader: &'a dyn SidebarLoader) -> Self {
        Self { loader }
    }

    /// First candidate that loads, or `None` to use generated links.
    #[must_use]
    pub fn locate(&self, section: &str) -> Option<SidebarOverride> {
        SidebarFormat::ALL
            .into_iter()
            .find_map(|format| self.loader.load(section, format))
    }
}
