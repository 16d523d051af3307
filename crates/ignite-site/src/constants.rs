//! Build-time constants for the presentation layer.

use std::path::{Path, PathBuf};

use ignite_config::Config;
use ignite_sections::{pages_in_section, top_level_sections};
use serde::{Deserialize, Serialize};

use crate::assets::SiteAssets;
use crate::scanner::PageScanner;

/// Section holding blog posts.
const BLOG_SECTION: &str = "blog";

/// Everything the presentation layer needs to know about the site.
///
/// Built once per build and written next to the front matter records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConstants {
    pub project_name: String,
    pub base_path: String,
    pub static_html_urls: bool,
    pub favicon: String,
    pub favicon_dark: String,
    pub project_logo: String,
    pub project_logo_dark: String,
    pub repo_url: String,
    pub pages_dir: PathBuf,
    /// Every content file, sorted.
    pub pages: Vec<String>,
    /// Content files under `blog/`.
    pub blog_posts: Vec<String>,
    pub data_dir: PathBuf,
    pub has_homepage: bool,
    /// Sections in display order.
    pub top_level_sections: Vec<String>,
    /// Deployed site URL, if configured.
    pub docs_url: Option<String>,
}

impl SiteConstants {
    /// Collect constants for the configured site.
    #[must_use]
    pub fn collect(config: &Config) -> Self {
        let docs = &config.docs_resolved;
        let scanner = PageScanner::new(&docs.pages_dir);
        let pages = scanner.scan();
        let assets = SiteAssets::discover(&docs.public_dir);

        Self {
            project_name: config.site.name.clone(),
            base_path: config.base_path(),
            static_html_urls: config.static_html_urls(),
            favicon: assets.favicon,
            favicon_dark: assets.favicon_dark,
            project_logo: assets.logo,
            project_logo_dark: assets.logo_dark,
            repo_url: config.repo_url(),
            pages_dir: docs.pages_dir.clone(),
            blog_posts: blog_posts(&pages),
            top_level_sections: top_level_sections(
                pages.iter().map(String::as_str),
                &config.site.order,
            ),
            pages,
            data_dir: docs.data_dir.clone(),
            has_homepage: scanner.has_homepage(),
            docs_url: config.site.url.clone(),
        }
    }

    /// Load constants written by an earlier build.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, crate::BuildError> {
        let bytes = std::fs::read(path).map_err(|source| crate::BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write constants as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), crate::BuildError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| crate::BuildError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, json).map_err(|source| crate::BuildError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn blog_posts(pages: &[String]) -> Vec<String> {
    pages_in_section(pages.iter().map(String::as_str), BLOG_SECTION)
        .into_iter()
        .map(str::to_owned)
        .collect()
}
