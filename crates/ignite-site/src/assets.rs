//! Favicon and logo discovery in the public directory.

use std::path::Path;

/// Logo used when the public directory has none.
///
/// Served by the presentation layer from its own bundled assets.
pub const DEFAULT_LOGO: &str = "/_ignite/logo.svg";

/// Branding assets, as paths relative to the public directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteAssets {
    /// Favicon, empty when absent.
    pub favicon: String,
    /// Dark-mode favicon, empty when absent.
    pub favicon_dark: String,
    /// Logo, [`DEFAULT_LOGO`] when absent.
    pub logo: String,
    /// Dark-mode logo, [`DEFAULT_LOGO`] when absent.
    pub logo_dark: String,
}

impl SiteAssets {
    /// Find branding assets anywhere under `public_dir`.
    ///
    /// The first match in path order wins for each asset.
    #[must_use]
    pub fn discover(public_dir: &Path) -> Self {
        let find = |stem: &str| first_match(public_dir, stem);
        let default_logo = || DEFAULT_LOGO.to_owned();

        Self {
            favicon: find("favicon").unwrap_or_default(),
            favicon_dark: find("favicon-dark").unwrap_or_default(),
            logo: find("logo").unwrap_or_else(default_logo),
            logo_dark: find("logo-dark").unwrap_or_else(default_logo),
        }
    }
}

/// First file matching `**/{stem}.*`, relative to `root`.
fn first_match(root: &Path, stem: &str) -> Option<String> {
    let pattern = format!(
        "{}/**/{stem}.*",
        glob::Pattern::escape(&root.to_string_lossy())
    );

    glob::glob(&pattern)
        .ok()?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .find_map(|p| {
            let rel = p.strip_prefix(root).ok()?;
            Some(
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/"),
            )
        })
}
