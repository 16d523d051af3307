//! Active sidebar link resolution.
//!
//! Given the location being viewed and a section's links, pick the link the
//! location belongs to:
//!
//! - the location path is normalized: base path, surrounding `/`, a
//!   trailing `.html` and a trailing `index` segment are removed
//! - a link's key is its resource path without `.mdx` and without a trailing
//!   `index` segment
//! - a link matches when its key equals the location or is a `/`-bounded
//!   prefix of it (`docs/api` matches `docs/api/errors`, not `docs/apis`)
//! - the longest key wins; ties go to the earlier link
//!
//! When nothing matches, the resolved state has no pathname and no link is
//! marked active.

use ignite_meta::resource::strip_content_extension;
use serde::{Deserialize, Serialize};

use crate::links::{LinkFormat, route_without_index};
use crate::sidebar::SidebarOverride;

/// The location being viewed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Path component, e.g. `/handbook/docs/setup`.
    pub pathname: String,
    /// Full URL.
    pub href: String,
}

impl Location {
    /// Location with the same pathname and href.
    #[must_use]
    pub fn from_path(pathname: impl Into<String>) -> Self {
        let pathname = pathname.into();
        Self {
            href: pathname.clone(),
            pathname,
        }
    }
}

/// A navigable page in a section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Resource path of the page.
    pub resource_path: String,
    /// Display title.
    pub title: String,
}

/// Which link is active, computed once per sidebar mount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLinkState {
    /// Href of the active link, or `None` when no link matched.
    pub pathname: Option<String>,
    /// Resource path of the active link.
    ///
    /// Distinct pages can share an href (`docs/setup.mdx` and
    /// `docs/setup/index.mdx`), so entries are matched on this instead.
    #[serde(skip)]
    pub resource_path: Option<String>,
    /// Full URL of the location.
    pub href: String,
    /// `/<section>` when a sidebar override is in use, empty otherwise.
    pub sidebar_file_location: String,
}

impl ActiveLinkState {
    /// Whether `link` is the active one.
    #[must_use]
    pub fn is_active(&self, link: &NavLink) -> bool {
        self.resource_path.as_deref() == Some(link.resource_path.as_str())
    }
}

/// Resolves the [`ActiveLinkState`] for a sidebar.
pub struct SidebarActiveResolver<'a> {
    links: &'a LinkFormat,
}

impl<'a> SidebarActiveResolver<'a> {
    /// Create a resolver producing hrefs with `links`.
    #[must_use]
    pub fn new(links: &'a LinkFormat) -> Self {
        Self { links }
    }

    /// Resolve the active state for `location`.
    #[must_use]
    pub fn resolve(
        &self,
        location: &Location,
        links: &[NavLink],
        sidebar_override: Option<&SidebarOverride>,
    ) -> ActiveLinkState {
        let active = self.find_active(&location.pathname, links);
        if active.is_none() {
            tracing::warn!(
                "no sidebar link matches {}, leaving sidebar without an active link",
                location.pathname
            );
        }

        ActiveLinkState {
            pathname: active.map(|link| self.links.href(&link.resource_path)),
            resource_path: active.map(|link| link.resource_path.clone()),
            href: location.href.clone(),
            sidebar_file_location: sidebar_override
                .map(SidebarOverride::location)
                .unwrap_or_default(),
        }
    }

    /// The link `pathname` belongs to.
    #[must_use]
    pub fn find_active<'l>(&self, pathname: &str, links: &'l [NavLink]) -> Option<&'l NavLink> {
        let location = self.normalize(pathname);

        let mut best: Option<(usize, &NavLink)> = None;
        for link in links {
            let key = link_key(&link.resource_path);
            if !is_match(key, location) {
                continue;
            }
            if best.is_none_or(|(len, _)| key.len() > len) {
                best = Some((key.len(), link));
            }
        }
        best.map(|(_, link)| link)
    }

    fn normalize<'p>(&self, pathname: &'p str) -> &'p str {
        let base = self.links.base_path.as_str();
        let path = match pathname.strip_prefix(base) {
            Some(rest) if !base.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
            _ => pathname,
        };
        let path = path.trim_matches('/');
        route_without_index(path.strip_suffix(".html").unwrap_or(path))
    }
}

fn link_key(resource_path: &str) -> &str {
    route_without_index(strip_content_extension(resource_path))
}

/// `key` equals `location` or is a `/`-bounded prefix of it.
///
/// The root page's empty key only matches the root location.
fn is_match(key: &str, location: &str) -> bool {
    if key.is_empty() {
        return location.is_empty();
    }
    location
        .strip_prefix(key)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
