//! Sidebar model for a section.

use serde::Serialize;

use crate::active::{ActiveLinkState, Location, NavLink, SidebarActiveResolver};
use crate::links::LinkFormat;
use crate::sidebar::{SidebarOverride, SidebarOverrideLocator};

/// A rendered sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    /// Link text.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Whether this entry is the page being viewed.
    pub is_active: bool,
}

impl SidebarItem {
    /// Build an entry, marking it active against the mount's state.
    #[must_use]
    pub fn new(link: &NavLink, active: &ActiveLinkState, format: &LinkFormat) -> Self {
        Self {
            title: link.title.clone(),
            href: format.href(&link.resource_path),
            is_active: active.is_active(link),
        }
    }
}

/// What the sidebar shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SidebarBody {
    /// Generated entries, one per link in input order.
    Links {
        /// Entries.
        items: Vec<SidebarItem>,
    },
    /// The section's override definition.
    Custom {
        /// Loaded override.
        definition: SidebarOverride,
    },
}

/// A mounted sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    /// Section shown.
    pub section: String,
    /// Active state shared by every entry.
    pub active: ActiveLinkState,
    /// Sidebar contents.
    pub body: SidebarBody,
}

impl Sidebar {
    /// Mount the sidebar for `section` at `location`.
    ///
    /// The override lookup and active-link resolution run once here; every
    /// entry is then built against the same [`ActiveLinkState`].
    #[must_use]
    pub fn mount(
        section: &str,
        links: &[NavLink],
        location: &Location,
        locator: &SidebarOverrideLocator<'_>,
        format: &LinkFormat,
    ) -> Self {
        let sidebar_override = locator.locate(section);
        let active =
            SidebarActiveResolver::new(format).resolve(location, links, sidebar_override.as_ref());

        let body = match sidebar_override {
            Some(definition) => SidebarBody::Custom { definition },
            None => SidebarBody::Links {
                items: links
                    .iter()
                    .map(|link| SidebarItem::new(link, &active, format))
                    .collect(),
            },
        };

        Self {
            section: section.to_owned(),
            active,
            body,
        }
    }

    /// Generated entries, empty when an override is shown.
    #[must_use]
    pub fn items(&self) -> &[SidebarItem] {
        match &self.body {
            SidebarBody::Links { items } => items,
            SidebarBody::Custom { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::sidebar::FileSidebarLoader;

    fn link(path: &str, title: &str) -> NavLink {
        NavLink {
            resource_path: path.to_owned(),
            title: title.to_owned(),
        }
    }

    #[test]
    fn test_mount_generated_links() {
        let tmp = TempDir::new().unwrap();
        let loader = FileSidebarLoader::new(tmp.path());
        let locator = SidebarOverrideLocator::new(&loader);
        let format = LinkFormat::new("/handbook", false);
        let links = [
            link("docs/index.mdx", "Overview"),
            link("docs/setup.mdx", "Setup"),
        ];

        let sidebar = Sidebar::mount(
            "docs",
            &links,
            &Location::from_path("/handbook/docs/setup"),
            &locator,
            &format,
        );

        assert_eq!(sidebar.active.sidebar_file_location, "");
        assert_eq!(
            sidebar.items(),
            &[
                SidebarItem {
                    title: "Overview".to_owned(),
                    href: "/handbook/docs".to_owned(),
                    is_active: false,
                },
                SidebarItem {
                    title: "Setup".to_owned(),
                    href: "/handbook/docs/setup".to_owned(),
                    is_active: true,
                },
            ]
        );
    }

    #[test]
    fn test_exactly_one_active_entry() {
        let tmp = TempDir::new().unwrap();
        let loader = FileSidebarLoader::new(tmp.path());
        let locator = SidebarOverrideLocator::new(&loader);
        let format = LinkFormat::default();
        let links = [
            link("docs/api.mdx", "API"),
            link("docs/api/errors.mdx", "Errors"),
            link("docs/intro.mdx", "Intro"),
        ];

        let sidebar = Sidebar::mount(
            "docs",
            &links,
            &Location::from_path("/docs/api/errors"),
            &locator,
            &format,
        );

        let active: Vec<_> = sidebar
            .items()
            .iter()
            .filter(|i| i.is_active)
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(active, vec!["Errors"]);
    }

    #[test]
    fn test_shared_href_marks_one_entry() {
        let tmp = TempDir::new().unwrap();
        let loader = FileSidebarLoader::new(tmp.path());
        let locator = SidebarOverrideLocator::new(&loader);
        let format = LinkFormat::default();
        let links = [
            link("docs/setup.mdx", "Setup"),
            link("docs/setup/index.mdx", "Setup overview"),
        ];

        let sidebar = Sidebar::mount(
            "docs",
            &links,
            &Location::from_path("/docs/setup"),
            &locator,
            &format,
        );

        let items = sidebar.items();
        assert_eq!(items[0].href, items[1].href);
        let active: Vec<_> = items
            .iter()
            .filter(|i| i.is_active)
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(active, vec!["Setup"]);
    }

    #[test]
    fn test_mount_with_override() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("docs/_sidebar.mdx"), "- [Setup](/docs/setup)\n").unwrap();
        let loader = FileSidebarLoader::new(tmp.path());
        let locator = SidebarOverrideLocator::new(&loader);
        let format = LinkFormat::default();

        let sidebar = Sidebar::mount(
            "docs",
            &[link("docs/setup.mdx", "Setup")],
            &Location::from_path("/docs/setup"),
            &locator,
            &format,
        );

        assert_eq!(sidebar.active.sidebar_file_location, "/docs");
        assert_eq!(sidebar.active.pathname.as_deref(), Some("/docs/setup"));
        assert!(sidebar.items().is_empty());
        assert!(matches!(sidebar.body, SidebarBody::Custom { .. }));
    }

    #[test]
    fn test_mount_without_match_marks_nothing() {
        let tmp = TempDir::new().unwrap();
        let loader = FileSidebarLoader::new(tmp.path());
        let locator = SidebarOverrideLocator::new(&loader);
        let format = LinkFormat::default();

        let sidebar = Sidebar::mount(
            "docs",
            &[link("docs/setup.mdx", "Setup")],
            &Location::from_path("/blog"),
            &locator,
            &format,
        );

        assert_eq!(sidebar.active.pathname, None);
        assert!(sidebar.items().iter().all(|i| !i.is_active));
    }
}
