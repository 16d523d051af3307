//! Site structure derivation for ignite.
//!
//! Build time:
//!
//! - [`SiteBuilder`] extracts metadata for every page, resolves its layout and
//!   writes the records to a front matter store
//! - [`SiteConstants`] collects everything else the presentation layer needs
//!   (section order, page lists, branding assets, base path)
//!
//! Render time:
//!
//! - [`SidebarOverrideLocator`] finds a section's custom sidebar, if any
//! - [`SidebarActiveResolver`] picks the link for the current location
//! - [`Sidebar::mount`] ties both together and hands the resulting
//!   [`ActiveLinkState`] to every [`SidebarItem`]
//!
//! # Example
//!
//! ```
//! use ignite_site::{
//!     FileSidebarLoader, LinkFormat, Location, NavLink, Sidebar, SidebarOverrideLocator,
//! };
//!
//! let loader = FileSidebarLoader::new("docs/pages");
//! let locator = SidebarOverrideLocator::new(&loader);
//! let links = [NavLink {
//!     resource_path: "docs/setup.mdx".to_owned(),
//!     title: "Setup".to_owned(),
//! }];
//!
//! let sidebar = Sidebar::mount(
//!     "docs",
//!     &links,
//!     &Location::from_path("/docs/setup"),
//!     &locator,
//!     &LinkFormat::default(),
//! );
//! assert!(sidebar.items()[0].is_active);
//! ```

mod active;
mod assets;
mod builder;
mod constants;
mod error;
mod links;
mod navigation;
mod scanner;
mod sidebar;

pub use active::{ActiveLinkState, Location, NavLink, SidebarActiveResolver};
pub use assets::{DEFAULT_LOGO, SiteAssets};
pub use builder::{BuildReport, SiteBuilder};
pub use constants::SiteConstants;
pub use error::BuildError;
pub use links::{LinkFormat, format_path};
pub use navigation::{Sidebar, SidebarBody, SidebarItem};
pub use scanner::PageScanner;
pub use sidebar::{
    FileSidebarLoader, SidebarFormat, SidebarLoader, SidebarOverride, SidebarOverrideLocator,
};
