//! `ignite sidebar` command implementation.
//!
//! Reads the front matter records written by `ignite build` and prints the
//! mounted sidebar as JSON.

use std::path::PathBuf;

use clap::Args;
use ignite_config::Config;
use ignite_sections::section_of;
use ignite_site::{
    FileSidebarLoader, LinkFormat, Location, NavLink, Sidebar, SidebarOverrideLocator,
};
use ignite_store::{FileStore, FrontMatterRecord, FrontMatterStore};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Path to configuration file (default: auto-discover ignite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Section to show.
    #[arg(short, long)]
    section: String,

    /// Path being viewed, e.g. `/docs/setup`.
    #[arg(short, long)]
    location: String,

    /// Resolve links as in a production build.
    #[arg(long)]
    production: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the result cannot be
    /// serialized.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let settings = ignite_config::CliSettings {
            production: self.production.then_some(true),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let docs = &config.docs_resolved;
        tracing::debug!(
            section = %self.section,
            location = %self.location,
            base_path = %config.base_path(),
            "Resolving sidebar"
        );

        let store = FileStore::open_read_only(docs.store_dir(), version);
        let links = section_links(&store.all(), &self.section);
        if links.is_empty() {
            output.warning(&format!(
                "No pages recorded for section {:?}; run `ignite build` first",
                self.section
            ));
        }

        let format = LinkFormat::new(config.base_path(), config.static_html_urls());
        let loader = FileSidebarLoader::new(&docs.pages_dir);
        let locator = SidebarOverrideLocator::new(&loader);
        let location = Location::from_path(self.location);

        let sidebar = Sidebar::mount(&self.section, &links, &location, &locator, &format);
        output.data(&serde_json::to_string_pretty(&sidebar)?);
        Ok(())
    }
}

/// Links for the pages of `section`, in resource path order.
fn section_links(records: &[FrontMatterRecord], section: &str) -> Vec<NavLink> {
    records
        .iter()
        .filter(|r| section_of(&r.resource_path) == Some(section))
        .map(|r| NavLink {
            resource_path: r.resource_path.clone(),
            title: r.title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(path: &str) -> FrontMatterRecord {
        FrontMatterRecord {
            resource_path: path.to_owned(),
            title: path.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_section_links_filters_by_section() {
        let records = [
            record("blog/launch.mdx"),
            record("docs/intro.mdx"),
            record("docs/setup.mdx"),
            record("index.mdx"),
        ];

        let links: Vec<_> = section_links(&records, "docs")
            .into_iter()
            .map(|l| l.resource_path)
            .collect();

        assert_eq!(links, vec!["docs/intro.mdx", "docs/setup.mdx"]);
    }
}
