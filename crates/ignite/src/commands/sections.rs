//! `ignite sections` command implementation.

use std::path::PathBuf;

use clap::Args;
use ignite_config::Config;
use ignite_sections::top_level_sections;
use ignite_site::PageScanner;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    /// Path to configuration file (default: auto-discover ignite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SectionsArgs {
    /// Execute the sections command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let pages = PageScanner::new(&config.docs_resolved.pages_dir).scan();
        if pages.is_empty() {
            output.warning(&format!(
                "No pages found in {}",
                config.docs_resolved.pages_dir.display()
            ));
        }

        for section in top_level_sections(pages.iter().map(String::as_str), &config.site.order) {
            output.data(&section);
        }
        Ok(())
    }
}
