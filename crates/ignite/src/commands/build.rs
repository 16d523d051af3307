//! `ignite build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use ignite_config::{CliSettings, Config};
use ignite_meta::LayoutDir;
use ignite_site::{SiteBuilder, SiteConstants};
use ignite_store::FileStore;
use ignite_vcs::{GitHistory, HistoryLookup, NoHistory};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover ignite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pages directory (overrides config).
    #[arg(short, long)]
    pages_dir: Option<PathBuf>,

    /// Deployed site URL (overrides config).
    #[arg(long, env = "IGNITE_URL")]
    url: Option<String>,

    /// Build for production (base path and HTML URLs take effect).
    #[arg(long)]
    production: bool,

    /// Skip git history lookups for missing dates and authors.
    #[arg(long)]
    no_git: bool,

    /// Enable verbose output (per-page history failures and timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a page cannot be processed,
    /// or the output cannot be written.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let docs = &config.docs_resolved;
        tracing::debug!(
            config_path = ?config.config_path,
            production = config.production,
            git_history = config.git_history,
            "Loaded configuration"
        );

        if !docs.pages_dir.is_dir() {
            return Err(CliError::Validation(format!(
                "Pages directory not found: {}",
                docs.pages_dir.display()
            )));
        }

        ensure_data_dir(&docs.data_dir)?;

        output.info(&format!("Pages directory: {}", docs.pages_dir.display()));
        output.info(&format!("Data directory: {}", docs.data_dir.display()));
        if config.production {
            output.info(&format!("Base path: {:?}", config.base_path()));
        }

        let history: Box<dyn HistoryLookup> = if config.git_history {
            Box::new(GitHistory::new(&docs.pages_dir))
        } else {
            output.warning("Git history: disabled");
            Box::new(NoHistory)
        };
        let layouts = LayoutDir::scan(&docs.layouts_dir);
        let store = FileStore::open(docs.store_dir(), version);

        let report =
            SiteBuilder::new(&docs.pages_dir, history.as_ref(), &layouts, &store).build()?;

        let constants = SiteConstants::collect(&config);
        constants.write(&docs.site_file())?;

        output.success(&format!(
            "Processed {} pages ({} sidebar overrides)",
            report.pages.len(),
            report.sidebar_overrides.len()
        ));
        output.highlight(&format!(
            "Sections: {}",
            constants.top_level_sections.join(", ")
        ));
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            pages_dir: self.pages_dir.clone(),
            url: self.url.clone(),
            production: self.production.then_some(true),
            git_history: self.no_git.then_some(false),
        }
    }
}

/// Ensure the data directory exists with a `.gitignore`.
fn ensure_data_dir(data_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(data_dir)?;

    let gitignore_path = data_dir.join(".gitignore");
    if !gitignore_path.exists() {
        let _ = std::fs::write(&gitignore_path, "# Automatically created by ignite\n*\n");
    }

    Ok(())
}
