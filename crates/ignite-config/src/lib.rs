//! Build configuration for ignite.
//!
//! Parses `ignite.toml` with serde and discovers it in the working directory
//! or any parent. CLI settings are applied during load via [`CliSettings`].
//!
//! ```toml
//! [site]
//! url = "https://acme.github.io/handbook"
//! name = "Handbook"
//! repo = "acme/handbook"
//! order = ["docs", "guides", "blog"]
//! html_urls = true
//!
//! [docs]
//! pages_dir = "docs/pages"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `site.url`, `site.name` and `site.repo` support `${VAR}` and
//! `${VAR:-default}`.

mod expand;
mod repo;

pub use repo::{DEFAULT_REPO_URL, repo_url};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ignite.toml";

/// Default preferred section order.
const DEFAULT_ORDER: [&str; 2] = ["docs", "blog"];

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the pages directory.
    pub pages_dir: Option<PathBuf>,
    /// Override the deployed site URL.
    pub url: Option<String>,
    /// Build for production (honours base path and HTML URLs).
    pub production: Option<bool>,
    /// Query git history for missing page metadata.
    pub git_history: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Directory configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,

    /// Resolved directories (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Production build.
    #[serde(skip)]
    pub production: bool,
    /// Whether git history is consulted.
    #[serde(skip)]
    pub git_history: bool,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// `[site]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL the site is deployed to.
    pub url: Option<String>,
    /// Project display name.
    pub name: String,
    /// Source repository URL or shorthand.
    pub repo: Option<String>,
    /// Preferred top-level section order.
    pub order: Vec<String>,
    /// Whether generated links end in `.html`.
    pub html_urls: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: "Docs".to_owned(),
            repo: None,
            order: DEFAULT_ORDER.map(str::to_owned).to_vec(),
            html_urls: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    pages_dir: Option<String>,
    public_dir: Option<String>,
    data_dir: Option<String>,
    layouts_dir: Option<String>,
}

/// Resolved directories with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Content pages.
    pub pages_dir: PathBuf,
    /// Static assets (favicons, logos).
    pub public_dir: PathBuf,
    /// Generated data (front matter store, site constants).
    pub data_dir: PathBuf,
    /// Layout templates.
    pub layouts_dir: PathBuf,
}

impl DocsConfig {
    /// Front matter store directory.
    #[must_use]
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("pages")
    }

    /// Generated site constants file.
    #[must_use]
    pub fn site_file(&self) -> PathBuf {
        self.data_dir.join("site.json")
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `ignite.toml` in the current directory and parents, falling back
    /// to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing
    /// fails, or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(pages_dir) = &settings.pages_dir {
            self.docs_resolved.pages_dir.clone_from(pages_dir);
        }
        if let Some(url) = &settings.url {
            self.site.url = Some(url.clone());
        }
        if let Some(production) = settings.production {
            self.production = production;
        }
        if let Some(git_history) = settings.git_history {
            self.git_history = git_history;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.site.url {
            let parsed = Url::parse(url).map_err(|e| {
                ConfigError::Validation(format!("site.url is not a valid URL: {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(
                    "site.url must start with http:// or https://".to_owned(),
                ));
            }
        }

        for section in &self.site.order {
            if section.is_empty() {
                return Err(ConfigError::Validation(
                    "site.order entries cannot be empty".to_owned(),
                ));
            }
            if section.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "site.order entry {section:?} must be a single path segment"
                )));
            }
        }

        Ok(())
    }

    /// Path prefix every generated link starts with.
    ///
    /// Empty in development. In production, the path of `site.url` without a
    /// trailing slash (`https://x.io/handbook/` gives `/handbook`).
    #[must_use]
    pub fn base_path(&self) -> String {
        if !self.production {
            return String::new();
        }
        self.site
            .url
            .as_deref()
            .and_then(|u| Url::parse(u).ok())
            .map(|u| u.path().trim_end_matches('/').to_owned())
            .unwrap_or_default()
    }

    /// Whether generated links end in `.html`. Only honoured in production.
    #[must_use]
    pub fn static_html_urls(&self) -> bool {
        self.production && self.site.html_urls
    }

    /// Browsable repository URL.
    #[must_use]
    pub fn repo_url(&self) -> String {
        repo_url(self.site.repo.as_deref())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig::default(),
            production: false,
            git_history: true,
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(url) = &self.site.url {
            self.site.url = Some(expand::expand_env(url, "site.url")?);
        }
        self.site.name = expand::expand_env(&self.site.name, "site.name")?;
        if let Some(repo) = &self.site.repo {
            self.site.repo = Some(expand::expand_env(repo, "site.repo")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            pages_dir: resolve(self.docs.pages_dir.as_deref(), "docs/pages"),
            public_dir: resolve(self.docs.public_dir.as_deref(), "docs/public"),
            data_dir: resolve(self.docs.data_dir.as_deref(), "docs/.mdx-data"),
            layouts_dir: resolve(self.docs.layouts_dir.as_deref(), "layouts"),
        };
    }
}
