//! File-backed store.
//!
//! [`FileStore`] writes each record as a JSON document whose location mirrors
//! the page's resource path:
//!
//! ```text
//! {root}/
//! +-- VERSION              # tool version that wrote the records
//! +-- index.json           # index.mdx
//! +-- docs/
//!     +-- intro.json       # docs/intro.mdx
//! ```
//!
//! On construction the `VERSION` file is checked. If it is missing or differs
//! from the current version, the directory is wiped so records written by an
//! incompatible build are never read. A store opened with
//! [`FileStore::open_read_only`] never touches the disk: on mismatch it reads
//! as empty and rejects writes.

use std::fs;
use std::path::{Component, Path, PathBuf};

use ignite_meta::resource::strip_content_extension;

use crate::{FrontMatterRecord, FrontMatterStore, StoreError};

/// [`FrontMatterStore`] rooted at a directory on disk.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    version: String,
    read_only: bool,
    /// Records on disk were written by another version.
    stale: bool,
}

impl FileStore {
    /// Open a store at `root`, validating the store version.
    ///
    /// Errors during validation are logged but never fatal.
    #[must_use]
    pub fn open(root: PathBuf, version: &str) -> Self {
        validate_version(&root, version);
        Self {
            root,
            version: version.to_owned(),
            read_only: false,
            stale: false,
        }
    }

    /// Open an existing store for reading only.
    ///
    /// Nothing on disk is created or removed. Records from another version
    /// are ignored.
    #[must_use]
    pub fn open_read_only(root: PathBuf, version: &str) -> Self {
        let stale = match fs::read_to_string(root.join("VERSION")) {
            Ok(stored) if stored == version => false,
            Ok(stored) => {
                tracing::warn!(
                    "front matter store version mismatch (stored={stored}, current={version}), ignoring records"
                );
                true
            }
            Err(_) => {
                tracing::warn!("no front matter store found at {}", root.display());
                true
            }
        };
        Self {
            root,
            version: version.to_owned(),
            read_only: true,
            stale,
        }
    }

    fn ensure_writable(&self) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly(self.root.clone()));
        }
        Ok(())
    }

    /// File holding the record for a resource path.
    fn record_path(&self, resource_path: &str) -> Result<PathBuf, StoreError> {
        let key = Path::new(resource_path);
        let is_safe = !resource_path.is_empty()
            && key
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !is_safe {
            return Err(StoreError::InvalidKey(resource_path.to_owned()));
        }

        Ok(self
            .root
            .join(format!("{}.json", strip_content_extension(resource_path))))
    }

    fn read_record(path: &Path) -> Option<FrontMatterRecord> {
        let bytes = fs::read(path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("skipping unreadable record {}: {e}", path.display());
                None
            }
        }
    }
}

impl FrontMatterStore for FileStore {
    fn put(&self, record: &FrontMatterRecord) -> Result<(), StoreError> {
        self.ensure_writable()?;
        let path = self.record_path(&record.resource_path)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let bytes = serde_json::to_vec(record)?;
        fs::write(&path, bytes).map_err(|source| StoreError::Io { path, source })
    }

    fn get(&self, resource_path: &str) -> Option<FrontMatterRecord> {
        if self.stale {
            return None;
        }
        let path = self.record_path(resource_path).ok()?;
        Self::read_record(&path)
    }

    fn all(&self) -> Vec<FrontMatterRecord> {
        if self.stale {
            return Vec::new();
        }
        let pattern = format!(
            "{}/**/*.json",
            glob::Pattern::escape(&self.root.to_string_lossy())
        );
        let Ok(paths) = glob::glob(&pattern) else {
            return Vec::new();
        };

        let mut records: Vec<FrontMatterRecord> = paths
            .filter_map(Result::ok)
            .filter_map(|p| Self::read_record(&p))
            .collect();
        records.sort_by(|a, b| a.resource_path.cmp(&b.resource_path));
        records
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.ensure_writable()?;
        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
        }
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;
        let version_file = self.root.join("VERSION");
        fs::write(&version_file, &self.version).map_err(|source| StoreError::Io {
            path: version_file,
            source,
        })
    }
}

/// Validate the store version, wiping the directory on mismatch.
fn validate_version(root: &Path, version: &str) {
    let version_file = root.join("VERSION");

    match fs::read_to_string(&version_file) {
        Ok(stored) if stored == version => {
            tracing::debug!("front matter store version matches: {version}");
            return;
        }
        Ok(stored) => {
            tracing::info!(
                "front matter store version mismatch (stored={stored}, current={version}), wiping"
            );
        }
        Err(_) => {
            tracing::info!("no front matter store VERSION file found, initializing");
        }
    }

    if root.exists()
        && let Err(e) = fs::remove_dir_all(root)
    {
        tracing::warn!("failed to remove front matter store: {e}");
    }
    if let Err(e) = fs::create_dir_all(root) {
        tracing::warn!("failed to create front matter store: {e}");
        return;
    }
    if let Err(e) = fs::write(&version_file, version) {
        tracing::warn!("failed to write front matter store VERSION file: {e}");
    }
}
