//! Persisted page front matter for ignite.
//!
//! The build writes one [`FrontMatterRecord`] per page; the presentation layer
//! reads them back to build navigation. [`FrontMatterStore`] decouples both
//! sides from where the records live.
//!
//! # Implementations
//!
//! - [`FileStore`]: one JSON document per page, mirroring the page's path
//! - [`MemoryStore`]: in-memory map, for tests and dry runs
//!
//! # Example
//!
//! ```
//! use ignite_store::{FrontMatterRecord, FrontMatterStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let record = FrontMatterRecord {
//!     resource_path: "docs/intro.mdx".to_owned(),
//!     title: "Intro".to_owned(),
//!     ..Default::default()
//! };
//! store.put(&record).unwrap();
//! assert_eq!(store.get("docs/intro.mdx"), Some(record));
//! ```

mod file;
mod memory;
mod record;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::FrontMatterRecord;

use std::path::PathBuf;

/// Error returned by store writes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem error.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Resource path cannot be used as a storage key.
    #[error("invalid resource path: {0}")]
    InvalidKey(String),
    /// Write attempted on a store opened for reading.
    #[error("store at {} is read-only", .0.display())]
    ReadOnly(PathBuf),
}

/// Keyed storage for page front matter records.
///
/// Records are keyed by `resource_path`. Reads never fail: a missing or
/// unreadable record is simply absent.
pub trait FrontMatterStore: Send + Sync {
    /// Store a record, replacing any record with the same resource path.
    fn put(&self, record: &FrontMatterRecord) -> Result<(), StoreError>;

    /// Retrieve the record for a resource path.
    fn get(&self, resource_path: &str) -> Option<FrontMatterRecord>;

    /// All stored records, sorted by resource path.
    fn all(&self) -> Vec<FrontMatterRecord>;

    /// Remove every record.
    fn clear(&self) -> Result<(), StoreError>;
}
