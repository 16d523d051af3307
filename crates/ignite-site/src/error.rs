use std::path::PathBuf;

use ignite_meta::FrontMatterError;
use ignite_store::StoreError;

/// Error that aborts a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Filesystem error.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A page's front matter could not be parsed.
    #[error("invalid front matter in {resource_path}: {source}")]
    FrontMatter {
        /// Page with the broken front matter.
        resource_path: String,
        /// Parse failure.
        #[source]
        source: FrontMatterError,
    },
    /// Front matter store write failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Site constants could not be (de)serialized.
    #[error("invalid site constants: {0}")]
    Json(#[from] serde_json::Error),
}
