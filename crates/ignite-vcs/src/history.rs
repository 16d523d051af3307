//! History lookup trait and result types.

use std::path::Path;

/// The commit that introduced a file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitInfo {
    /// Author date as reported by the backend (RFC 2822 for git).
    pub date: String,
    /// Author name.
    pub author: String,
    /// Author email.
    pub email: String,
}

/// History fields attached to a page.
///
/// Every field is always present; an empty string means the history was not
/// available for this file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileHistory {
    /// Creation date of the file.
    pub date: String,
    /// Name of the earliest author.
    pub author: String,
    /// Email of the earliest author.
    pub email: String,
}

impl From<CommitInfo> for FileHistory {
    fn from(commit: CommitInfo) -> Self {
        Self {
            date: commit.date,
            author: commit.author,
            email: commit.email,
        }
    }
}

/// Error returned by a history backend.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// The backend binary could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The query ran but exited unsuccessfully (e.g. not a repository).
    #[error("history query exited with {status}: {stderr}")]
    Failed {
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },
    /// The query produced output that could not be interpreted.
    #[error("unexpected history output: {0}")]
    InvalidOutput(String),
}

/// Source of file creation history.
///
/// Paths are relative to the repository root the implementation was created
/// with.
pub trait HistoryLookup: Send + Sync {
    /// Find the earliest commit touching `path`.
    ///
    /// Returns `Ok(None)` when the file exists but has no history (untracked).
    fn first_commit(&self, path: &Path) -> Result<Option<CommitInfo>, VcsError>;
}

/// [`HistoryLookup`] that never finds anything.
///
/// Used when history is disabled for a build.
pub struct NoHistory;

impl HistoryLookup for NoHistory {
    fn first_commit(&self, _path: &Path) -> Result<Option<CommitInfo>, VcsError> {
        Ok(None)
    }
}

/// Look up the creation history of `path`, degrading to empty fields.
///
/// Errors are logged at debug level and never propagated.
pub fn file_history(lookup: &dyn HistoryLookup, path: &Path) -> FileHistory {
    match lookup.first_commit(path) {
        Ok(Some(commit)) => commit.into(),
        Ok(None) => {
            tracing::debug!("no history for {}", path.display());
            FileHistory::default()
        }
        Err(e) => {
            tracing::debug!("history lookup failed for {}: {e}", path.display());
            FileHistory::default()
        }
    }
}
