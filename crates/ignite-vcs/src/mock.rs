//! Mock history implementation for testing.
//!
//! Provides [`MockHistory`] for unit testing without a git repository.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::history::{CommitInfo, HistoryLookup, VcsError};

/// Mock history for testing.
///
/// Stores commits in memory. Paths without a configured commit are reported
/// as untracked; paths marked with [`MockHistory::with_failure`] return an
/// error.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use ignite_vcs::{HistoryLookup, MockHistory};
///
/// let history = MockHistory::new()
///     .with_commit("docs/intro.mdx", "Mon, 2 Mar 2020 10:00:00 +0000", "Ada", "ada@example.com");
///
/// let commit = history.first_commit(Path::new("docs/intro.mdx")).unwrap().unwrap();
/// assert_eq!(commit.author, "Ada");
/// ```
#[derive(Debug, Default)]
pub struct MockHistory {
    commits: RwLock<HashMap<PathBuf, CommitInfo>>,
    failures: RwLock<Vec<PathBuf>>,
    queries: RwLock<Vec<PathBuf>>,
}

impl MockHistory {
    /// Create an empty mock history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the creation commit for a path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_commit(
        self,
        path: impl Into<PathBuf>,
        date: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.commits.write().unwrap().insert(
            path.into(),
            CommitInfo {
                date: date.into(),
                author: author.into(),
                email: email.into(),
            },
        );
        self
    }

    /// Make lookups for a path fail.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, path: impl Into<PathBuf>) -> Self {
        self.failures.write().unwrap().push(path.into());
        self
    }

    /// Paths queried so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn queries(&self) -> Vec<PathBuf> {
        self.queries.read().unwrap().clone()
    }
}

impl HistoryLookup for MockHistory {
    fn first_commit(&self, path: &Path) -> Result<Option<CommitInfo>, VcsError> {
        self.queries.write().unwrap().push(path.to_path_buf());

        if self.failures.read().unwrap().iter().any(|p| p == path) {
            return Err(VcsError::Failed {
                status: "exit status: 128".to_owned(),
                stderr: format!("mock failure for {}", path.display()),
            });
        }

        Ok(self.commits.read().unwrap().get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_path_is_untracked() {
        let history = MockHistory::new();
        assert_eq!(history.first_commit(Path::new("a.mdx")).unwrap(), None);
    }

    #[test]
    fn test_failure_path_errors() {
        let history = MockHistory::new().with_failure("a.mdx");
        assert!(history.first_commit(Path::new("a.mdx")).is_err());
    }

    #[test]
    fn test_queries_are_recorded() {
        let history = MockHistory::new();
        let _ = history.first_commit(Path::new("a.mdx"));
        let _ = history.first_commit(Path::new("b/c.mdx"));
        assert_eq!(
            history.queries(),
            vec![PathBuf::from("a.mdx"), PathBuf::from("b/c.mdx")]
        );
    }
}
