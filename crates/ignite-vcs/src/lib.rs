//! Version-control history lookups for ignite.
//!
//! Page metadata falls back to the repository history when front matter does
//! not declare a `date` or `author`. This crate hides the history query behind
//! the [`HistoryLookup`] trait so the extraction logic can be tested without a
//! real repository.
//!
//! # Implementations
//!
//! - [`GitHistory`]: shells out to the `git` binary
//! - [`NoHistory`]: history disabled, every lookup is empty
//! - [`MockHistory`]: canned answers for tests (behind the `mock` feature)
//!
//! # Soft failure
//!
//! Lookups return [`VcsError`] so callers can tell "untracked" from "broken",
//! but the build never fails on history. [`file_history`] is the single place
//! where errors collapse into an empty [`FileHistory`].
//!
//! ```
//! use std::path::Path;
//! use ignite_vcs::{NoHistory, file_history};
//!
//! let history = file_history(&NoHistory, Path::new("docs/intro.mdx"));
//! assert_eq!(history.date, "");
//! assert_eq!(history.author, "");
//! ```

mod git;
mod history;
#[cfg(feature = "mock")]
mod mock;

pub use git::GitHistory;
pub use history::{CommitInfo, FileHistory, HistoryLookup, NoHistory, VcsError, file_history};
#[cfg(feature = "mock")]
pub use mock::MockHistory;
