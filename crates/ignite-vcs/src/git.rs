//! History lookups backed by the `git` command line.
//!
//! Uses the system binary rather than a library so that whatever repository
//! layout the user's git understands (worktrees, submodules, shallow clones)
//! works the same way here.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::history::{CommitInfo, HistoryLookup, VcsError};

/// Field separator in the `--format` string (ASCII unit separator).
const FIELD_SEP: char = '\u{1f}';

/// Log format: author date (RFC 2822), author name, author email.
const LOG_FORMAT: &str = "--format=%aD%x1f%an%x1f%ae";

/// [`HistoryLookup`] that runs `git log` in a repository directory.
#[derive(Clone, Debug)]
pub struct GitHistory {
    repo_dir: PathBuf,
    program: PathBuf,
}

impl GitHistory {
    /// Create a lookup for paths relative to `repo_dir`.
    #[must_use]
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            program: PathBuf::from("git"),
        }
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }
}

impl HistoryLookup for GitHistory {
    fn first_commit(&self, path: &Path) -> Result<Option<CommitInfo>, VcsError> {
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.repo_dir)
            .args(["log", LOG_FORMAT, "--"])
            .arg(path)
            .output()
            .map_err(|source| VcsError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(VcsError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        parse_log_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Pick the oldest entry from `git log` output.
///
/// `git log` lists newest first, so the creation commit is the last line.
fn parse_log_output(stdout: &str) -> Result<Option<CommitInfo>, VcsError> {
    let Some(line) = stdout.lines().rev().find(|l| !l.trim().is_empty()) else {
        return Ok(None);
    };

    let mut fields = line.split(FIELD_SEP);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(date), Some(author), Some(email)) => Ok(Some(CommitInfo {
            date: date.trim().to_owned(),
            author: author.trim().to_owned(),
            email: email.trim().to_owned(),
        })),
        _ => Err(VcsError::InvalidOutput(line.to_owned())),
    }
}
