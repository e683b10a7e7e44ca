//! Extract features from a Git repository's history.
//!
//! The analyzer shells out to `git` and turns its plumbing output into
//! plain data: the commit list with per-commit change magnitudes, an
//! extension histogram, contributor totals, a monthly activity timeline,
//! and the branch list. Everything downstream (the sonifier and the
//! visual renderer) consumes these records and never touches the
//! repository itself.

/// Unix-timestamp to civil year/month bucketing.
pub mod calendar;
/// Pure parsers for captured `git` output.
pub mod parse;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use tracing::{debug, warn};

/// Per-file change stats within one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    pub name: String,
    pub additions: u32,
    pub deletions: u32,
}

/// One commit: a timestamped unit of activity.
///
/// `additions` and `deletions` are the summed line counts across the
/// commit's text files; binary files report no counts and contribute
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub email: String,
    /// Author time, seconds since the unix epoch.
    pub timestamp: i64,
    pub subject: String,
    pub additions: u32,
    pub deletions: u32,
    pub files_changed: Vec<FileChange>,
}

impl Commit {
    /// Total change magnitude: lines added plus lines removed.
    #[inline]
    pub fn activity(&self) -> u64 {
        u64::from(self.additions) + u64::from(self.deletions)
    }
}

/// Commit totals for one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub commits: u32,
}

/// Everything the renderers need, extracted in one pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepoFeatures {
    pub commits: Vec<Commit>,
    /// File count per extension (".rs", ".toml", "no-extension", ...).
    pub file_stats: BTreeMap<String, u32>,
    pub contributors: Vec<Contributor>,
    /// Commit count per civil month, keyed "YYYY-MM" in ascending order.
    pub timeline: BTreeMap<String, u32>,
    pub branches: Vec<String>,
}

/// The one unrecoverable analyzer failure: the path is not a repository.
///
/// Individual `git` invocations that fail later (shallow clones, odd
/// configs) degrade to empty feature lists instead of erroring, so a
/// partially unreadable history still renders.
#[derive(Debug, Clone)]
pub enum AnalyzeError {
    NotARepository(PathBuf),
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotARepository(path) => {
                write!(f, "not a git repository: {}", path.display())
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}

/// Reads history out of a repository on disk via the `git` binary.
#[derive(Debug)]
pub struct RepoAnalyzer {
    repo_path: PathBuf,
}

impl RepoAnalyzer {
    /// Open a repository, verifying that `.git` exists under `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AnalyzeError> {
        let path = path.as_ref();
        let repo_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !repo_path.join(".git").exists() {
            return Err(AnalyzeError::NotARepository(repo_path));
        }
        Ok(Self { repo_path })
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Extract all features in one pass over the repository.
    pub fn extract_features(&self) -> RepoFeatures {
        let commits = self.commits();
        let timeline = timeline_of(&commits);
        debug!(
            commits = commits.len(),
            months = timeline.len(),
            "extracted repository history"
        );

        RepoFeatures {
            file_stats: self.file_stats(),
            contributors: self.contributors(),
            branches: self.branches(),
            timeline,
            commits,
        }
    }

    /// Commit history, newest first, merge commits skipped.
    pub fn commits(&self) -> Vec<Commit> {
        self.run_git(&[
            "log",
            "--pretty=format:%H|%an|%ae|%at|%s",
            "--numstat",
            "--no-merges",
        ])
        .map(|log| parse::parse_log(&log))
        .unwrap_or_default()
    }

    /// Tracked-file count per extension.
    pub fn file_stats(&self) -> BTreeMap<String, u32> {
        self.run_git(&["ls-files"])
            .map(|files| parse::extension_histogram(&files))
            .unwrap_or_default()
    }

    /// Commit totals per author, merge commits skipped.
    pub fn contributors(&self) -> Vec<Contributor> {
        self.run_git(&["shortlog", "-sne", "--no-merges", "HEAD"])
            .map(|log| parse::parse_shortlog(&log))
            .unwrap_or_default()
    }

    /// All local and remote branch names.
    pub fn branches(&self) -> Vec<String> {
        self.run_git(&["branch", "-a"])
            .map(|text| parse::parse_branches(&text))
            .unwrap_or_default()
    }

    /// Run one git subcommand, returning trimmed stdout on success.
    ///
    /// Failures are logged and mapped to `None`; callers substitute empty
    /// features rather than propagating.
    fn run_git(&self, args: &[&str]) -> Option<String> {
        let result = Command::new("git")
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .output();

        match result {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            Ok(output) => {
                warn!(?args, status = %output.status, "git command failed");
                None
            }
            Err(err) => {
                warn!(?args, %err, "could not run git");
                None
            }
        }
    }
}

/// Bucket commits into a per-month activity timeline.
pub fn timeline_of(commits: &[Commit]) -> BTreeMap<String, u32> {
    let mut timeline = BTreeMap::new();
    for commit in commits {
        *timeline
            .entry(calendar::month_key(commit.timestamp))
            .or_insert(0) += 1;
    }
    timeline
}
