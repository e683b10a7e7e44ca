//! Pure parsers for captured `git` output.
//!
//! Keeping these free of process handling means the whole extraction
//! pipeline is testable from canned text, without a repository on disk.

use std::collections::BTreeMap;
use std::path::Path;

use super::{Commit, Contributor, FileChange};

/// Parse `git log --pretty=format:%H|%an|%ae|%at|%s --numstat` output.
///
/// Header lines carry the commit metadata; the numstat lines that follow
/// accumulate additions/deletions until the next header. Binary files
/// report `-` counts and are skipped.
pub fn parse_log(log: &str) -> Vec<Commit> {
    let mut commits = Vec::new();
    let mut current: Option<Commit> = None;

    for line in log.lines() {
        if let Some(commit) = parse_header(line) {
            if let Some(done) = current.replace(commit) {
                commits.push(done);
            }
        } else if let (Some(commit), Some(change)) = (current.as_mut(), parse_numstat(line)) {
            commit.additions += change.additions;
            commit.deletions += change.deletions;
            commit.files_changed.push(change);
        }
    }

    if let Some(done) = current {
        commits.push(done);
    }
    commits
}

/// A header line is five `|`-separated fields with a numeric timestamp.
fn parse_header(line: &str) -> Option<Commit> {
    let mut fields = line.splitn(5, '|');
    let hash = fields.next()?;
    let author = fields.next()?;
    let email = fields.next()?;
    let timestamp = fields.next()?.parse::<i64>().ok()?;
    let subject = fields.next()?;

    Some(Commit {
        hash: hash.to_string(),
        author: author.to_string(),
        email: email.to_string(),
        timestamp,
        subject: subject.to_string(),
        additions: 0,
        deletions: 0,
        files_changed: Vec::new(),
    })
}

/// A numstat line is `added<TAB>deleted<TAB>path`; `-` marks binary files.
fn parse_numstat(line: &str) -> Option<FileChange> {
    let mut fields = line.split('\t');
    let additions = fields.next()?.parse::<u32>().ok()?;
    let deletions = fields.next()?.parse::<u32>().ok()?;
    let name = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    Some(FileChange {
        name: name.to_string(),
        additions,
        deletions,
    })
}

/// Parse `git shortlog -sne` output: `  <count>\t<name> <email>` per line.
pub fn parse_shortlog(log: &str) -> Vec<Contributor> {
    log.lines()
        .filter_map(|line| {
            let (count, author) = line.trim().split_once('\t')?;
            let commits = count.trim().parse::<u32>().ok()?;
            let (name, email) = split_author(author);
            Some(Contributor {
                name,
                email,
                commits,
            })
        })
        .collect()
}

/// Split `Author Name <email>` into its parts; the email may be absent.
fn split_author(author: &str) -> (String, String) {
    match (author.find('<'), author.rfind('>')) {
        (Some(open), Some(close)) if open < close => (
            author[..open].trim().to_string(),
            author[open + 1..close].to_string(),
        ),
        _ => (author.trim().to_string(), String::new()),
    }
}

/// Parse `git branch -a` output into clean branch names.
pub fn parse_branches(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches(['*', ' ']).to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Count tracked files per extension, keyed ".ext" with a `no-extension`
/// bucket for bare names.
pub fn extension_histogram(files: &str) -> BTreeMap<String, u32> {
    let mut stats = BTreeMap::new();
    for file in files.lines().filter(|f| !f.is_empty()) {
        let key = match Path::new(file).extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => "no-extension".to_string(),
        };
        *stats.entry(key).or_insert(0) += 1;
    }
    stats
}
