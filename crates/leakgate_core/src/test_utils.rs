//! Shared helpers for unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use regex::Regex;

use leakgate_rules::{Category, Severity, SuppressFn};

use crate::rule::Rule;
use crate::source::{
    BlobId, ChangeKind, ChangedFile, CommitId, CommitRecord, FileData, Identity, RepoSource,
};

/// Builds a High-severity content-secret rule for matcher tests.
pub(crate) fn make_rule(id: &str, regex: &str, keywords: &[&str]) -> Rule {
    Rule {
        id: id.into(),
        category: Category::ContentSecret,
        name: id.into(),
        description: format!("Test rule {id}.").into(),
        severity: Severity::High,
        regex: Regex::new(regex).unwrap(),
        keywords: keywords.iter().map(|&k| k.into()).collect(),
        suppress: None,
        remediation: Category::ContentSecret.remediation().into(),
    }
}

pub(crate) fn make_rule_with_suppress(id: &str, regex: &str, suppress: SuppressFn) -> Rule {
    let mut rule = make_rule(id, regex, &[]);
    rule.suppress = Some(suppress);
    rule
}

/// In-memory repository view for probe tests.
#[derive(Debug, Default)]
pub(crate) struct FakeRepo {
    identity: Option<Identity>,
    files: Vec<(PathBuf, FileData)>,
    commits: Vec<CommitRecord>,
    changes: HashMap<String, Vec<ChangedFile>>,
    blobs: HashMap<String, String>,
    ignore: Option<Vec<String>>,
}

impl FakeRepo {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_identity(mut self, name: &str, email: &str) -> Self {
        self.identity = Some(Identity {
            name: name.into(),
            email: email.into(),
        });
        self
    }

    pub(crate) fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((PathBuf::from(path), FileData::Text(content.into())));
        self
    }

    pub(crate) fn with_binary_file(mut self, path: &str) -> Self {
        self.files.push((PathBuf::from(path), FileData::Binary));
        self
    }

    pub(crate) fn with_unreadable_file(mut self, path: &str) -> Self {
        self.files.push((PathBuf::from(path), FileData::Unreadable));
        self
    }

    /// Adds a commit; commits are returned in insertion order, so insert
    /// newest first.
    pub(crate) fn with_commit(
        mut self,
        id: &str,
        author_name: &str,
        author_email: &str,
        changes: Vec<ChangedFile>,
    ) -> Self {
        let author = Identity {
            name: author_name.into(),
            email: author_email.into(),
        };
        self.commits.push(CommitRecord {
            id: CommitId(id.into()),
            author: author.clone(),
            committer: author,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            summary: format!("commit {id}"),
        });
        self.changes.insert(id.into(), changes);
        self
    }

    pub(crate) fn with_blob(mut self, id: &str, content: &str) -> Self {
        self.blobs.insert(id.into(), content.into());
        self
    }

    pub(crate) fn with_ignore(mut self, lines: &[&str]) -> Self {
        self.ignore = Some(lines.iter().map(|&l| l.to_string()).collect());
        self
    }
}

pub(crate) fn added(path: &str, blob: &str) -> ChangedFile {
    ChangedFile {
        path: PathBuf::from(path),
        kind: ChangeKind::Added,
        blob: Some(BlobId(blob.into())),
    }
}

pub(crate) fn deleted(path: &str) -> ChangedFile {
    ChangedFile {
        path: PathBuf::from(path),
        kind: ChangeKind::Deleted,
        blob: None,
    }
}

impl RepoSource for FakeRepo {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }

    fn tracked_files(&self) -> Vec<PathBuf> {
        self.files.iter().map(|(path, _)| path.clone()).collect()
    }

    fn read_file(&self, path: &Path, max_size: Option<u64>) -> FileData {
        let Some((_, data)) = self.files.iter().find(|(p, _)| p == path) else {
            return FileData::Unreadable;
        };
        if let FileData::Text(content) = data
            && let Some(max) = max_size
            && content.len() as u64 > max
        {
            return FileData::TooLarge(content.len() as u64);
        }
        data.clone()
    }

    fn commits(&self, limit: Option<usize>) -> Vec<CommitRecord> {
        let take = limit.unwrap_or(self.commits.len());
        self.commits.iter().take(take).cloned().collect()
    }

    fn commit_changes(&self, id: &CommitId) -> Vec<ChangedFile> {
        self.changes.get(id.as_str()).cloned().unwrap_or_default()
    }

    fn read_blob(&self, blob: &BlobId, max_size: Option<u64>) -> Option<String> {
        let content = self.blobs.get(&blob.0)?;
        if let Some(max) = max_size
            && content.len() as u64 > max
        {
            return None;
        }
        Some(content.clone())
    }

    fn ignore_patterns(&self) -> Option<Vec<String>> {
        self.ignore.clone()
    }
}
