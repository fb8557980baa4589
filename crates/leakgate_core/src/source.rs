//! The version-control collaborator interface.
//!
//! The probes never talk to git directly; they read through
//! [`RepoSource`], which the CLI implements over gix and tests implement
//! in memory. Every method is a read, and every method degrades rather
//! than fails: missing data comes back as empty collections or `None`.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Full hex identifier of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(pub String);

impl CommitId {
    /// Returns the full hex hash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a blob within the object database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobId(pub String);

/// A name/email pair from commit metadata or repository configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Configured or recorded user name.
    pub name: String,
    /// Configured or recorded email address.
    pub email: String,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// One commit from the history walk, newest first.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    /// Full commit hash.
    pub id: CommitId,
    /// Author identity recorded on the commit.
    pub author: Identity,
    /// Committer identity recorded on the commit.
    pub committer: Identity,
    /// Commit timestamp.
    pub timestamp: DateTime<Utc>,
    /// First line of the commit message.
    pub summary: String,
}

/// How a path changed within a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The path was introduced by this commit.
    Added,
    /// The path's content changed in this commit.
    Modified,
    /// The path was removed by this commit.
    Deleted,
}

/// One path touched by a commit, with its new blob when one exists.
#[derive(Debug, Clone)]
pub struct ChangedFile {
    /// Repository-relative path.
    pub path: PathBuf,
    /// What happened to the path.
    pub kind: ChangeKind,
    /// The blob holding the post-change content; `None` for deletions.
    pub blob: Option<BlobId>,
}

/// The outcome of reading one tracked file's working-tree content.
#[derive(Debug, Clone)]
pub enum FileData {
    /// Text content, ready for matching.
    Text(String),
    /// The file contains binary data and is skipped silently.
    Binary,
    /// The file exceeds the configured size limit.
    TooLarge(u64),
    /// The file could not be read.
    Unreadable,
}

/// Read-only view of a version-controlled repository.
///
/// Implementations must be safe to share across probe threads.
pub trait RepoSource: Sync {
    /// Returns the currently configured author identity, if any.
    fn current_identity(&self) -> Option<Identity>;

    /// Lists the paths tracked in the current tree.
    fn tracked_files(&self) -> Vec<PathBuf>;

    /// Reads one tracked file's working-tree content.
    fn read_file(&self, path: &Path, max_size: Option<u64>) -> FileData;

    /// Walks commits newest first, up to `limit` when given.
    fn commits(&self, limit: Option<usize>) -> Vec<CommitRecord>;

    /// Lists the paths a commit touched relative to its first parent.
    fn commit_changes(&self, id: &CommitId) -> Vec<ChangedFile>;

    /// Reads a blob's content as text. Returns `None` for binary,
    /// oversized, or unreadable blobs.
    fn read_blob(&self, blob: &BlobId, max_size: Option<u64>) -> Option<String>;

    /// Returns the repository's ignore patterns, one per line, with
    /// comments and blanks removed. `None` when no ignore configuration
    /// exists or it cannot be read.
    fn ignore_patterns(&self) -> Option<Vec<String>>;
}
