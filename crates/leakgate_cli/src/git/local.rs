//! Thread-local git repository operations.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use gix::bstr::ByteSlice as _;
use leakgate_core::{BlobId, ChangeKind, ChangedFile, CommitId, CommitRecord, Identity};

const DEFAULT_BINARY_THRESHOLD: usize = 512 * 1024;
const BINARY_CHECK_LIMIT: usize = 8000;

/// Non-`Send` repository handle for single-threaded git operations.
#[derive(Debug)]
pub struct LocalRepo {
    pub(super) inner: gix::Repository,
}

impl LocalRepo {
    /// Returns the author identity from the repository configuration,
    /// requiring both `user.name` and `user.email` to be set.
    #[must_use]
    pub fn configured_identity(&self) -> Option<Identity> {
        let config = self.inner.config_snapshot();
        let name = config.string("user.name")?.to_string();
        let email = config.string("user.email")?.to_string();
        Some(Identity { name, email })
    }

    /// Lists the paths recorded in the index.
    #[must_use]
    pub fn tracked_files(&self) -> Vec<PathBuf> {
        let Ok(index) = self.inner.index_or_empty() else {
            return Vec::new();
        };

        index
            .entries()
            .iter()
            .map(|e| PathBuf::from(e.path(&index).to_string()))
            .collect()
    }

    /// Walks commits from HEAD newest first, up to `limit` when given.
    #[expect(
        clippy::default_trait_access,
        reason = "CommitTimeOrder is a private type in gix; cannot name it explicitly"
    )]
    #[must_use]
    pub fn commits(&self, limit: Option<usize>) -> Vec<CommitRecord> {
        let Ok(head) = self.inner.head_id() else {
            return Vec::new();
        };

        let walk = self
            .inner
            .rev_walk([head.detach()])
            .sorting(gix::revision::walk::Sorting::ByCommitTime(Default::default()));

        let Ok(infos) = walk.all() else {
            return Vec::new();
        };

        let limit = limit.unwrap_or(usize::MAX);
        let mut records = Vec::with_capacity(limit.min(1024));

        for info in infos.flatten() {
            if records.len() >= limit {
                break;
            }

            let Ok(commit) = self.inner.find_commit(info.id) else {
                continue;
            };

            records.push(Self::commit_record(&commit));
        }

        records
    }

    /// Returns the files touched by a commit, diffed against its first
    /// parent tree (or the empty tree for root commits).
    #[must_use]
    pub fn commit_changes(&self, id: &CommitId) -> Vec<ChangedFile> {
        let Ok(oid) = gix::ObjectId::from_hex(id.as_str().as_bytes()) else {
            return Vec::new();
        };

        let Ok(commit) = self.inner.find_commit(oid) else {
            return Vec::new();
        };

        let Ok(tree) = commit.tree() else {
            return Vec::new();
        };

        let parent_tree = self.first_parent_tree(&commit);
        let from_tree = parent_tree
            .as_ref()
            .map_or_else(|| self.inner.empty_tree(), Clone::clone);

        Self::diff_trees(&from_tree, &tree)
    }

    /// Reads a blob as UTF-8 text, returning `None` if it exceeds
    /// `max_bytes` or appears to be binary.
    #[must_use]
    pub fn read_blob_as_text(&self, blob: &BlobId, max_bytes: Option<u64>) -> Option<String> {
        let oid = gix::ObjectId::from_hex(blob.0.as_bytes()).ok()?;
        let blob = self.inner.find_blob(oid).ok()?;

        #[expect(
            clippy::cast_possible_truncation,
            reason = "max_bytes values are practical file sizes well within usize"
        )]
        if let Some(max) = max_bytes
            && blob.data.len() > max as usize
        {
            return None;
        }

        if self.is_binary_blob(&blob.data) {
            return None;
        }

        String::from_utf8(blob.data.clone()).ok()
    }

    fn commit_record(commit: &gix::Commit<'_>) -> CommitRecord {
        let author = commit.author().map_or_else(
            |_| Identity {
                name: "unknown".to_string(),
                email: "unknown".to_string(),
            },
            |sig| Identity {
                name: sig.name.to_string(),
                email: sig.email.to_string(),
            },
        );

        let committer = commit.committer().map_or_else(
            |_| author.clone(),
            |sig| Identity {
                name: sig.name.to_string(),
                email: sig.email.to_string(),
            },
        );

        let timestamp = commit
            .time()
            .ok()
            .and_then(|t| DateTime::<Utc>::from_timestamp(t.seconds, 0))
            .unwrap_or_default();

        CommitRecord {
            id: CommitId(commit.id().to_string()),
            author,
            committer,
            timestamp,
            summary: extract_first_line(commit),
        }
    }

    fn is_binary_blob(&self, data: &[u8]) -> bool {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "threshold is a git config value capped at practical sizes"
        )]
        let threshold = self
            .inner
            .big_file_threshold()
            .ok()
            .map_or(DEFAULT_BINARY_THRESHOLD, |t| t as usize);

        let check_len = data.len().min(threshold.min(BINARY_CHECK_LIMIT));
        data[..check_len].contains(&0)
    }

    fn first_parent_tree(&self, commit: &gix::Commit<'_>) -> Option<gix::Tree<'_>> {
        commit
            .parent_ids()
            .next()
            .and_then(|pid| self.inner.find_commit(pid).ok())
            .and_then(|pc| pc.tree().ok())
    }

    fn diff_trees(from: &gix::Tree<'_>, to: &gix::Tree<'_>) -> Vec<ChangedFile> {
        let Ok(mut changes) = from.changes() else {
            return Vec::new();
        };

        let mut entries = Vec::new();

        let _ = changes.for_each_to_obtain_tree(to, |change| {
            use gix::object::tree::diff::Change;

            match change {
                Change::Addition { location, id, .. } => {
                    entries.push(ChangedFile {
                        path: PathBuf::from(location.to_str_lossy().into_owned()),
                        kind: ChangeKind::Added,
                        blob: Some(BlobId(id.detach().to_string())),
                    });
                }
                Change::Modification { location, id, .. }
                | Change::Rewrite { location, id, .. } => {
                    entries.push(ChangedFile {
                        path: PathBuf::from(location.to_str_lossy().into_owned()),
                        kind: ChangeKind::Modified,
                        blob: Some(BlobId(id.detach().to_string())),
                    });
                }
                Change::Deletion { location, .. } => {
                    entries.push(ChangedFile {
                        path: PathBuf::from(location.to_str_lossy().into_owned()),
                        kind: ChangeKind::Deleted,
                        blob: None,
                    });
                }
            }

            Ok::<_, std::convert::Infallible>(std::ops::ControlFlow::Continue(()))
        });

        entries
    }
}

fn extract_first_line(commit: &gix::Commit<'_>) -> String {
    commit
        .message_raw()
        .map(|m| {
            m.lines()
                .next()
                .map(|line| String::from_utf8_lossy(line).into_owned())
                .unwrap_or_default()
        })
        .unwrap_or_default()
}
