//! Git repository access backing the scan probes.

mod local;

use std::path::{Path, PathBuf};

use gix::ThreadSafeRepository;
use leakgate_core::{
    BlobId, ChangedFile, CommitId, CommitRecord, FileData, Identity, RepoSource, ScanError,
};

pub use self::local::LocalRepo;

/// Default object cache size for tree diffs (64 MB).
const DEFAULT_CACHE_SIZE: usize = 64 * 1024 * 1024;

/// Thread-safe handle to a discovered git repository.
///
/// Each probe call materialises a thread-local [`LocalRepo`], so the
/// handle can be shared freely across rayon tasks.
#[derive(Debug)]
pub struct GitSource {
    /// The underlying `gix` thread-safe repository.
    inner: ThreadSafeRepository,
    /// Root of the working tree.
    work_dir: PathBuf,
    /// Object cache size computed from the repository index.
    cache_size: usize,
}

impl GitSource {
    /// Discovers and opens a git repository at or above the given path.
    pub fn discover(path: &Path) -> Result<Self, ScanError> {
        let mut repo = gix::discover(path).map_err(|_err| ScanError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let work_dir = repo
            .workdir()
            .map_or_else(|| path.to_path_buf(), Path::to_path_buf);

        let cache_size = compute_cache_size(&repo);
        configure_cache(&mut repo, cache_size);

        Ok(Self {
            inner: repo.into_sync(),
            work_dir,
            cache_size,
        })
    }

    /// Returns the root of the working tree.
    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Creates a thread-local repository handle for use within a rayon task.
    #[must_use]
    pub fn thread_local(&self) -> LocalRepo {
        let mut repo = self.inner.to_thread_local();
        configure_cache(&mut repo, self.cache_size);
        LocalRepo { inner: repo }
    }
}

fn compute_cache_size(repo: &gix::Repository) -> usize {
    repo.index_or_empty()
        .map(|idx| repo.compute_object_cache_size_for_tree_diffs(&idx))
        .unwrap_or(DEFAULT_CACHE_SIZE)
}

fn configure_cache(repo: &mut gix::Repository, size: usize) {
    repo.object_cache_size_if_unset(size);
}

impl RepoSource for GitSource {
    fn current_identity(&self) -> Option<Identity> {
        self.thread_local().configured_identity()
    }

    fn tracked_files(&self) -> Vec<PathBuf> {
        self.thread_local().tracked_files()
    }

    fn read_file(&self, path: &Path, max_size: Option<u64>) -> FileData {
        crate::files::read_file(&self.work_dir.join(path), max_size)
    }

    fn commits(&self, limit: Option<usize>) -> Vec<CommitRecord> {
        self.thread_local().commits(limit)
    }

    fn commit_changes(&self, id: &CommitId) -> Vec<ChangedFile> {
        self.thread_local().commit_changes(id)
    }

    fn read_blob(&self, blob: &BlobId, max_size: Option<u64>) -> Option<String> {
        self.thread_local().read_blob_as_text(blob, max_size)
    }

    fn ignore_patterns(&self) -> Option<Vec<String>> {
        let content = std::fs::read_to_string(self.work_dir.join(".gitignore")).ok()?;
        Some(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from)
                .collect(),
        )
    }
}
