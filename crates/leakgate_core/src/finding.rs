//! Types representing detected leaks and their locations.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use leakgate_rules::{Category, Severity};

/// Where a finding was detected.
///
/// Purely descriptive: a path or commit reference, never a handle into
/// the repository. The total order puts file locations before commit
/// locations so working-tree findings render first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location {
    /// A tracked file in the working tree, with an optional line.
    File {
        /// Repository-relative path.
        path: PathBuf,
        /// One-based line number, absent for whole-file findings.
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    /// A historical commit, optionally narrowed to one path within it.
    Commit {
        /// Full hex commit hash.
        id: String,
        /// Path within the commit tree, if the finding is file-specific.
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },
}

impl Location {
    /// Creates a whole-file location.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            line: None,
        }
    }

    /// Creates a file location pinned to a one-based line.
    #[must_use]
    pub fn line(path: impl Into<PathBuf>, line: u32) -> Self {
        Self::File {
            path: path.into(),
            line: Some(line),
        }
    }

    /// Creates a commit-level location.
    #[must_use]
    pub fn commit(id: impl Into<String>) -> Self {
        Self::Commit {
            id: id.into(),
            path: None,
        }
    }

    /// Creates a location for one path within a commit.
    #[must_use]
    pub fn commit_path(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Commit {
            id: id.into(),
            path: Some(path.into()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::File { .. } => 0,
            Self::Commit { .. } => 1,
        }
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::File { path: a, line: al },
                Self::File { path: b, line: bl },
            ) => a.cmp(b).then_with(|| option_order(al.as_ref(), bl.as_ref())),
            (
                Self::Commit { id: a, path: ap },
                Self::Commit { id: b, path: bp },
            ) => a.cmp(b).then_with(|| option_order(ap.as_ref(), bp.as_ref())),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Absent values sort before present ones, so whole-file findings lead.
fn option_order<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(y),
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, line: Some(line) } => write!(f, "{}:{line}", path.display()),
            Self::File { path, line: None } => write!(f, "{}", path.display()),
            Self::Commit { id, path: Some(path) } => {
                write!(f, "{}:{}", short_hash(id), path.display())
            }
            Self::Commit { id, path: None } => write!(f, "{}", short_hash(id)),
        }
    }
}

const SHORT_HASH_LENGTH: usize = 7;

fn short_hash(id: &str) -> &str {
    id.get(..SHORT_HASH_LENGTH).unwrap_or(id)
}

/// One detected privacy or secret issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// What kind of leak this is.
    pub category: Category,
    /// How serious the leak is.
    pub severity: Severity,
    /// Where it was detected.
    pub location: Location,
    /// Short human-readable description.
    pub summary: String,
    /// Extended explanation; populated only in verbose mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Suggested fix; populated only in verbose mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl Finding {
    /// Creates a finding without detail or remediation.
    #[must_use]
    pub fn new(category: Category, severity: Severity, location: Location, summary: impl Into<String>) -> Self {
        Self {
            category,
            severity,
            location,
            summary: summary.into(),
            detail: None,
            remediation: None,
        }
    }

    /// Attaches verbose-mode detail text.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches verbose-mode remediation text.
    #[must_use]
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_locations_sort_before_commit_locations() {
        let file = Location::file("zzz.txt");
        let commit = Location::commit("aaaaaaa");
        assert!(file < commit);
    }

    #[test]
    fn file_locations_sort_by_path_then_line() {
        let a = Location::line("a.txt", 5);
        let b = Location::line("b.txt", 1);
        assert!(a < b);

        let early = Location::line("a.txt", 1);
        let late = Location::line("a.txt", 9);
        assert!(early < late);
    }

    #[test]
    fn whole_file_location_sorts_before_line_locations() {
        let whole = Location::file("a.txt");
        let lined = Location::line("a.txt", 1);
        assert!(whole < lined);
    }

    #[test]
    fn commit_locations_sort_by_id_then_path() {
        let a = Location::commit("aaa");
        let b = Location::commit("bbb");
        assert!(a < b);

        let bare = Location::commit("aaa");
        let pathed = Location::commit_path("aaa", ".env");
        assert!(bare < pathed);
    }

    #[test]
    fn display_includes_line_number() {
        assert_eq!(Location::line("src/main.rs", 42).to_string(), "src/main.rs:42");
        assert_eq!(Location::file("README.md").to_string(), "README.md");
    }

    #[test]
    fn display_shortens_commit_hashes() {
        let loc = Location::commit("0123456789abcdef0123456789abcdef01234567");
        assert_eq!(loc.to_string(), "0123456");
    }

    #[test]
    fn display_handles_short_ids() {
        assert_eq!(Location::commit("abc").to_string(), "abc");
    }

    #[test]
    fn locations_serialise_with_kind_tag() {
        let file = serde_json::to_value(Location::line("src/main.rs", 7)).unwrap();
        assert_eq!(file["kind"], "file");
        assert_eq!(file["path"], "src/main.rs");
        assert_eq!(file["line"], 7);

        let commit = serde_json::to_value(Location::commit("abc123")).unwrap();
        assert_eq!(commit["kind"], "commit");
        assert_eq!(commit["id"], "abc123");
        assert!(commit.get("path").is_none());
    }

    #[test]
    fn terse_findings_omit_advice_fields_in_json() {
        let finding = Finding::new(
            Category::ContentSecret,
            Severity::High,
            Location::line("a.txt", 1),
            "token detected",
        );
        let value = serde_json::to_value(&finding).unwrap();
        assert_eq!(value["severity"], "high");
        assert_eq!(value["category"], "content-secret");
        assert!(value.get("detail").is_none());
        assert!(value.get("remediation").is_none());
    }

    #[test]
    fn finding_builder_attaches_advice() {
        let finding = Finding::new(
            Category::IgnoreGap,
            Severity::Medium,
            Location::file(".gitignore"),
            "missing pattern",
        )
        .with_detail("the details")
        .with_remediation("the fix");

        assert_eq!(finding.detail.as_deref(), Some("the details"));
        assert_eq!(finding.remediation.as_deref(), Some("the fix"));
    }
}
