use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when compiling a detection rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule's regular expression failed to compile.
    #[error("invalid regex in rule '{id}': {source}")]
    InvalidRegex {
        /// Identifier of the rule that failed (e.g. `"content-secret/github-pat"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Conditions that abort a scan without producing a report.
///
/// Every other failure degrades into an `Info` finding so the report
/// stays a complete, renderable artifact whenever the repository exists.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The given path is not inside a version-controlled repository.
    #[error("'{}' is not a git repository", path.display())]
    NotARepository {
        /// The path that was probed.
        path: PathBuf,
    },

    /// The caller cancelled the scan; partial results are discarded.
    #[error("scan cancelled")]
    Cancelled,

    /// A rule failed to compile.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Configuration could not be read or parsed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
