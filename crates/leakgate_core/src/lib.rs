//! Core detection and classification engine for leakgate.
//!
//! This crate turns a read-only view of a version-controlled repository
//! into a [`Report`] of privacy and secret findings. It is designed to
//! be embedded in CLIs and CI pipelines.
//!
//! # Main Types
//!
//! - [`scan`] - Runs all probes over a repository view and aggregates a report
//! - [`RuleSet`] - Compiled detection rules with keyword pre-filtering
//! - [`RepoSource`] - The version-control backend the probes read from
//! - [`Finding`] / [`Report`] - The detection result model
//! - [`Config`] - User configuration loaded from `.leakgate.toml`
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that
//! library consumers can match on:
//!
//! - [`RuleError`] - Rule compilation failures
//! - [`ConfigError`] - Configuration loading/parsing failures
//! - [`ScanError`] - Scan-aborting conditions (missing repository, cancellation)
//!
//! The CLI crate (`leakgate_cli`) uses `anyhow` for error propagation.

/// Binary content detection heuristics.
pub mod binary;
/// User configuration loaded from `.leakgate.toml`.
pub mod config;
/// Error types for rule compilation, configuration, and scanning.
pub mod error;
/// Types representing detected leaks and their locations.
pub mod finding;
/// The line-level matcher that applies a rule set to text.
pub mod matcher;
/// Common re-exports for internal use.
pub mod prelude;
/// The four probes that inspect different views of the repository.
pub mod probes;
/// Report aggregation and ordering.
pub mod report;
/// Compiled rules and the keyword-indexed rule set.
pub mod rule;
/// Scan orchestration, options, and cancellation.
pub mod scan;
/// The version-control collaborator interface.
pub mod source;
#[cfg(test)]
pub(crate) mod test_utils;
/// Text utilities for line boundary detection.
pub mod text;

pub use config::{Config, ConfigError, CustomRule};
pub use error::{RuleError, ScanError};
pub use finding::{Finding, Location};
pub use leakgate_rules::{Category, Severity};
pub use matcher::{Matcher, RuleMatch};
pub use report::{Report, aggregate};
pub use rule::{Rule, RuleSet};
pub use scan::{CancelFlag, Environment, ScanOptions, scan};
pub use source::{BlobId, ChangeKind, ChangedFile, CommitId, CommitRecord, FileData, Identity, RepoSource};

/// Default filename for leakgate configuration.
pub const CONFIG_FILENAME: &str = ".leakgate.toml";
