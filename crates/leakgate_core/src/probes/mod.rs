//! The four probes that inspect different views of the repository.
//!
//! Each probe reads through [`RepoSource`](crate::source::RepoSource)
//! and returns plain findings; classification and ordering happen in
//! the aggregator. Probes degrade instead of failing: anything that
//! cannot be read becomes an informational finding or is skipped.

/// Working-tree content scanning.
pub mod content;
/// Commit history scanning.
pub mod history;
/// Author identity and environment checks.
pub mod identity;
/// Ignore configuration coverage checks.
pub mod ignore_audit;
