//! Common re-exports for internal use.

pub use leakgate_rules::{Category, Severity};

pub use crate::error::{RuleError, ScanError};
pub use crate::finding::{Finding, Location};
pub use crate::report::Report;
pub use crate::rule::{Rule, RuleSet};
pub use crate::source::RepoSource;
