//! Builtin detection rules and identity tables for leakgate.
//!
//! This crate holds the static data the scanning engine is configured
//! with: regex-based detection rules grouped by what they find, the
//! tables of personal email providers, sensitive filename globs, and
//! the ignore patterns every repository is expected to carry.

/// Sensitive filename globs and required ignore patterns.
pub mod filenames;
/// Personal email domains, machine hostnames, and real-name heuristics.
pub mod identity;
mod rule;
/// Builtin detection rules organised by what they detect.
pub mod rules;

pub use rule::{Category, ParseSeverityError, RuleDef, Severity, SuppressFn};
pub use rules::builtin_rules;
