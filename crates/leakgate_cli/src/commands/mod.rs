//! CLI command handlers.

/// Shell completion script generation.
pub mod completions;
/// Rule listing and inspection.
pub mod rules;
/// Repository privacy scanning.
pub mod scan;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
