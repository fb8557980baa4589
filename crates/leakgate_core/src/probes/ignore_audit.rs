//! Ignore configuration coverage checks.
//!
//! Verifies that the repository's ignore configuration excludes the
//! filename patterns secrets usually live under. Missing configuration
//! entirely is a single gap; otherwise each uncovered required pattern
//! is reported on its own.

use globset::Glob;

use leakgate_rules::filenames::REQUIRED_IGNORE_PATTERNS;
use leakgate_rules::{Category, Severity};

use crate::finding::{Finding, Location};
use crate::source::RepoSource;

const IGNORE_FILE: &str = ".gitignore";

pub(crate) fn run<S: RepoSource>(source: &S) -> Vec<Finding> {
    let Some(lines) = source.ignore_patterns() else {
        return vec![
            Finding::new(
                Category::IgnoreGap,
                Severity::Medium,
                Location::file(IGNORE_FILE),
                "no ignore configuration found",
            )
            .with_detail("sensitive files can be committed by accident without one")
            .with_remediation(Category::IgnoreGap.remediation()),
        ];
    };

    REQUIRED_IGNORE_PATTERNS
        .iter()
        .filter(|&&required| !is_covered(&lines, required))
        .map(|&required| {
            Finding::new(
                Category::IgnoreGap,
                Severity::Medium,
                Location::file(IGNORE_FILE),
                format!("ignore configuration does not cover '{required}'"),
            )
            .with_remediation(Category::IgnoreGap.remediation())
        })
        .collect()
}

/// A required pattern is covered when some ignore line equals it or
/// matches it as a filename glob. Negated lines re-include paths and
/// never count as coverage.
fn is_covered(lines: &[String], required: &str) -> bool {
    lines.iter().any(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            return false;
        }
        let line = line.strip_prefix('/').unwrap_or(line);
        let line = line.strip_suffix('/').unwrap_or(line);

        line == required
            || Glob::new(line).is_ok_and(|glob| glob.compile_matcher().is_match(required))
    })
}
