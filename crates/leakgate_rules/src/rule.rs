//! Rule definition types for privacy and secret detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid severity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    invalid_value: Box<str>,
}

impl ParseSeverityError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid severity '{}': expected one of 'info', 'low', 'medium', 'high'",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseSeverityError {}

/// How serious a detected leak is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - degradations, truncations, and skipped files.
    Info,
    /// Low risk - the leak only survives in history or is weakly identifying.
    Low,
    /// Medium risk - identifying information that should not be published.
    Medium,
    /// High risk - live credentials or directly identifying personal data.
    High,
}

impl Severity {
    /// All severity levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Low, Self::Medium, Self::High];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseSeverityError::new(s)),
        }
    }
}

/// What kind of leak a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Commit author names and emails that identify a person or machine.
    AuthorIdentity,
    /// Live credentials in tracked content.
    ContentSecret,
    /// Personally identifiable information in tracked content.
    ContentPii,
    /// Secrets reachable through past commits.
    HistorySecret,
    /// Required exclusion patterns missing from the ignore configuration.
    IgnoreGap,
    /// Filesystem paths that embed a username or hostname.
    PathLeak,
}

impl Category {
    /// Returns the human-readable display name for this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AuthorIdentity => "Author Identity",
            Self::ContentSecret => "Credentials in Content",
            Self::ContentPii => "Personal Data in Content",
            Self::HistorySecret => "Secrets in History",
            Self::IgnoreGap => "Ignore Configuration Gaps",
            Self::PathLeak => "Path & Host Leaks",
        }
    }

    /// Returns the recommended remediation for findings in this category.
    #[must_use]
    pub const fn remediation(self) -> &'static str {
        match self {
            Self::AuthorIdentity => {
                "Set a work or noreply identity with git config user.name/user.email, then rewrite the offending commits."
            }
            Self::ContentSecret => "Revoke the credential immediately, rotate it, and remove it from the file.",
            Self::ContentPii => "Remove the personal data or replace it with a placeholder before publishing.",
            Self::HistorySecret => {
                "Rewrite history with git filter-repo to drop the file, then rotate any credential it held."
            }
            Self::IgnoreGap => "Add the missing pattern to .gitignore before committing sensitive files.",
            Self::PathLeak => "Replace absolute paths with relative ones or environment variables.",
        }
    }

    /// Returns the lowercase identifier used in rule IDs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorIdentity => "author-identity",
            Self::ContentSecret => "content-secret",
            Self::ContentPii => "content-pii",
            Self::HistorySecret => "history-secret",
            Self::IgnoreGap => "ignore-gap",
            Self::PathLeak => "path-leak",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A predicate that rejects a regex match as a false positive.
///
/// Receives the full line and the matched text; returning `true`
/// suppresses the match.
pub type SuppressFn = fn(line: &str, matched: &str) -> bool;

/// A single rule definition for detecting one kind of leak.
#[derive(Debug, Clone)]
pub struct RuleDef {
    /// Unique identifier in `"category/name"` format (e.g. `"content-secret/github-pat"`).
    pub id: &'static str,
    /// The category findings from this rule carry.
    pub category: Category,
    /// Short human-readable name (e.g. `"GitHub Personal Access Token"`).
    pub name: &'static str,
    /// Longer description of what this rule detects.
    pub description: &'static str,
    /// Severity assigned to every match; never computed from context.
    pub severity: Severity,
    /// The regular expression used to match leaking text.
    pub regex: &'static str,
    /// Keywords for Aho-Corasick pre-filtering.
    pub keywords: &'static [&'static str],
    /// Optional false-positive filter applied to each match.
    pub suppress: Option<SuppressFn>,
    /// Remediation text overriding the category default, if any.
    pub remediation: Option<&'static str>,
}

impl RuleDef {
    /// Returns the remediation guidance for this rule, falling back to
    /// the category default.
    #[must_use]
    pub const fn remediation_text(&self) -> &'static str {
        match self.remediation {
            Some(text) => text,
            None => self.category.remediation(),
        }
    }
}

/// Creates a `RuleDef` with `suppress` and `remediation` defaulting to `None`.
#[macro_export]
macro_rules! rule {
    (
        id: $id:expr,
        category: $category:expr,
        name: $name:expr,
        description: $description:expr,
        severity: $severity:expr,
        regex: $regex:expr,
        keywords: $keywords:expr $(,)?
    ) => {
        $crate::rule!(
            id: $id,
            category: $category,
            name: $name,
            description: $description,
            severity: $severity,
            regex: $regex,
            keywords: $keywords,
            suppress: None,
            remediation: None,
        )
    };
    (
        id: $id:expr,
        category: $category:expr,
        name: $name:expr,
        description: $description:expr,
        severity: $severity:expr,
        regex: $regex:expr,
        keywords: $keywords:expr,
        suppress: $suppress:expr $(,)?
    ) => {
        $crate::rule!(
            id: $id,
            category: $category,
            name: $name,
            description: $description,
            severity: $severity,
            regex: $regex,
            keywords: $keywords,
            suppress: $suppress,
            remediation: None,
        )
    };
    (
        id: $id:expr,
        category: $category:expr,
        name: $name:expr,
        description: $description:expr,
        severity: $severity:expr,
        regex: $regex:expr,
        keywords: $keywords:expr,
        suppress: $suppress:expr,
        remediation: $remediation:expr $(,)?
    ) => {
        $crate::RuleDef {
            id: $id,
            category: $category,
            name: $name,
            description: $description,
            severity: $severity,
            regex: $regex,
            keywords: $keywords,
            suppress: $suppress,
            remediation: $remediation,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_info_to_high() {
        assert!(Severity::Info < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn severity_display_formats_as_lowercase() {
        assert_eq!(format!("{}", Severity::Info), "info");
        assert_eq!(format!("{}", Severity::High), "high");
    }

    #[test]
    fn severity_from_str_is_case_insensitive() {
        assert_eq!(Severity::from_str("HIGH"), Ok(Severity::High));
        assert_eq!(Severity::from_str("Info"), Ok(Severity::Info));
    }

    #[test]
    fn severity_from_str_returns_error_for_invalid_value() {
        let result = Severity::from_str("critical");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert_eq!(err.invalid_value(), "critical");
        assert!(err.to_string().contains("critical"));
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn parse_severity_error_implements_std_error() {
        let err = ParseSeverityError::new("bad");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn category_as_str_matches_rule_id_prefix() {
        assert_eq!(Category::ContentSecret.as_str(), "content-secret");
        assert_eq!(Category::IgnoreGap.as_str(), "ignore-gap");
    }

    #[test]
    fn categories_are_orderable_for_grouping() {
        let mut categories = vec![Category::PathLeak, Category::AuthorIdentity, Category::IgnoreGap];
        categories.sort();
        assert_eq!(categories[0], Category::AuthorIdentity);
    }

    #[test]
    fn category_name_is_human_readable() {
        assert_eq!(Category::AuthorIdentity.name(), "Author Identity");
        assert_eq!(Category::PathLeak.name(), "Path & Host Leaks");
    }

    #[test]
    fn rule_remediation_falls_back_to_category() {
        let rule = crate::rule! {
            id: "content-pii/test",
            category: Category::ContentPii,
            name: "Test",
            description: "Test rule.",
            severity: Severity::Low,
            regex: "x",
            keywords: &[],
        };
        assert_eq!(rule.remediation_text(), Category::ContentPii.remediation());
    }

    #[test]
    fn rule_remediation_prefers_explicit_text() {
        let rule = crate::rule! {
            id: "content-pii/test",
            category: Category::ContentPii,
            name: "Test",
            description: "Test rule.",
            severity: Severity::Low,
            regex: "x",
            keywords: &[],
            suppress: None,
            remediation: Some("Do the thing."),
        };
        assert_eq!(rule.remediation_text(), "Do the thing.");
    }
}
