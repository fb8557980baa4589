//! Hardcoded password assignment rules.

use crate::rule::{Category, RuleDef, Severity};

const PLACEHOLDER_VALUES: &[&str] = &[
    "password",
    "passwd",
    "changeme",
    "change_me",
    "change-me",
    "example",
    "placeholder",
    "secret",
    "your_password",
    "dummy",
    "xxxx",
    "****",
];

fn is_placeholder(matched: &str) -> bool {
    let Some(value) = assigned_value(matched) else {
        return true;
    };
    let value = value.to_ascii_lowercase();

    // Template expansions are not literal passwords.
    if value.contains("${") || value.contains('<') || value.contains("{{") || value.contains("%s") {
        return true;
    }

    PLACEHOLDER_VALUES.iter().any(|p| value.contains(p))
}

fn assigned_value(matched: &str) -> Option<&str> {
    let open = matched.find(['\'', '"'])?;
    let value = &matched[open + 1..];
    Some(value.strip_suffix(['\'', '"']).unwrap_or(value))
}

/// Rules detecting password literals assigned in content.
pub static RULES: &[RuleDef] = &[crate::rule! {
    id: "content-secret/password-assignment",
    category: Category::ContentSecret,
    name: "Hardcoded Password Assignment",
    description: "A password literal assigned to a password-named variable.",
    severity: Severity::High,
    regex: r#"(?i)(?:password|passwd|pwd)\s*[:=]\s*['"][^'"]{4,}['"]"#,
    keywords: &["password", "passwd", "pwd"],
    suppress: Some(|_line, matched| is_placeholder(matched)),
}];
