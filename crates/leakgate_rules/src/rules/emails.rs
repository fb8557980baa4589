//! Personal email address rules.

use crate::identity::is_noreply_email;
use crate::rule::{Category, RuleDef, Severity};

/// Rules detecting personal email addresses hardcoded in content.
pub static RULES: &[RuleDef] = &[crate::rule! {
    id: "content-pii/personal-email",
    category: Category::ContentPii,
    name: "Personal Email Address",
    description: "A consumer-provider email address identifies a person when published.",
    severity: Severity::High,
    regex: r"(?i)\b[A-Za-z0-9._%+-]+@(?:gmail\.com|yahoo\.co\.jp|yahoo\.com|hotmail\.com|hotmail\.co\.jp|outlook\.com|outlook\.jp|icloud\.com|me\.com|mac\.com|live\.com|live\.jp|msn\.com|protonmail\.com|proton\.me)\b",
    keywords: &[
        "gmail", "yahoo", "hotmail", "outlook", "icloud", "me.com", "mac.com", "live.", "msn",
        "protonmail", "proton.me",
    ],
    suppress: Some(|_line, matched| is_noreply_email(matched)),
}];
