//! Japanese phone number rules.

use crate::rule::{Category, RuleDef, Severity};

const SKIP_CONTEXT: &[&str] = &["version", "ver.", "v1.", "changelog", "issn", "isbn"];

/// Rejects matches that are version strings, identifiers, or parts of
/// longer digit runs rather than phone numbers.
fn not_a_phone(line: &str, matched: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    if SKIP_CONTEXT.iter().any(|kw| lower.contains(kw)) {
        return true;
    }

    // Digits or date separators directly adjacent mean the match is a
    // fragment of something longer (timestamps, serials, UUIDs).
    let Some(pos) = line.find(matched) else {
        return false;
    };
    let before = line[..pos].chars().next_back();
    let after = line[pos + matched.len()..].chars().next();

    let joins = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '.' || c == '/');
    joins(before) || joins(after)
}

fn is_mobile_shaped(matched: &str) -> bool {
    matched.len() == 13 && matches!(&matched[..4], "070-" | "080-" | "090-")
}

/// Rules detecting hyphenated Japanese phone numbers.
pub static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "content-pii/jp-mobile-phone",
        category: Category::ContentPii,
        name: "Japanese Mobile Phone Number",
        description: "A mobile number in 0X0-XXXX-XXXX form.",
        severity: Severity::Medium,
        regex: r"\b0[789]0-\d{4}-\d{4}\b",
        keywords: &["070-", "080-", "090-"],
        suppress: Some(not_a_phone),
    },
    crate::rule! {
        id: "content-pii/jp-phone",
        category: Category::ContentPii,
        name: "Japanese Phone Number",
        description: "A hyphenated landline number starting with 0.",
        severity: Severity::Medium,
        regex: r"\b0\d{1,4}-\d{1,4}-\d{3,4}\b",
        keywords: &[],
        // Mobile-shaped numbers are left to the mobile rule.
        suppress: Some(|line, matched| is_mobile_shaped(matched) || not_a_phone(line, matched)),
    },
];

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn landline() -> Regex {
        Regex::new(RULES[1].regex).unwrap()
    }

    #[test]
    fn matches_mobile_number() {
        let re = Regex::new(RULES[0].regex).unwrap();
        assert!(re.is_match("tel: 090-1234-5678"));
        assert!(re.is_match("070-9876-5432"));
    }

    #[test]
    fn matches_landline_number() {
        assert!(landline().is_match("03-1234-5678"));
        assert!(landline().is_match("0422-12-3456"));
    }

    #[test]
    fn suppress_rejects_version_context() {
        assert!(not_a_phone("version 03-1234-5678", "03-1234-5678"));
        assert!(not_a_phone("see CHANGELOG 03-12-345", "03-12-345"));
    }

    #[test]
    fn suppress_rejects_adjacent_digit_runs() {
        assert!(not_a_phone("id 903-1234-5678", "03-1234-5678"));
        assert!(not_a_phone("03-1234-5678-9012", "03-1234-5678"));
        assert!(not_a_phone("2024/03-12-3456", "03-12-3456"));
    }

    #[test]
    fn suppress_keeps_plain_phone_lines() {
        assert!(!not_a_phone("TEL: 03-1234-5678", "03-1234-5678"));
    }

    #[test]
    fn landline_rule_defers_mobile_numbers_to_mobile_rule() {
        assert!(is_mobile_shaped("090-1234-5678"));
        assert!(!is_mobile_shaped("03-1234-5678"));
        assert!(!is_mobile_shaped("0901-234-5678"));
    }

    #[test]
    fn landline_rule_keeps_four_digit_area_codes_starting_090() {
        let line = "TEL: 0901-234-5678";
        let matched = "0901-234-5678";
        assert!(landline().is_match(line));
        assert!(!RULES[1].suppress.unwrap()(line, matched));
    }
}
