//! Japanese postal address rules.

use crate::rule::{Category, RuleDef, Severity};

/// Rules detecting postal codes written with the 〒 mark.
///
/// Bare `NNN-NNNN` runs are far too common in code to flag, so the mark
/// is required.
pub static RULES: &[RuleDef] = &[crate::rule! {
    id: "content-pii/jp-postal-code",
    category: Category::ContentPii,
    name: "Japanese Postal Code",
    description: "A postal code marked with 〒, usually part of a street address.",
    severity: Severity::Medium,
    regex: r"〒\s?\d{3}-\d{4}",
    keywords: &["〒"],
}];

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn regex() -> Regex {
        Regex::new(RULES[0].regex).unwrap()
    }

    #[test]
    fn matches_marked_postal_code() {
        assert!(regex().is_match("〒100-0001 東京都千代田区"));
        assert!(regex().is_match("〒 150-0041"));
    }

    #[test]
    fn rejects_bare_digit_runs() {
        assert!(!regex().is_match("range 100-0001"));
    }
}
