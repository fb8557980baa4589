//! Builtin detection rules organised by what they detect.

/// Japanese postal address markers.
pub mod addresses;
/// API keys, tokens, and private key material.
pub mod api_keys;
/// Personal email addresses in content.
pub mod emails;
/// Hardcoded password assignments.
pub mod passwords;
/// Japanese phone numbers.
pub mod phones;

use crate::rule::RuleDef;

/// Returns every builtin rule definition across all groups.
pub fn builtin_rules() -> impl Iterator<Item = &'static RuleDef> {
    emails::RULES
        .iter()
        .chain(api_keys::RULES)
        .chain(passwords::RULES)
        .chain(phones::RULES)
        .chain(addresses::RULES)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use regex::Regex;

    use super::*;

    #[test]
    fn builtin_rules_is_not_empty() {
        assert!(builtin_rules().count() >= 10);
    }

    #[test]
    fn builtin_rule_ids_are_unique() {
        let mut seen = HashSet::new();
        for rule in builtin_rules() {
            assert!(seen.insert(rule.id), "duplicate rule id {}", rule.id);
        }
    }

    #[test]
    fn builtin_rule_ids_are_prefixed_with_their_category() {
        for rule in builtin_rules() {
            assert!(
                rule.id.starts_with(rule.category.as_str()),
                "rule id {} does not start with {}",
                rule.id,
                rule.category.as_str()
            );
        }
    }

    #[test]
    fn builtin_rules_have_valid_regexes() {
        for rule in builtin_rules() {
            assert!(Regex::new(rule.regex).is_ok(), "invalid regex in {}", rule.id);
        }
    }

    #[test]
    fn builtin_rules_have_names_and_descriptions() {
        for rule in builtin_rules() {
            assert!(!rule.name.is_empty());
            assert!(!rule.description.is_empty());
        }
    }
}
