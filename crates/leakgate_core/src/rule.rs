//! Compiled rules and the keyword-indexed rule set.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use regex::Regex;

use leakgate_rules::{Category, RuleDef, Severity, SuppressFn};

use crate::error::RuleError;

/// A compiled detection rule ready for matching.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier in `"category/name"` format.
    pub id: Arc<str>,
    /// The category findings from this rule carry.
    pub category: Category,
    /// Short human-readable name shown in summaries.
    pub name: Box<str>,
    /// Longer description of what the rule detects.
    pub description: Box<str>,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// Compiled regular expression that matches the leak.
    pub regex: Regex,
    /// Case-insensitive keywords for Aho-Corasick pre-filtering. If
    /// non-empty, the rule is only tested against content containing at
    /// least one keyword.
    pub keywords: Box<[Box<str>]>,
    /// Optional false-positive filter applied to each match.
    pub suppress: Option<SuppressFn>,
    /// Remediation guidance for findings from this rule.
    pub remediation: Box<str>,
}

impl Rule {
    /// Compiles a static rule definition.
    pub fn from_def(def: &RuleDef) -> Result<Self, RuleError> {
        let regex = Regex::new(def.regex).map_err(|source| RuleError::InvalidRegex {
            id: def.id.to_string(),
            source,
        })?;

        Ok(Self {
            id: Arc::from(def.id),
            category: def.category,
            name: def.name.into(),
            description: def.description.into(),
            severity: def.severity,
            regex,
            keywords: def.keywords.iter().map(|&k| k.into()).collect(),
            suppress: def.suppress,
            remediation: def.remediation_text().into(),
        })
    }
}

/// Indexed collection of [`Rule`]s with Aho-Corasick pre-filtering.
///
/// The set builds a keyword automaton at construction time so the
/// matcher can cheaply decide which rules to evaluate for a given piece
/// of content. Rule sets are explicitly constructed values passed into
/// the probes, never process-wide state, so tests can substitute them.
pub struct RuleSet {
    rules: Vec<Rule>,
    keyword_automaton: Option<AhoCorasick>,
    keyword_to_rules: Vec<Vec<usize>>,
    rules_without_keywords: Vec<usize>,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .field("rules_without_keywords", &self.rules_without_keywords.len())
            .finish_non_exhaustive()
    }
}

impl RuleSet {
    /// Creates a set containing every builtin rule.
    pub fn builtin() -> Result<Self, RuleError> {
        let rules = leakgate_rules::builtin_rules()
            .map(Rule::from_def)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// Creates a set from a list of rules, building the keyword index.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        let index = build_keyword_index(&rules);
        let keyword_automaton = build_automaton(&index.keywords);

        Self {
            rules,
            keyword_automaton,
            keyword_to_rules: index.keyword_to_rules,
            rules_without_keywords: index.rules_without_keywords,
        }
    }

    /// Returns all rules as a slice.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Looks up a rule by its ID string.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id.as_ref() == id)
    }

    /// Looks up a rule by its positional index in the set.
    #[must_use]
    pub fn get_by_index(&self, idx: usize) -> Option<&Rule> {
        self.rules.get(idx)
    }

    /// Returns the number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn keyword_automaton(&self) -> Option<&AhoCorasick> {
        self.keyword_automaton.as_ref()
    }

    pub(crate) fn keyword_to_rules(&self) -> &[Vec<usize>] {
        &self.keyword_to_rules
    }

    pub(crate) fn rules_without_keywords(&self) -> &[usize] {
        &self.rules_without_keywords
    }
}

struct KeywordIndex {
    keywords: Vec<String>,
    keyword_to_rules: Vec<Vec<usize>>,
    rules_without_keywords: Vec<usize>,
}

fn build_keyword_index(rules: &[Rule]) -> KeywordIndex {
    let mut keywords = Vec::new();
    let mut keyword_to_rules: Vec<Vec<usize>> = Vec::new();
    let mut rules_without_keywords = Vec::new();
    let mut keyword_positions: HashMap<String, usize> = HashMap::new();

    for (rule_idx, rule) in rules.iter().enumerate() {
        if rule.keywords.is_empty() {
            rules_without_keywords.push(rule_idx);
            continue;
        }

        for keyword in &rule.keywords {
            let keyword_str = keyword.to_string();

            if let Some(&existing_idx) = keyword_positions.get(&keyword_str) {
                keyword_to_rules[existing_idx].push(rule_idx);
            } else {
                let new_idx = keywords.len();
                keyword_positions.insert(keyword_str.clone(), new_idx);
                keywords.push(keyword_str);
                keyword_to_rules.push(vec![rule_idx]);
            }
        }
    }

    KeywordIndex {
        keywords,
        keyword_to_rules,
        rules_without_keywords,
    }
}

fn build_automaton(keywords: &[String]) -> Option<AhoCorasick> {
    if keywords.is_empty() {
        return None;
    }

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(keywords)
        .ok()
}
