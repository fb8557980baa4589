//! Rules command - lists available detection rules.

use std::collections::BTreeMap;

use console::style;
use leakgate_core::prelude::*;

use crate::ui::{colors, indicators, print_command_header, severity_indicator, severity_style, truncate_with_ellipsis};

const NAME_TRUNCATE_WIDTH: usize = 35;
const DESCRIPTION_WIDTH: usize = 60;

/// Lists built-in detection rules, optionally filtered by category.
pub fn run(category_filter: Option<&str>, verbose: bool) -> super::Result {
    print_command_header("rules");

    let set = RuleSet::builtin()?;
    let rules: Vec<&Rule> = set
        .rules()
        .iter()
        .filter(|r| matches_category(r, category_filter))
        .collect();

    if rules.is_empty() {
        print_no_matches(category_filter);
        return Ok(());
    }

    print_count(rules.len());

    if verbose {
        print_verbose(&rules);
    } else {
        print_table(&rules);
    }

    Ok(())
}

fn matches_category(rule: &Rule, filter: Option<&str>) -> bool {
    filter.is_none_or(|c| rule.category.as_str().eq_ignore_ascii_case(c))
}

fn print_count(count: usize) {
    println!("{}", colors::muted().apply_to(format!("{count} rules")));
}

fn print_no_matches(category: Option<&str>) {
    match category {
        Some(c) => println!(
            "{} {} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no rules match"),
            colors::accent().apply_to(format!("--category {c}"))
        ),
        None => println!(
            "{} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no rules")
        ),
    }
}

fn print_table(rules: &[&Rule]) {
    let grouped = group_by_category(rules);

    for (category, rules) in &grouped {
        print_category_section(*category, rules);
    }
}

fn group_by_category<'a>(rules: &[&'a Rule]) -> BTreeMap<&'a str, Vec<&'a Rule>> {
    let mut result: BTreeMap<&str, Vec<&Rule>> = BTreeMap::new();

    for rule in rules {
        result.entry(rule.category.as_str()).or_default().push(rule);
    }

    result
}

fn print_category_section(category: &str, rules: &[&Rule]) {
    println!();
    println!(
        "{} {}",
        style(category).bold(),
        colors::muted().apply_to(format!("({})", rules.len()))
    );

    for rule in rules {
        print_rule_row(rule);
    }
}

fn print_rule_row(rule: &Rule) {
    println!(
        "  {} {}  {}",
        severity_indicator(rule.severity),
        colors::accent().apply_to(&rule.id),
        colors::secondary().apply_to(truncate_with_ellipsis(&rule.name, NAME_TRUNCATE_WIDTH))
    );
}

fn print_verbose(rules: &[&Rule]) {
    for rule in rules {
        print_rule_detail(rule);
    }
}

fn print_rule_detail(rule: &Rule) {
    let sev_style = severity_style(rule.severity);

    println!();
    println!(
        "{} {} {} {} {} {}",
        severity_indicator(rule.severity),
        style(&rule.id).bold(),
        colors::muted().apply_to("·"),
        sev_style.apply_to(rule.severity),
        colors::muted().apply_to("·"),
        colors::muted().apply_to(rule.category.as_str())
    );

    for line in wrap_text(&rule.description, DESCRIPTION_WIDTH) {
        println!("  {}", colors::secondary().apply_to(&line));
    }

    println!(
        "  {} {}",
        colors::info().apply_to(indicators::INFO),
        colors::secondary().apply_to(&rule.remediation)
    );
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}
