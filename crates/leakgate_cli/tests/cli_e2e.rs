//! End-to-end tests for top-level CLI behaviour.

use assert_cmd::Command;
use predicates::prelude::*;

fn leakgate() -> Command {
    Command::new(env!("CARGO_BIN_EXE_leakgate"))
}

#[test]
fn no_arguments_shows_help() {
    leakgate()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_name() {
    leakgate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("leakgate"));
}

#[test]
fn unknown_subcommand_fails() {
    leakgate().arg("frobnicate").assert().failure();
}

#[test]
fn rules_lists_builtin_rules() {
    leakgate()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("content-secret"))
        .stdout(predicate::str::contains("content-pii"));
}

#[test]
fn rules_category_filter_narrows_output() {
    leakgate()
        .args(["rules", "--category", "content-pii"])
        .assert()
        .success()
        .stdout(predicate::str::contains("content-pii"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn rules_unknown_category_reports_no_matches() {
    leakgate()
        .args(["rules", "--category", "nonsense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no rules match"));
}

#[test]
fn rules_verbose_shows_rule_ids() {
    leakgate()
        .args(["rules", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("content-secret/github-pat"));
}

#[test]
fn bash_completions() {
    leakgate()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn zsh_completions() {
    leakgate()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compdef"));
}

#[test]
fn fish_completions() {
    leakgate()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn invalid_shell_fails() {
    leakgate().args(["completions", "invalid-shell"]).assert().failure();
}
