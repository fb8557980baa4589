//! Author identity and environment checks.
//!
//! Flags personal email domains, machine hostnames embedded in emails,
//! and author names that look like real legal names, across both the
//! configured identity and every distinct identity in history. Also the
//! only probe that knows the local hostname, so it owns the check for
//! hostname leaks in tracked content.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use leakgate_rules::identity::{
    MACHINE_HOSTNAME_REGEX, contains_cjk, is_noreply_email, is_personal_email,
};
use leakgate_rules::{Category, Severity};

use crate::finding::{Finding, Location};
use crate::scan::ScanOptions;
use crate::source::{FileData, Identity, RepoSource};

static MACHINE_HOSTNAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(MACHINE_HOSTNAME_REGEX).ok());

/// Path used to locate findings about the configured identity.
const GIT_CONFIG_PATH: &str = ".git/config";

/// Hostnames shorter than this are too generic to search content for.
const MIN_HOSTNAME_LENGTH: usize = 4;

pub(crate) fn run<S: RepoSource>(source: &S, options: &ScanOptions) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(identity) = source.current_identity() {
        check_identity(&identity, || Location::file(GIT_CONFIG_PATH), "configured git", &mut findings);
    }

    collect_history_identities(source, options, &mut findings);
    check_hostname_in_content(source, options, &mut findings);

    findings
}

fn check_identity(
    identity: &Identity,
    location: impl Fn() -> Location,
    context: &str,
    findings: &mut Vec<Finding>,
) {
    if !is_noreply_email(&identity.email) && is_personal_email(&identity.email) {
        findings.push(
            Finding::new(
                Category::AuthorIdentity,
                Severity::Medium,
                location(),
                format!("{context} identity uses personal email {}", identity.email),
            )
            .with_detail(format!("identity: {identity}"))
            .with_remediation(Category::AuthorIdentity.remediation()),
        );
    }

    if MACHINE_HOSTNAME
        .as_ref()
        .is_some_and(|re| re.is_match(&identity.email))
    {
        findings.push(
            Finding::new(
                Category::AuthorIdentity,
                Severity::Medium,
                location(),
                format!("{context} identity email embeds a machine hostname: {}", identity.email),
            )
            .with_detail(format!("identity: {identity}"))
            .with_remediation(Category::AuthorIdentity.remediation()),
        );
    }

    if contains_cjk(&identity.name) {
        findings.push(
            Finding::new(
                Category::AuthorIdentity,
                Severity::High,
                location(),
                format!("{context} identity name '{}' appears to be a real name", identity.name),
            )
            .with_detail(format!("identity: {identity}"))
            .with_remediation(Category::AuthorIdentity.remediation()),
        );
    }
}

fn collect_history_identities<S: RepoSource>(
    source: &S,
    options: &ScanOptions,
    findings: &mut Vec<Finding>,
) {
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for commit in source.commits(options.max_history_commits) {
        if options.cancel.is_cancelled() {
            return;
        }

        for identity in [&commit.author, &commit.committer] {
            let key = (identity.name.clone(), identity.email.clone());
            if !seen.insert(key) {
                continue;
            }

            let commit_id = commit.id.as_str().to_string();
            check_identity(
                identity,
                || Location::commit(commit_id.clone()),
                "commit",
                findings,
            );
        }
    }
}

fn check_hostname_in_content<S: RepoSource>(
    source: &S,
    options: &ScanOptions,
    findings: &mut Vec<Finding>,
) {
    let Some(hostname) = options.environment.hostname.as_deref() else {
        return;
    };
    if hostname.len() < MIN_HOSTNAME_LENGTH {
        return;
    }

    for path in source.tracked_files() {
        if options.cancel.is_cancelled() {
            return;
        }

        if let FileData::Text(content) = source.read_file(&path, options.max_file_size)
            && content.contains(hostname)
        {
            findings.push(
                Finding::new(
                    Category::PathLeak,
                    Severity::Low,
                    Location::file(path),
                    format!("file content embeds the local hostname '{hostname}'"),
                )
                .with_remediation(Category::PathLeak.remediation()),
            );
        }
    }
}
