//! Report aggregation and ordering.

use std::cmp::Ordering;

use serde::Serialize;

use leakgate_rules::Severity;

use crate::finding::Finding;

/// The complete, immutable result of one scan.
///
/// Constructed once per run by [`aggregate`]; findings are sorted by
/// the total order (severity descending, category name ascending,
/// location order) and deduplicated.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Returns the ordered findings.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns the number of findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Returns `true` if the scan produced no findings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the maximum severity across findings, absent when empty.
    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// Returns the process exit status: 1 when any finding is `High`,
    /// 0 otherwise.
    #[must_use]
    pub fn exit_status(&self) -> i32 {
        i32::from(self.highest_severity() == Some(Severity::High))
    }

    /// Returns how many findings carry the given severity.
    #[must_use]
    pub fn count_at(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }
}

/// Builds a [`Report`] from the union of probe outputs.
///
/// Pure and idempotent: strips `detail`/`remediation` when `verbose` is
/// off, drops findings identical in (category, location, summary), and
/// applies the total order. Never fails.
#[must_use]
pub fn aggregate(mut findings: Vec<Finding>, verbose: bool) -> Report {
    if !verbose {
        for finding in &mut findings {
            finding.detail = None;
            finding.remediation = None;
        }
    }

    // Group exact triples together with the most severe first, so the
    // dedup pass keeps that one.
    findings.sort_by(dedup_order);
    findings.dedup_by(|a, b| {
        a.category == b.category && a.location == b.location && a.summary == b.summary
    });

    findings.sort_by(compare);

    Report { findings }
}

fn dedup_order(a: &Finding, b: &Finding) -> Ordering {
    a.category
        .as_str()
        .cmp(b.category.as_str())
        .then_with(|| a.location.cmp(&b.location))
        .then_with(|| a.summary.cmp(&b.summary))
        .then_with(|| b.severity.cmp(&a.severity))
}

fn compare(a: &Finding, b: &Finding) -> Ordering {
    b.severity
        .cmp(&a.severity)
        .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        .then_with(|| a.location.cmp(&b.location))
        .then_with(|| a.summary.cmp(&b.summary))
}
