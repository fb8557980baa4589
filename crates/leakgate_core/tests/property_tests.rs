//! Property tests for report aggregation.

use proptest::prelude::*;

use leakgate_core::{Category, Finding, Location, Severity, aggregate};

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
    ]
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::AuthorIdentity),
        Just(Category::ContentSecret),
        Just(Category::ContentPii),
        Just(Category::HistorySecret),
        Just(Category::IgnoreGap),
        Just(Category::PathLeak),
    ]
}

fn arb_location() -> impl Strategy<Value = Location> {
    prop_oneof![
        ("[a-z]{1,8}\\.txt", proptest::option::of(1u32..500)).prop_map(|(path, line)| {
            match line {
                Some(line) => Location::line(path, line),
                None => Location::file(path),
            }
        }),
        "[0-9a-f]{40}".prop_map(Location::commit),
    ]
}

prop_compose! {
    fn arb_finding()(
        category in arb_category(),
        severity in arb_severity(),
        location in arb_location(),
        summary in "[a-z ]{1,30}",
        detail in proptest::option::of("[a-z ]{1,30}"),
    ) -> Finding {
        let mut finding = Finding::new(category, severity, location, summary);
        if let Some(detail) = detail {
            finding = finding.with_detail(detail).with_remediation("fix it");
        }
        finding
    }
}

proptest! {
    #[test]
    fn report_is_sorted_by_the_total_order(findings in proptest::collection::vec(arb_finding(), 0..40)) {
        let report = aggregate(findings, true);

        for pair in report.findings().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ordered = b.severity.cmp(&a.severity)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
                .then_with(|| a.location.cmp(&b.location))
                .then_with(|| a.summary.cmp(&b.summary));
            prop_assert_ne!(ordered, std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn aggregation_is_idempotent(findings in proptest::collection::vec(arb_finding(), 0..40)) {
        let once = aggregate(findings, true);
        let twice = aggregate(once.findings().to_vec(), true);
        prop_assert_eq!(once.findings(), twice.findings());
    }

    #[test]
    fn no_duplicate_keys_survive(findings in proptest::collection::vec(arb_finding(), 0..40)) {
        let report = aggregate(findings, true);

        let mut keys: Vec<_> = report
            .findings()
            .iter()
            .map(|f| (f.category, f.location.clone(), f.summary.clone()))
            .collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(before, keys.len());
    }

    #[test]
    fn exit_status_tracks_high_findings(findings in proptest::collection::vec(arb_finding(), 0..40)) {
        let any_high = findings.iter().any(|f| f.severity == Severity::High);
        let report = aggregate(findings, false);

        // Dedup can only drop duplicates of an existing High finding,
        // never the last one.
        prop_assert_eq!(report.exit_status(), i32::from(any_high));
    }

    #[test]
    fn non_verbose_reports_carry_no_advice(findings in proptest::collection::vec(arb_finding(), 0..40)) {
        let report = aggregate(findings, false);
        for finding in report.findings() {
            prop_assert!(finding.detail.is_none());
            prop_assert!(finding.remediation.is_none());
        }
    }

    #[test]
    fn aggregation_never_invents_findings(findings in proptest::collection::vec(arb_finding(), 0..40)) {
        let input_len = findings.len();
        let report = aggregate(findings, true);
        prop_assert!(report.len() <= input_len);
    }
}
