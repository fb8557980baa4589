//! JSON output formatting for scan reports.

use std::io::Write;

use leakgate_core::{Finding, Report, Severity};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    findings: &'a [Finding],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    high: usize,
    medium: usize,
    low: usize,
    info: usize,
    exit_status: i32,
}

/// Renders the report as pretty-printed JSON with a trailing newline.
pub fn write(report: &Report, writer: &mut dyn Write) -> anyhow::Result<()> {
    let doc = JsonReport {
        findings: report.findings(),
        summary: JsonSummary {
            total: report.len(),
            high: report.count_at(Severity::High),
            medium: report.count_at(Severity::Medium),
            low: report.count_at(Severity::Low),
            info: report.count_at(Severity::Info),
            exit_status: report.exit_status(),
        },
    };

    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}
