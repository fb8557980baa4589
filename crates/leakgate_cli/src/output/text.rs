//! Text output formatting for scan reports.

use std::io::Write;

use console::style;
use leakgate_core::prelude::*;

use crate::ui::{build_severity_summary, colors, indicators, pluralise_word, severity_indicator, severity_style};

/// Renders findings as styled, human-readable text grouped by category.
pub fn write(report: &Report, writer: &mut dyn Write, strip_colors: bool, verbose: bool) -> anyhow::Result<()> {
    let mut current_category = None;

    for finding in report.findings() {
        if current_category != Some(finding.category) {
            write_category_header(finding.category, current_category.is_some(), writer, strip_colors)?;
            current_category = Some(finding.category);
        }

        write_finding(finding, verbose, writer, strip_colors)?;
    }

    write_summary(report, writer, strip_colors)
}

fn write_category_header(
    category: Category,
    preceded: bool,
    writer: &mut dyn Write,
    strip_colors: bool,
) -> anyhow::Result<()> {
    if preceded {
        writeln!(writer)?;
    }

    write_line(
        writer,
        format_args!(
            "{} {}",
            style(category.name()).bold(),
            colors::muted().apply_to(format!("({category})"))
        ),
        strip_colors,
    )?;

    Ok(())
}

fn write_finding(finding: &Finding, verbose: bool, writer: &mut dyn Write, strip_colors: bool) -> anyhow::Result<()> {
    let sev_style = severity_style(finding.severity);

    write_line(
        writer,
        format_args!(
            "  {} {} {} {} {} {}",
            severity_indicator(finding.severity),
            sev_style.apply_to(finding.severity),
            colors::muted().apply_to("·"),
            colors::secondary().apply_to(&finding.location),
            colors::muted().apply_to("·"),
            style(&finding.summary).bold(),
        ),
        strip_colors,
    )?;

    if verbose {
        if let Some(detail) = &finding.detail {
            write_line(
                writer,
                format_args!("      {}", colors::muted().apply_to(detail)),
                strip_colors,
            )?;
        }

        if let Some(remediation) = &finding.remediation {
            write_line(
                writer,
                format_args!(
                    "      {} {}",
                    colors::info().apply_to(indicators::INFO),
                    colors::secondary().apply_to(remediation)
                ),
                strip_colors,
            )?;
        }
    }

    Ok(())
}

fn write_summary(report: &Report, writer: &mut dyn Write, strip_colors: bool) -> anyhow::Result<()> {
    if report.is_empty() {
        write_line(
            writer,
            format_args!(
                "{} {}",
                colors::success().apply_to(indicators::SUCCESS),
                colors::primary().apply_to("No leaks found")
            ),
            strip_colors,
        )?;
        return Ok(());
    }

    let count = report.len();
    let word = pluralise_word(count, "finding", "findings");

    writeln!(writer)?;
    write_line(
        writer,
        format_args!(
            "{} {} {} {}",
            colors::error().apply_to(indicators::ERROR),
            colors::primary().apply_to(format!("{count} {word}")),
            colors::muted().apply_to("·"),
            build_severity_summary(report)
        ),
        strip_colors,
    )?;

    Ok(())
}

fn write_line(writer: &mut dyn Write, args: std::fmt::Arguments<'_>, strip_colors: bool) -> anyhow::Result<()> {
    if strip_colors {
        let s = args.to_string();
        let stripped = console::strip_ansi_codes(&s);
        writeln!(writer, "{stripped}")?;
    } else {
        writeln!(writer, "{args}")?;
    }
    Ok(())
}
