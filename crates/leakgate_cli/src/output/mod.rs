//! Report rendering in text and JSON formats.

mod json;
mod text;

use std::io::Write;

use leakgate_core::Report;

use crate::OutputFormat;

/// Renders a report to the given writer in the requested format.
///
/// `strip_colors` removes ANSI escapes, used when writing to a file.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    writer: &mut dyn Write,
    strip_colors: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => text::write(report, writer, strip_colors, verbose),
        OutputFormat::Json => json::write(report, writer),
    }
}
