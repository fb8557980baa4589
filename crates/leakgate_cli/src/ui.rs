//! UI helpers for consistent output formatting.

use console::Style;
use leakgate_core::prelude::*;

/// Single-character Unicode glyphs used as status indicators.
pub mod indicators {
    /// Error indicator (✖).
    pub const ERROR: &str = "✖";
    /// Informational indicator (ℹ).
    pub const INFO: &str = "ℹ";
    /// Success indicator (✓).
    pub const SUCCESS: &str = "✓";
}

/// Semantic colour palette for terminal output.
pub mod colors {
    use console::Style;

    /// Red - errors and high-severity findings.
    pub const fn error() -> Style {
        Style::new().red()
    }

    /// Cyan - informational messages.
    pub const fn info() -> Style {
        Style::new().cyan()
    }

    /// Green - success messages.
    pub const fn success() -> Style {
        Style::new().green()
    }

    /// White bold - primary/headline text.
    pub const fn primary() -> Style {
        Style::new().white().bold()
    }

    /// Light grey - secondary descriptive text.
    pub const fn secondary() -> Style {
        Style::new().color256(252)
    }

    /// Dark grey - muted/contextual text.
    pub const fn muted() -> Style {
        Style::new().color256(243)
    }

    /// Cyan - accent highlights (rule IDs, commands).
    pub const fn accent() -> Style {
        Style::new().cyan()
    }
}

/// Process exit codes.
pub mod exit {
    /// At least one high-severity finding.
    pub const FINDINGS: i32 = 1;
    /// The scanned path is not inside a git repository.
    pub const NO_REPOSITORY: i32 = 2;
    /// An unrecoverable error occurred.
    pub const ERROR: i32 = 3;
}

const SEVERITY_HIGH_COLOR: u8 = 196;
const SEVERITY_MEDIUM_COLOR: u8 = 208;
const SEVERITY_LOW_COLOR: u8 = 220;
const SEVERITY_INFO_COLOR: u8 = 75;

/// Returns the terminal colour style for a given severity level.
pub const fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::High => Style::new().color256(SEVERITY_HIGH_COLOR).bold(),
        Severity::Medium => Style::new().color256(SEVERITY_MEDIUM_COLOR),
        Severity::Low => Style::new().color256(SEVERITY_LOW_COLOR),
        Severity::Info => Style::new().color256(SEVERITY_INFO_COLOR),
    }
}

/// Returns a severity-coloured error indicator glyph.
#[must_use]
pub fn severity_indicator(severity: Severity) -> String {
    let glyph = if severity == Severity::Info {
        indicators::INFO
    } else {
        indicators::ERROR
    };
    severity_style(severity).apply_to(glyph).to_string()
}

/// Prints a styled `leakgate <command>` header with surrounding blank lines.
pub fn print_command_header(command: &str) {
    println!();
    println!(
        "{} {}",
        colors::accent().bold().apply_to("leakgate"),
        colors::muted().apply_to(command)
    );
    println!();
}

/// Prints a red error message to stderr.
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to(message)
    );
}

/// Returns `singular` when `count` is 1, otherwise `plural`.
#[must_use]
pub const fn pluralise_word<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Truncates a string to `max_chars`, appending an ellipsis if shortened.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 1).collect();
        format!("{truncated}…")
    }
}

/// Builds a one-line severity breakdown string (e.g. "✖ 2 high · ✖ 1 medium").
#[must_use]
pub fn build_severity_summary(report: &Report) -> String {
    let mut parts = Vec::with_capacity(4);

    for severity in [Severity::High, Severity::Medium, Severity::Low, Severity::Info] {
        let count = report.count_at(severity);
        if count > 0 {
            parts.push(format!(
                "{} {} {}",
                severity_indicator(severity),
                colors::secondary().apply_to(count),
                colors::muted().apply_to(severity)
            ));
        }
    }

    parts.join(" · ")
}

/// Returns the shared clap colour theme used by all CLI subcommands.
#[must_use]
pub fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Style};

    clap::builder::Styles::styled()
        .header(
            Style::new()
                .fg_color(Some(AnsiColor::Cyan.into()))
                .effects(Effects::BOLD),
        )
        .usage(
            Style::new()
                .fg_color(Some(AnsiColor::Cyan.into()))
                .effects(Effects::BOLD),
        )
        .literal(Style::new().fg_color(Some(AnsiColor::Cyan.into())))
        .placeholder(Style::new().fg_color(Some(AnsiColor::BrightBlack.into())))
        .valid(Style::new().fg_color(Some(AnsiColor::Green.into())))
        .invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
        .error(
            Style::new()
                .fg_color(Some(AnsiColor::Red.into()))
                .effects(Effects::BOLD),
        )
}
