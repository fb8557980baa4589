//! # Commands
//!
//! - `leakgate scan` - Scan a repository for privacy and secret leaks
//! - `leakgate rules` - List detection rules
//! - `leakgate completions` - Generate shell completion scripts

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;
mod files;
mod git;
mod output;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use console::style;
use leakgate_core::ScanError;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/leakgate/leakgate";

#[derive(Debug, Parser)]
#[command(
    name = "leakgate",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    #[command(visible_alias = "r")]
    Rules(RulesArgs),

    Completions(CompletionsArgs),
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Arguments for the `leakgate scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Path to the repository (or any directory inside it).
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to `.leakgate.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Include detail and remediation text in findings.
    #[arg(short, long)]
    pub verbose: bool,

    /// Maximum number of commits to walk in history.
    #[arg(short = 'n', long, value_name = "N")]
    pub max_history_commits: Option<usize>,

    /// Skip tracked files larger than this size in bytes.
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Soft per-probe deadline in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Glob patterns to exclude from content scanning.
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

/// Arguments for the `leakgate rules` command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Filter rules by category name (e.g. `content-secret`).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Show rule details including description and remediation.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `leakgate completions` command.
#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate a completion script for.
    pub shell: Shell,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));

        let code = match e.downcast_ref::<ScanError>() {
            Some(ScanError::NotARepository { .. }) => ui::exit::NO_REPOSITORY,
            _ => ui::exit::ERROR,
        };
        std::process::exit(code);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Rules(args) => commands::rules::run(args.category.as_deref(), args.verbose),
        Command::Completions(args) => commands::completions::run(args.shell),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} checks a git repository for personal information leaks.

  Audits author identity, tracked content, commit history, and
  ignore configuration before you publish. Works offline.",
        colors::accent().apply_to("leakgate").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    leakgate scan                  Scan the current repository
    leakgate scan ../project       Scan another repository
    leakgate scan --format json    Output as JSON
    leakgate scan -v               Include remediation advice
    leakgate scan -n 100           Walk at most 100 commits
    leakgate rules                 List detection rules

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
