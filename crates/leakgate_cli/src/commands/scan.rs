//! Scan command - runs all probes over a repository.

use std::io::Write;
use std::time::Duration;

use leakgate_core::{CONFIG_FILENAME, Config, Report, ScanOptions, scan};

use crate::git::GitSource;
use crate::output::write_report;
use crate::ui::{exit, print_command_header};
use crate::{OutputFormat, ScanArgs};

/// Executes the `leakgate scan` command.
///
/// Exits the process with code 1 when any high-severity finding exists.
pub fn run(args: &ScanArgs) -> super::Result {
    let source = GitSource::discover(&args.path)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| source.work_dir().join(CONFIG_FILENAME));
    let config = Config::load(&config_path)?;
    let rules = config.build_rules()?;

    let options = build_options(args, &config);
    let report = scan(&source, &rules, &options)?;

    write_output(args, &report)?;

    if report.exit_status() != 0 {
        std::process::exit(exit::FINDINGS);
    }

    Ok(())
}

fn build_options(args: &ScanArgs, config: &Config) -> ScanOptions {
    let mut options = ScanOptions::from_config(config);
    options.verbose = args.verbose;

    if args.max_history_commits.is_some() {
        options.max_history_commits = args.max_history_commits;
    }
    if args.max_file_size.is_some() {
        options.max_file_size = args.max_file_size;
    }
    options.probe_timeout = args.timeout.map(Duration::from_secs);
    options.exclude.extend(args.exclude.iter().cloned());

    options
}

fn write_output(args: &ScanArgs, report: &Report) -> super::Result {
    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            write_report(report, args.format, &mut file, true, args.verbose)?;
        }
        None => {
            if matches!(args.format, OutputFormat::Text) {
                print_command_header("scan");
            }
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_report(report, args.format, &mut lock, false, args.verbose)?;
            lock.flush()?;
        }
    }

    Ok(())
}
