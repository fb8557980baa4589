//! Completions command - generates shell completion scripts.

use clap::CommandFactory as _;
use clap_complete::Shell;

use crate::Cli;

/// Writes a completion script for the given shell to stdout.
pub fn run(shell: Shell) -> super::Result {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "leakgate", &mut std::io::stdout());
    Ok(())
}
