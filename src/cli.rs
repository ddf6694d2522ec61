use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod sub_diff;
mod sub_snapshot;

#[derive(Parser, Debug, Clone)]
#[command(name = "cliface", version, about = "Snapshot and diff the help surface of command-line tools", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Subcommand,

    /// Verbose logging (-v info, -vv debug)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Subcommand {
    /// Capture the current help surface of a command
    Snapshot(SnapshotArgs),
    /// Compare two saved snapshots and flag breaking changes
    Diff(DiffArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Command whose `--help` output to capture
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Write the snapshot to this file instead of stdout
    #[arg(long = "output", short = 'o', value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DiffArgs {
    /// Older snapshot file
    #[arg(value_name = "OLD", value_hint = ValueHint::FilePath)]
    pub old: PathBuf,

    /// Newer snapshot file
    #[arg(value_name = "NEW", value_hint = ValueHint::FilePath)]
    pub new: PathBuf,

    /// Output the raw diff as JSON instead of the report
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if command execution fails.
pub fn run() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage problems exit 1; --help and --version exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_logging(args.verbose);
    match &args.cmd {
        Subcommand::Snapshot(snapshot_args) => sub_snapshot::run_snapshot(snapshot_args),
        Subcommand::Diff(diff_args) => sub_diff::run_diff(diff_args),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}
