//! cliface - snapshot and diff the help surface of command-line tools
//!
//! A "help surface" is what a tool advertises through `--help`: its long
//! flags and its subcommands. cliface captures that surface into a JSON
//! snapshot and compares snapshots over time, treating anything that
//! disappeared as a breaking change.
//!
//! # Modules
//!
//! - [`capture`]: Runs `<command> --help` and collects its output
//! - [`cli`]: Command-line interface and subcommand dispatch
//! - [`diff`]: Snapshot comparison
//! - [`extract`]: Flag and subcommand extraction from help text
//! - [`report`]: Human-readable diff rendering
//! - [`store`]: Snapshot persistence as JSON files
//! - [`types`]: The snapshot data model

pub mod capture;
pub mod cli;
pub mod diff;
pub mod extract;
pub mod report;
pub mod store;
pub mod types;
