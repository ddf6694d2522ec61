use anyhow::Result;
use chrono::{SecondsFormat, Utc};

use crate::capture;
use crate::store;
use crate::types::Snapshot;

use super::SnapshotArgs;

pub fn run_snapshot(args: &SnapshotArgs) -> Result<()> {
    log::info!("capturing help surface of {}", args.command);
    let help_text = capture::capture_help(&args.command);
    let captured_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let snapshot = Snapshot::from_help_text(&args.command, &help_text, captured_at);

    match &args.output {
        Some(path) => {
            store::save(&snapshot, path)?;
            // Summary goes to stderr so stdout stays pipeable.
            eprintln!(
                "Snapshot saved to {} ({} flags, {} subcommands)",
                path.display(),
                snapshot.flags.len(),
                snapshot.subcommands.len()
            );
        }
        None => println!("{}", store::to_json(&snapshot)?),
    }
    Ok(())
}
