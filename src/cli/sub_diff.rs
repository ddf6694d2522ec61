use anyhow::{Context, Result};

use crate::diff;
use crate::report;
use crate::store;

use super::DiffArgs;

pub fn run_diff(args: &DiffArgs) -> Result<()> {
    let old = store::load(&args.old)?;
    let new = store::load(&args.new)?;
    log::info!(
        "comparing {} ({}) against {} ({})",
        old.command,
        old.captured_at,
        new.command,
        new.captured_at
    );

    let result = diff::diff(&old, &new);
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize diff result")?;
        println!("{json}");
    } else {
        print!("{}", report::render(&result));
    }

    if result.has_breaking {
        std::process::exit(1);
    }
    Ok(())
}
