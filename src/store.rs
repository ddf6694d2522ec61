use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Snapshot;

/// Loads a snapshot from a JSON file.
///
/// # Errors
/// Returns an error when the file cannot be read or its contents do not
/// parse as a snapshot; both variants name the offending path.
pub fn load(path: &Path) -> Result<Snapshot> {
    let bytes = fs::read(path).with_context(|| format!("read snapshot {}", path.display()))?;
    let snap: Snapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse snapshot {}", path.display()))?;
    Ok(snap)
}

/// Writes a snapshot to `path` as pretty-printed JSON.
///
/// # Errors
/// Returns an error when serialization or the file write fails.
pub fn save(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json = to_json(snapshot)?;
    fs::write(path, json).with_context(|| format!("write snapshot {}", path.display()))?;
    Ok(())
}

/// Renders a snapshot in the persisted wire shape: 2-space indent, fields
/// in `command, flags, subcommands, captured_at` order.
///
/// # Errors
/// Returns an error when serialization fails.
pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("serialize snapshot")
}
