use std::collections::HashSet;

use serde::Serialize;

use crate::types::Snapshot;

/// The interface delta between two snapshots. Derived on demand, never
/// persisted. Removals are breaking; additions are assumed backward
/// compatible, so `has_breaking` holds exactly when either removed
/// sequence is non-empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiffResult {
    pub removed_flags: Vec<String>,
    pub added_flags: Vec<String>,
    pub removed_commands: Vec<String>,
    pub added_commands: Vec<String>,
    pub has_breaking: bool,
}

/// Computes the interface delta from `old` to `current`.
///
/// Each output sequence preserves the order of the snapshot it was drawn
/// from: removals walk `old`, additions walk `current`. Pure and total over
/// any pair of snapshots, empty ones included.
pub fn diff(old: &Snapshot, current: &Snapshot) -> DiffResult {
    let removed_flags = subtract(&old.flags, &current.flags);
    let added_flags = subtract(&current.flags, &old.flags);
    let removed_commands = subtract(&old.subcommands, &current.subcommands);
    let added_commands = subtract(&current.subcommands, &old.subcommands);
    let has_breaking = !removed_flags.is_empty() || !removed_commands.is_empty();
    DiffResult {
        removed_flags,
        added_flags,
        removed_commands,
        added_commands,
        has_breaking,
    }
}

/// Elements of `from` that are missing from `present`, in `from` order.
/// Duplicates in `from` stay duplicated; membership is a set probe.
fn subtract<'a>(
    from: impl IntoIterator<Item = &'a String>,
    present: impl IntoIterator<Item = &'a String>,
) -> Vec<String> {
    let present: HashSet<&str> = present.into_iter().map(String::as_str).collect();
    from.into_iter()
        .filter(|item| !present.contains(item.as_str()))
        .cloned()
        .collect()
}
