use std::fmt::Write as _;

use crate::diff::DiffResult;

/// Renders a diff as the human-readable change report.
///
/// Category order is fixed: removed flags, removed subcommands, added
/// flags, added subcommands. A breaking result gains a blank line and a
/// warning trailer; mapping `has_breaking` onto the process exit status is
/// the caller's job.
pub fn render(result: &DiffResult) -> String {
    let nothing_added = result.added_flags.is_empty() && result.added_commands.is_empty();
    if !result.has_breaking && nothing_added {
        return "✅ No changes detected.\n".to_string();
    }

    let mut out = String::new();
    for flag in &result.removed_flags {
        let _ = writeln!(out, "❌ BREAKING: flag removed: {flag}");
    }
    for name in &result.removed_commands {
        let _ = writeln!(out, "❌ BREAKING: subcommand removed: {name}");
    }
    for flag in &result.added_flags {
        let _ = writeln!(out, "✅ Added flag: {flag}");
    }
    for name in &result.added_commands {
        let _ = writeln!(out, "✅ Added subcommand: {name}");
    }
    if result.has_breaking {
        let _ = writeln!(out, "\n⚠️  Breaking changes detected! Exit code 1.");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_changes_message() {
        assert_eq!(render(&DiffResult::default()), "✅ No changes detected.\n");
    }

    #[test]
    fn breaking_report_keeps_category_order_and_warns() {
        let r = DiffResult {
            removed_flags: vec!["--format".to_string()],
            added_flags: vec!["--json".to_string()],
            removed_commands: vec!["deploy".to_string()],
            added_commands: vec![],
            has_breaking: true,
        };
        let want = concat!(
            "❌ BREAKING: flag removed: --format\n",
            "❌ BREAKING: subcommand removed: deploy\n",
            "✅ Added flag: --json\n",
            "\n⚠️  Breaking changes detected! Exit code 1.\n",
        );
        assert_eq!(render(&r), want);
    }

    #[test]
    fn additive_report_has_no_warning_trailer() {
        let r = DiffResult {
            added_flags: vec!["--debug".to_string()],
            added_commands: vec!["build".to_string()],
            ..Default::default()
        };
        let want = concat!("✅ Added flag: --debug\n", "✅ Added subcommand: build\n");
        assert_eq!(render(&r), want);
    }

    #[test]
    fn every_entry_gets_its_own_line() {
        let r = DiffResult {
            removed_flags: vec!["--a".to_string(), "--b".to_string()],
            has_breaking: true,
            ..Default::default()
        };
        let out = render(&r);
        assert_eq!(out.lines().filter(|l| l.contains("BREAKING")).count(), 2);
    }
}
