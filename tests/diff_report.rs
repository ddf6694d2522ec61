use std::fs;
use std::path::Path;
use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_cliface")
}

fn write_snapshot(path: &Path, flags: &[&str], subcommands: &[&str]) {
    let v = serde_json::json!({
        "command": "demo",
        "flags": flags,
        "subcommands": subcommands,
        "captured_at": "2024-06-01T12:00:00Z",
    });
    fs::write(path, serde_json::to_string_pretty(&v).unwrap()).unwrap();
}

#[test]
fn removed_entries_fail_with_exit_code_1() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    write_snapshot(&old, &["--format", "--color"], &["build", "deploy"]);
    write_snapshot(&new, &["--color", "--theme"], &["build"]);

    let out = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .output()
        .expect("run diff");
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("❌ BREAKING: flag removed: --format"));
    assert!(stdout.contains("❌ BREAKING: subcommand removed: deploy"));
    assert!(stdout.contains("✅ Added flag: --theme"));
    assert!(stdout.contains("⚠️  Breaking changes detected! Exit code 1."));
    // Removals come before additions.
    assert!(stdout.find("BREAKING").unwrap() < stdout.find("Added").unwrap());
}

#[test]
fn additions_alone_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    write_snapshot(&old, &["--color"], &["build"]);
    write_snapshot(&new, &["--color", "--json"], &["build", "serve"]);

    let out = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .output()
        .expect("run diff");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✅ Added flag: --json"));
    assert!(stdout.contains("✅ Added subcommand: serve"));
    assert!(!stdout.contains("BREAKING"));
    assert!(!stdout.contains("⚠️"));
}

#[test]
fn identical_snapshots_report_no_changes() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    write_snapshot(&old, &["--color"], &["build"]);
    write_snapshot(&new, &["--color"], &["build"]);

    let out = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .output()
        .expect("run diff");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "✅ No changes detected.\n"
    );
}

#[test]
fn null_sequences_in_a_snapshot_still_diff() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    // A snapshot of a command with nothing to report may carry null
    // sequences instead of empty arrays.
    fs::write(
        &old,
        r#"{"command":"demo","flags":null,"subcommands":null,"captured_at":"t"}"#,
    )
    .unwrap();
    write_snapshot(&new, &["--color"], &[]);

    let out = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .output()
        .expect("run diff");
    assert!(
        out.status.success(),
        "diff failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✅ Added flag: --color"));
    assert!(!stdout.contains("BREAKING"));
}

#[test]
fn json_output_carries_the_raw_diff() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    write_snapshot(&old, &["--format"], &["build"]);
    write_snapshot(&new, &[], &["build"]);

    let out = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .arg("--json")
        .output()
        .expect("run diff --json");
    // JSON mode still signals breakage through the exit code.
    assert_eq!(out.status.code(), Some(1));
    let v: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&out.stdout)).unwrap();
    assert_eq!(v["has_breaking"], serde_json::json!(true));
    assert_eq!(v["removed_flags"], serde_json::json!(["--format"]));
    assert_eq!(v["added_flags"], serde_json::json!([]));
    assert_eq!(v["removed_commands"], serde_json::json!([]));
}
