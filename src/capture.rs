use std::process::Command;

/// Runs `<command> --help` and returns everything it printed, stdout first
/// and stderr after it. Tools that route usage text to stderr still get
/// their surface captured.
///
/// A command that cannot be spawned at all yields an empty string; a
/// command that runs but exits non-zero still contributes its output,
/// since plenty of tools exit 1 or 2 on `--help`.
pub fn capture_help(command: &str) -> String {
    match Command::new(command).arg("--help").output() {
        Ok(out) => {
            if !out.status.success() {
                log::debug!("{command} --help exited with {}", out.status);
            }
            let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&out.stderr));
            log::debug!("captured {} bytes of help text from {command}", text.len());
            text
        }
        Err(err) => {
            log::warn!("could not run {command} --help: {err}; snapshotting empty output");
            String::new()
        }
    }
}
