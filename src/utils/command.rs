//! Subprocess helpers for collectors that have to shell out.

use std::process::Command;

/// Run a command and return its trimmed stdout, or `None` when the binary
/// is missing or exits non-zero.
pub fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Check whether a program is reachable through PATH.
pub fn command_exists(program: &str) -> bool {
    std::env::var("PATH")
        .map(|path| {
            path.split(':')
                .any(|dir| std::path::Path::new(dir).join(program).is_file())
        })
        .unwrap_or(false)
}
