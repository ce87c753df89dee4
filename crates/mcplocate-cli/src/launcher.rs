//! Hand-off to the operating system's default-application launcher.
//!
//! Fire-and-forget: the spawned process is not waited on, so the CLI
//! finishes regardless of what the editor does afterwards.

use std::path::Path;
use std::process::Command;

use crate::error::{CliError, Result};

/// Open `path` with the platform's default application.
pub fn launch(path: &Path) -> Result<()> {
    launch_command(path)
        .spawn()
        .map(drop)
        .map_err(|e| CliError::user(format!("Failed to open {}: {}", path.display(), e)))
}

#[cfg(target_os = "windows")]
fn launch_command(path: &Path) -> Command {
    // `start` is a cmd builtin; the empty string is its window title slot.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn launch_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launch_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
