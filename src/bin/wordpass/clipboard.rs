use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

pub(crate) fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut child = clipboard_cmd()
        .stdin(Stdio::piped())
        .spawn()
        .context("failed to start the clipboard command")?;
    child
        .stdin
        .take()
        .context("the clipboard command has no stdin")?
        .write_all(data)
        .context("failed to write to the clipboard command")?;
    let status = child
        .wait()
        .context("failed to wait for the clipboard command")?;
    if !status.success() {
        anyhow::bail!("the clipboard command exited with {}", status);
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
