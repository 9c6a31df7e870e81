use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use which::which;

use super::os::Platform;

/// Picks the first clipboard helper present on this platform. Linux tries the
/// Wayland helper before the X11 ones.
pub fn clipboard_command(platform: Platform) -> Option<(&'static str, &'static [&'static str])> {
    let candidates: &[(&str, &[&str])] = match platform {
        Platform::Mac => &[("pbcopy", &[])],
        Platform::Windows | Platform::Wsl => &[("clip.exe", &[])],
        Platform::Linux => &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ],
        Platform::Unknown => return None,
    };

    candidates
        .iter()
        .find(|(binary, _)| which(binary).is_ok())
        .copied()
}

pub fn copy_to_clipboard(text: &str, platform: Platform) -> Result<()> {
    let (binary, args) = clipboard_command(platform)
        .context("no clipboard helper found (pbcopy, clip.exe, wl-copy, xclip or xsel)")?;

    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to start {binary}"))?;

    child
        .stdin
        .take()
        .context("clipboard helper has no stdin")?
        .write_all(text.as_bytes())
        .with_context(|| format!("failed to pipe into {binary}"))?;

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {binary}"))?;
    if !status.success() {
        anyhow::bail!("{binary} exited with status {status}");
    }

    Ok(())
}
