//! Clipboard functionality for copying calculator results.

use anyhow::Context;
use arboard::Clipboard;
use tracing::debug;

/// Copy text to the system clipboard.
///
/// On X11 and Wayland the clipboard is served by the process that set it,
/// so this blocks until another program takes the contents over.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;

    debug!(len = text.len(), "copying result to clipboard");
    set_text(&mut clipboard, text).context("Failed to copy to clipboard")?;

    debug!("clipboard contents handed over");
    Ok(())
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text.to_string())
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}
