//! System clipboard access
//!
//! `arboard` works on Windows, macOS and X11/Wayland. A fresh handle is
//! opened per copy; holding one open for the whole session keeps an X11
//! selection owner alive in the background.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails on headless Linux (no display server) or when access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
