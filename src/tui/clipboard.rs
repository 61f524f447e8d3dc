//! System clipboard backed by `arboard`
//!
//! The clipboard is opened fresh for every write so no display-server handle
//! is held between copies. Typical failures: no display server (headless
//! Linux), permission denied.

use crate::catalogue::ClipboardSink;
use anyhow::{Context, Result};
use arboard::Clipboard;

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}
