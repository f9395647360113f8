use arboard::Clipboard;

use crate::errors::{Result, WizardError};

/// Destination for the generated prompt's copy action.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard. Opened lazily so headless runs only fail when a
/// copy is actually requested.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => {
                let opened =
                    Clipboard::new().map_err(|err| WizardError::Clipboard(err.to_string()))?;
                self.inner.insert(opened)
            }
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| WizardError::Clipboard(err.to_string()))?;
        tracing::debug!(chars = text.chars().count(), "Copied prompt to clipboard");
        Ok(())
    }
}

/// Keeps copied text in memory; used by scripted runs and tests.
#[derive(Default, Debug)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
