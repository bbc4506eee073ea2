use std::sync::Mutex;

use anyhow::{anyhow, Result};
use sb_core::ports::SystemClipboardPort;

/// Clipboard that lives only inside this process.
///
/// Stands in for the OS clipboard when it cannot be opened (headless
/// sessions, CI) and lets tests play the part of "another application"
/// via [`InMemoryClipboard::set_external`].
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    text: Mutex<Option<String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
        }
    }

    /// Replace the content as if another application had copied `text`.
    pub fn set_external(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.text.lock() {
            *guard = Some(text.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.text.lock() {
            *guard = None;
        }
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let guard = self
            .text
            .lock()
            .map_err(|_| anyhow!("in-memory clipboard mutex poisoned"))?;
        Ok(guard.clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .text
            .lock()
            .map_err(|_| anyhow!("in-memory clipboard mutex poisoned"))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}
