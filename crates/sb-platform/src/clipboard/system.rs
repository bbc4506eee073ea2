use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use sb_core::ports::SystemClipboardPort;

/// OS clipboard backed by `arboard`.
///
/// `arboard::Clipboard` needs `&mut self` for every call, so the handle sits
/// behind a mutex shared by the runtime loop and the use cases.
pub struct ArboardClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().context("failed to open the system clipboard")?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, arboard::Clipboard>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("system clipboard mutex poisoned"))
    }
}

impl SystemClipboardPort for ArboardClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        match self.lock()?.get_text() {
            Ok(text) => Ok(Some(text)),
            // empty clipboard, or only non-text formats
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(err) => Err(anyhow!(err).context("failed to read clipboard text")),
        }
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.lock()?
            .set_text(text)
            .context("failed to write clipboard text")
    }
}
