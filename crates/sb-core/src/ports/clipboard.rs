//! System clipboard port - abstracts plain-text access to the OS clipboard.

use anyhow::Result;

/// Plain-text access to the OS clipboard.
///
/// Implementations are called from the runtime loop and from use cases, so
/// they must serialize access to the underlying handle themselves.
pub trait SystemClipboardPort: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// Returns `Ok(None)` when the clipboard holds no text (empty, image,
    /// files, ...). Errors are reserved for the clipboard being unreachable.
    fn read_text(&self) -> Result<Option<String>>;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<()>;
}
