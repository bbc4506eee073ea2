use tokio::sync::oneshot;

use sb_core::{DisplayKey, HistoryError, HistorySnapshot};

/// Requests served by [`crate::runtime::PlatformRuntime`].
///
/// Queries carry a oneshot sender for the answer. Lifecycle commands are
/// fire-and-forget.
#[derive(Debug)]
pub enum PlatformCommand {
    /// Current history order.
    Snapshot {
        reply: oneshot::Sender<HistorySnapshot>,
    },
    /// Full text behind a display key.
    Lookup {
        key: DisplayKey,
        reply: oneshot::Sender<Option<String>>,
    },
    /// Take an entry's text per the configured recopy mode.
    Recopy {
        key: DisplayKey,
        reply: oneshot::Sender<Result<String, HistoryError>>,
    },
    /// Resume sampling the clipboard.
    StartClipboardWatcher,
    /// Pause sampling. Recopy and lookups keep working.
    StopClipboardWatcher,
    /// Leave the run loop.
    Shutdown,
}
