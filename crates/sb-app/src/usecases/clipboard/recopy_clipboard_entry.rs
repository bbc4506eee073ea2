//! Use case for putting a history entry back on the system clipboard

use std::sync::Arc;

use tracing::{error, info, info_span, warn, Instrument};

use sb_core::ports::{HistoryPort, HistoryPortError, SystemClipboardPort};
use sb_core::{DisplayKey, HistoryError};

#[derive(Debug, thiserror::Error)]
pub enum RecopyError {
    #[error("No history entry for {}", .0.redacted())]
    NotFound(DisplayKey),

    #[error("History unavailable: {0}")]
    HistoryUnavailable(HistoryPortError),

    #[error("Failed to write clipboard: {0}")]
    ClipboardWrite(String),
}

impl From<HistoryPortError> for RecopyError {
    fn from(err: HistoryPortError) -> Self {
        match err {
            HistoryPortError::History(HistoryError::NotFound(key)) => RecopyError::NotFound(key),
            other => RecopyError::HistoryUnavailable(other),
        }
    }
}

/// Copy a recorded clipping back into the system clipboard.
///
/// The store decides what recopy means (consuming or not) and hands back the
/// full text; this use case then writes it. In consuming mode the watcher
/// sees the written text as new and records it again at the head.
pub struct RecopyClipboardEntry {
    history: Arc<dyn HistoryPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl RecopyClipboardEntry {
    pub fn new(history: Arc<dyn HistoryPort>, clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { history, clipboard }
    }

    pub async fn execute(&self, key: &DisplayKey) -> Result<(), RecopyError> {
        let span = info_span!("usecase.recopy_clipboard_entry.execute", key = %key.redacted());

        async {
            let text = match self.history.recopy(key).await {
                Ok(text) => text,
                Err(err) => {
                    let err = RecopyError::from(err);
                    warn!(error = %err, "Recopy rejected");
                    return Err(err);
                }
            };

            if let Err(err) = self.clipboard.write_text(&text) {
                // a consuming recopy has already dropped the entry
                error!(error = %err, chars = text.chars().count(), "Clipboard write failed after recopy");
                return Err(RecopyError::ClipboardWrite(err.to_string()));
            }

            info!(chars = text.chars().count(), "Entry copied back to clipboard");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
