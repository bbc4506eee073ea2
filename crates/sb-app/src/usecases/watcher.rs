//! Use cases for pausing and resuming clipboard capture.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use sb_core::ports::WatcherControlPort;

#[derive(Debug, thiserror::Error)]
pub enum WatcherUseCaseError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}

/// Requests the clipboard watcher to start.
///
/// Idempotent: starting an already-running watcher is safe.
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), WatcherUseCaseError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to start");

            self.watcher_control
                .start_watcher()
                .await
                .map_err(|e| WatcherUseCaseError::StartFailed(e.to_string()))?;

            info!("Clipboard watcher start requested");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Requests the clipboard watcher to stop. Stopping twice is fine.
pub struct StopClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), WatcherUseCaseError> {
        let span = info_span!("usecase.stop_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to stop");

            self.watcher_control
                .stop_watcher()
                .await
                .map_err(|e| WatcherUseCaseError::StopFailed(e.to_string()))?;

            info!("Clipboard watcher stop requested");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
