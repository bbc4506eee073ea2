use sb_core::ports::{WatcherControlError, WatcherControlPort};
use tokio::sync::mpsc;

use crate::ipc::PlatformCommand;

/// Watcher control that forwards pause/resume to the runtime.
///
/// Sending only enqueues the command. The runtime applies it on its next
/// loop iteration, and repeated starts or stops are no-ops there.
pub struct InMemoryWatcherControl {
    cmd_tx: mpsc::Sender<PlatformCommand>,
}

impl InMemoryWatcherControl {
    pub fn new(cmd_tx: mpsc::Sender<PlatformCommand>) -> Self {
        Self { cmd_tx }
    }

    async fn send(
        &self,
        command: PlatformCommand,
        on_error: fn(String) -> WatcherControlError,
    ) -> Result<(), WatcherControlError> {
        self.cmd_tx.send(command).await.map_err(|e| {
            if self.cmd_tx.is_closed() {
                WatcherControlError::ChannelClosed
            } else {
                on_error(e.to_string())
            }
        })
    }
}

#[async_trait::async_trait]
impl WatcherControlPort for InMemoryWatcherControl {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StartClipboardWatcher,
            WatcherControlError::StartFailed,
        )
        .await
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StopClipboardWatcher,
            WatcherControlError::StopFailed,
        )
        .await
    }
}
