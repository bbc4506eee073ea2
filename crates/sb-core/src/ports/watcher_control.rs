use async_trait::async_trait;

/// Port for pausing and resuming clipboard capture.
///
/// Both calls are idempotent: resuming a running watcher or pausing a paused
/// one is not an error.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("failed to send start command: {0}")]
    StartFailed(String),

    #[error("failed to send stop command: {0}")]
    StopFailed(String),

    #[error("watcher channel closed")]
    ChannelClosed,
}
