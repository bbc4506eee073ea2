use tokio::sync::{mpsc, oneshot};

use sb_core::ports::{HistoryPort, HistoryPortError};
use sb_core::{DisplayKey, HistorySnapshot};

use crate::ipc::PlatformCommand;

/// `HistoryPort` that asks the runtime over its command channel.
///
/// Cheap to clone; every clone talks to the same runtime.
#[derive(Clone)]
pub struct InMemoryHistory {
    cmd_tx: mpsc::Sender<PlatformCommand>,
}

impl InMemoryHistory {
    pub fn new(cmd_tx: mpsc::Sender<PlatformCommand>) -> Self {
        Self { cmd_tx }
    }

    async fn request<T, F>(&self, build: F) -> Result<T, HistoryPortError>
    where
        T: Send,
        F: FnOnce(oneshot::Sender<T>) -> PlatformCommand + Send,
    {
        let (reply, rx) = oneshot::channel();
        self.cmd_tx
            .send(build(reply))
            .await
            .map_err(|_| HistoryPortError::ChannelClosed)?;
        rx.await.map_err(|_| HistoryPortError::NoReply)
    }
}

#[async_trait::async_trait]
impl HistoryPort for InMemoryHistory {
    async fn snapshot(&self) -> Result<HistorySnapshot, HistoryPortError> {
        self.request(|reply| PlatformCommand::Snapshot { reply })
            .await
    }

    async fn lookup(&self, key: &DisplayKey) -> Result<Option<String>, HistoryPortError> {
        let key = key.clone();
        self.request(move |reply| PlatformCommand::Lookup { key, reply })
            .await
    }

    async fn recopy(&self, key: &DisplayKey) -> Result<String, HistoryPortError> {
        let key = key.clone();
        let text = self
            .request(move |reply| PlatformCommand::Recopy { key, reply })
            .await??;
        Ok(text)
    }
}
