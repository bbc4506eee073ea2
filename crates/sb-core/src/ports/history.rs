//! History port - how code outside the runtime reaches the history store.
//!
//! The store is owned by a single runtime task. Everything else (use cases,
//! front-ends) talks to it through this port, which keeps every mutation on
//! the runtime's timeline.

use async_trait::async_trait;
use thiserror::Error;

use crate::clipboard::DisplayKey;
use crate::history::{HistoryError, HistorySnapshot};

#[derive(Debug, Error)]
pub enum HistoryPortError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("history runtime is not running")]
    ChannelClosed,

    #[error("history runtime dropped the reply")]
    NoReply,
}

#[async_trait]
pub trait HistoryPort: Send + Sync {
    /// Current order, most recent first.
    async fn snapshot(&self) -> Result<HistorySnapshot, HistoryPortError>;

    /// Full text behind `key`, if it is still in the history.
    async fn lookup(&self, key: &DisplayKey) -> Result<Option<String>, HistoryPortError>;

    /// Run the store's recopy for `key` and return the text to write back.
    async fn recopy(&self, key: &DisplayKey) -> Result<String, HistoryPortError>;
}
