//! Use case for listing clipboard history entries

use std::sync::Arc;

use sb_core::ports::{HistoryPort, HistoryPortError};
use sb_core::{DisplayKey, HistorySnapshot};

/// One row of the rendered history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// 1-based position, most recent first.
    pub index: usize,
    pub key: DisplayKey,
    /// The head entry mirrors what is on the clipboard right now.
    pub is_current: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ListEntriesError {
    #[error("Failed to read history: {0}")]
    HistoryUnavailable(#[from] HistoryPortError),
}

/// Turn a snapshot into numbered rows.
pub fn entry_views(snapshot: &HistorySnapshot) -> Vec<EntryView> {
    snapshot
        .iter()
        .enumerate()
        .map(|(i, key)| EntryView {
            index: i + 1,
            key: key.clone(),
            is_current: i == 0,
        })
        .collect()
}

pub struct ListClipboardEntries {
    history: Arc<dyn HistoryPort>,
}

impl ListClipboardEntries {
    pub fn new(history: Arc<dyn HistoryPort>) -> Self {
        Self { history }
    }

    pub async fn execute(&self) -> Result<Vec<EntryView>, ListEntriesError> {
        let snapshot = self.history.snapshot().await?;
        tracing::debug!(
            version = snapshot.version,
            entries = snapshot.len(),
            "Listed clipboard entries"
        );
        Ok(entry_views(&snapshot))
    }
}
