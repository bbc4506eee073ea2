//! History change handler port
//!
//! The runtime calls this after every mutation of the history so the
//! rendering side can refresh. The platform layer depends on this
//! abstraction; the front-end implements it.

use anyhow::Result;

use crate::history::HistoryChanged;

#[async_trait::async_trait]
pub trait HistoryChangeHandler: Send + Sync {
    /// Called once per mutation, in mutation order.
    async fn on_history_changed(&self, change: HistoryChanged) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::DisplayKey;
    use crate::history::{ChangeCause, HistorySnapshot};
    use std::sync::{Arc, Mutex};

    struct Recorder {
        seen: Mutex<Vec<u64>>,
    }

    #[async_trait::async_trait]
    impl HistoryChangeHandler for Recorder {
        async fn on_history_changed(&self, change: HistoryChanged) -> Result<()> {
            self.seen
                .lock()
                .map_err(|_| anyhow::anyhow!("poisoned"))?
                .push(change.snapshot.version);
            Ok(())
        }
    }

    #[tokio::test]
    async fn handler_is_usable_as_trait_object() {
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
        });
        let handler: Arc<dyn HistoryChangeHandler> = recorder.clone();

        handler
            .on_history_changed(HistoryChanged {
                snapshot: HistorySnapshot {
                    version: 7,
                    keys: vec![DisplayKey::from("a")],
                },
                cause: ChangeCause::Captured {
                    key: DisplayKey::from("a"),
                    evicted: None,
                },
            })
            .await
            .unwrap();

        assert_eq!(*recorder.seen.lock().unwrap(), vec![7]);
    }
}
