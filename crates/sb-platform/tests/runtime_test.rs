//! End-to-end runtime behaviour: a fake clipboard written by "other
//! applications", the runtime polling it, and callers going through the
//! channel adapters.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use sb_core::ports::{
    HistoryChangeHandler, HistoryPort, HistoryPortError, SystemClipboardPort, WatcherControlPort,
};
use sb_core::{
    ChangeCause, DisplayKey, HistoryChanged, HistoryConfig, HistoryError, HistoryStore,
    RecopyMode,
};
use sb_platform::adapters::{InMemoryClipboard, InMemoryHistory, InMemoryWatcherControl};
use sb_platform::ipc::PlatformCommand;
use sb_platform::runtime::{command_channel, PlatformCommandSender, PlatformRuntime};

const POLL: Duration = Duration::from_millis(100);

struct ChannelHandler {
    tx: mpsc::UnboundedSender<HistoryChanged>,
}

#[async_trait::async_trait]
impl HistoryChangeHandler for ChannelHandler {
    async fn on_history_changed(&self, change: HistoryChanged) -> Result<()> {
        self.tx
            .send(change)
            .map_err(|err| anyhow::anyhow!("handler send failed: {err}"))
    }
}

struct Harness {
    clipboard: Arc<InMemoryClipboard>,
    history: InMemoryHistory,
    control: InMemoryWatcherControl,
    changes: mpsc::UnboundedReceiver<HistoryChanged>,
    cmd_tx: PlatformCommandSender,
    task: JoinHandle<()>,
}

impl Harness {
    async fn start(capacity: usize, recopy_mode: RecopyMode) -> Self {
        let store = HistoryStore::new(&HistoryConfig {
            capacity,
            max_display_chars: 60,
            recopy_mode,
        })
        .expect("valid config");
        let clipboard = Arc::new(InMemoryClipboard::new());
        let (cmd_tx, cmd_rx) = command_channel();
        let (change_tx, changes) = mpsc::unbounded_channel();

        let runtime = PlatformRuntime::new(
            store,
            clipboard.clone() as Arc<dyn SystemClipboardPort>,
            cmd_rx,
            POLL,
            Some(Arc::new(ChannelHandler { tx: change_tx })),
        );
        let task = tokio::spawn(runtime.start());

        let control = InMemoryWatcherControl::new(cmd_tx.clone());
        control.start_watcher().await.expect("start watcher");

        Self {
            clipboard,
            history: InMemoryHistory::new(cmd_tx.clone()),
            control,
            changes,
            cmd_tx,
            task,
        }
    }

    /// Put `text` on the clipboard and let the watcher see it.
    async fn copy(&self, text: &str) {
        self.clipboard.set_external(text);
        tick().await;
    }

    async fn keys(&self) -> Vec<String> {
        self.history
            .snapshot()
            .await
            .expect("snapshot")
            .keys
            .into_iter()
            .map(DisplayKey::into_inner)
            .collect()
    }

    async fn shutdown(self) {
        self.cmd_tx
            .send(PlatformCommand::Shutdown)
            .await
            .expect("send shutdown");
        self.task.await.expect("runtime task");
    }
}

async fn tick() {
    tokio::time::sleep(POLL * 2).await;
}

#[tokio::test(start_paused = true)]
async fn captures_in_most_recent_first_order_with_eviction() {
    let mut h = Harness::start(3, RecopyMode::Consuming).await;

    for text in ["alpha", "beta", "gamma", "delta"] {
        h.copy(text).await;
    }

    assert_eq!(h.keys().await, vec!["delta", "gamma", "beta"]);

    let mut causes = Vec::new();
    while let Ok(change) = h.changes.try_recv() {
        causes.push(change.cause);
    }
    assert_eq!(causes.len(), 4);
    assert_eq!(
        causes[3],
        ChangeCause::Captured {
            key: DisplayKey::from("delta"),
            evicted: Some(DisplayKey::from("alpha")),
        }
    );

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn unchanged_clipboard_is_captured_once() {
    let mut h = Harness::start(5, RecopyMode::Consuming).await;

    h.copy("same").await;
    tick().await;
    tick().await;

    assert_eq!(h.keys().await, vec!["same"]);
    assert!(h.changes.try_recv().is_ok());
    assert!(h.changes.try_recv().is_err());

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn consuming_recopy_removes_then_recaptures_at_head() {
    let mut h = Harness::start(5, RecopyMode::Consuming).await;
    h.copy("first").await;
    h.copy("second").await;
    while h.changes.try_recv().is_ok() {}

    let key = DisplayKey::from("first");
    let text = h.history.recopy(&key).await.expect("recopy");
    assert_eq!(text, "first");

    let removed = h.changes.recv().await.expect("removal notification");
    assert_eq!(removed.cause, ChangeCause::RecopyRemoved { key: key.clone() });
    assert_eq!(removed.snapshot.keys, vec![DisplayKey::from("second")]);

    // the caller writes the text back; the watcher picks it up as new
    h.clipboard.write_text(&text).unwrap();
    tick().await;
    assert_eq!(h.keys().await, vec!["first", "second"]);

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn non_consuming_recopy_keeps_order() {
    let mut h = Harness::start(5, RecopyMode::NonConsuming).await;
    h.copy("first").await;
    h.copy("second").await;
    while h.changes.try_recv().is_ok() {}

    let text = h
        .history
        .recopy(&DisplayKey::from("first"))
        .await
        .expect("recopy");
    h.clipboard.write_text(&text).unwrap();
    tick().await;

    assert_eq!(h.keys().await, vec!["second", "first"]);
    assert!(h.changes.try_recv().is_err());

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn recopy_and_lookup_of_evicted_key() {
    let h = Harness::start(2, RecopyMode::Consuming).await;
    h.copy("one").await;
    h.copy("two").await;
    h.copy("three").await;

    let gone = DisplayKey::from("one");
    assert_eq!(h.history.lookup(&gone).await.unwrap(), None);
    assert!(matches!(
        h.history.recopy(&gone).await,
        Err(HistoryPortError::History(HistoryError::NotFound(_)))
    ));
    assert_eq!(
        h.history.lookup(&DisplayKey::from("two")).await.unwrap(),
        Some("two".to_string())
    );

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn paused_watcher_ignores_clipboard_until_resumed() {
    let h = Harness::start(5, RecopyMode::Consuming).await;
    h.copy("before").await;

    h.control.stop_watcher().await.unwrap();
    // commands are served in order, so the stop has landed once this replies
    assert_eq!(h.keys().await, vec!["before"]);
    h.copy("while paused").await;
    assert_eq!(h.keys().await, vec!["before"]);

    h.control.start_watcher().await.unwrap();
    tick().await;
    assert_eq!(h.keys().await, vec!["while paused", "before"]);

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn blank_and_empty_clipboard_never_create_entries() {
    let h = Harness::start(5, RecopyMode::Consuming).await;

    h.copy("   \n\t").await;
    h.clipboard.clear();
    tick().await;

    assert!(h.keys().await.is_empty());

    h.shutdown().await;
}

#[tokio::test]
async fn history_port_reports_stopped_runtime() {
    let (cmd_tx, cmd_rx) = command_channel();
    drop(cmd_rx);
    let history = InMemoryHistory::new(cmd_tx);

    assert!(matches!(
        history.snapshot().await,
        Err(HistoryPortError::ChannelClosed)
    ));
}
