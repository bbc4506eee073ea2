//! # Dependency Injection
//!
//! The only place that depends on sb-platform and sb-app together. It builds
//! the adapters, hands them to the use cases as ports, and does nothing else:
//! no business decisions, no config validation.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use sb_app::{ListClipboardEntries, RecopyClipboardEntry, StartClipboardWatcher, StopClipboardWatcher};
use sb_core::config::AppConfig;
use sb_core::ports::{HistoryChangeHandler, HistoryPort, SystemClipboardPort, WatcherControlPort};
use sb_core::HistoryStore;
use sb_platform::adapters::{InMemoryClipboard, InMemoryHistory, InMemoryWatcherControl};
use sb_platform::clipboard::ArboardClipboard;
use sb_platform::runtime::{command_channel, PlatformCommandSender, PlatformRuntime};

use crate::console::{Console, ConsoleRenderer, RenderedList};

/// Everything `serve` needs, fully assembled.
pub struct AppWiring {
    pub runtime: PlatformRuntime,
    pub console: Console,
    pub start_watcher: StartClipboardWatcher,
    pub command_tx: PlatformCommandSender,
}

/// Open the OS clipboard, or a process-local one when there is none.
pub fn open_system_clipboard() -> Arc<dyn SystemClipboardPort> {
    match ArboardClipboard::new() {
        Ok(clipboard) => {
            info!("Using system clipboard");
            Arc::new(clipboard)
        }
        Err(err) => {
            warn!(
                error = %err,
                "System clipboard unavailable, history is limited to this process"
            );
            Arc::new(InMemoryClipboard::new())
        }
    }
}

pub fn wire_app(
    config: &AppConfig,
    clipboard: Arc<dyn SystemClipboardPort>,
    out: Box<dyn Write + Send>,
) -> anyhow::Result<AppWiring> {
    let store = HistoryStore::new(&config.history).context("Failed to create history store")?;
    let (command_tx, command_rx) = command_channel();

    let history: Arc<dyn HistoryPort> = Arc::new(InMemoryHistory::new(command_tx.clone()));
    let watcher_control: Arc<dyn WatcherControlPort> =
        Arc::new(InMemoryWatcherControl::new(command_tx.clone()));

    let rendered = RenderedList::new();
    let renderer = Arc::new(ConsoleRenderer::new(out, rendered.clone()));

    let runtime = PlatformRuntime::new(
        store,
        clipboard.clone(),
        command_rx,
        config.watcher.poll_interval,
        Some(renderer.clone() as Arc<dyn HistoryChangeHandler>),
    );

    let console = Console::new(
        ListClipboardEntries::new(history.clone()),
        RecopyClipboardEntry::new(history, clipboard),
        StartClipboardWatcher::new(watcher_control.clone()),
        StopClipboardWatcher::new(watcher_control.clone()),
        renderer,
        rendered,
    );

    Ok(AppWiring {
        runtime,
        console,
        start_watcher: StartClipboardWatcher::new(watcher_control),
        command_tx,
    })
}
