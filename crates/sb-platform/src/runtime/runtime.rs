use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use sb_core::ports::{HistoryChangeHandler, SystemClipboardPort};
use sb_core::{ChangeCause, DisplayKey, HistoryChanged, HistoryError, HistoryStore, Insertion};

use super::event_bus::PlatformCommandReceiver;
use crate::clipboard::{ClipboardWatcher, TickOutcome};
use crate::ipc::PlatformCommand;

/// Owns the history store and serializes every access to it.
///
/// Watcher ticks and commands are handled one at a time on the task running
/// [`PlatformRuntime::start`], so capture and recopy can never interleave.
pub struct PlatformRuntime {
    store: HistoryStore,
    watcher: ClipboardWatcher,
    command_rx: PlatformCommandReceiver,
    poll_interval: Duration,
    watcher_running: bool,
    shutting_down: bool,
    change_handler: Option<Arc<dyn HistoryChangeHandler>>,
}

impl PlatformRuntime {
    pub fn new(
        store: HistoryStore,
        clipboard: Arc<dyn SystemClipboardPort>,
        command_rx: PlatformCommandReceiver,
        poll_interval: Duration,
        change_handler: Option<Arc<dyn HistoryChangeHandler>>,
    ) -> Self {
        Self {
            store,
            watcher: ClipboardWatcher::new(clipboard),
            command_rx,
            poll_interval,
            watcher_running: false,
            shutting_down: false,
            change_handler,
        }
    }

    pub async fn start(mut self) {
        info!(
            capacity = self.store.capacity(),
            recopy_mode = %self.store.recopy_mode(),
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Platform runtime started"
        );

        if let Err(err) = self.watcher.probe() {
            warn!(
                error = %err,
                "System clipboard is not readable; history stays empty until it is"
            );
        }

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.shutting_down {
            tokio::select! {
                _ = ticker.tick(), if self.watcher_running => {
                    self.on_tick().await;
                }
                command = self.command_rx.recv() => match command {
                    Some(cmd) => self.handle_command(cmd).await,
                    None => {
                        debug!("All command senders dropped");
                        self.shutting_down = true;
                    }
                },
            }
        }

        info!(entries = self.store.len(), "Platform runtime stopped");
    }

    async fn on_tick(&mut self) {
        match self.watcher.check_once(&mut self.store) {
            TickOutcome::Captured(Insertion::Inserted { key, evicted }) => {
                if let Some(evicted) = &evicted {
                    debug!(key = %evicted.redacted(), "Evicted oldest entry");
                }
                self.notify(ChangeCause::Captured { key, evicted }).await;
            }
            TickOutcome::Rejected(err) => {
                error!(error = %err, "Clipboard capture failed");
            }
            TickOutcome::Captured(Insertion::AlreadyPresent { .. })
            | TickOutcome::Known(_)
            | TickOutcome::Skipped(_) => {}
        }
    }

    async fn handle_command(&mut self, command: PlatformCommand) {
        match command {
            PlatformCommand::Shutdown => {
                self.shutting_down = true;
                info!("Platform runtime shutting down");
            }
            PlatformCommand::Snapshot { reply } => {
                if reply.send(self.store.snapshot()).is_err() {
                    debug!("Snapshot requester went away");
                }
            }
            PlatformCommand::Lookup { key, reply } => {
                let text = self.store.lookup(&key).map(str::to_string);
                if reply.send(text).is_err() {
                    debug!(key = %key.redacted(), "Lookup requester went away");
                }
            }
            PlatformCommand::Recopy { key, reply } => self.recopy(key, reply).await,
            PlatformCommand::StartClipboardWatcher => {
                if self.watcher_running {
                    debug!("Clipboard watcher already running, skipping start");
                } else {
                    self.watcher_running = true;
                    info!("Clipboard watcher started");
                }
            }
            PlatformCommand::StopClipboardWatcher => {
                if self.watcher_running {
                    self.watcher_running = false;
                    info!("Clipboard watcher stopped");
                } else {
                    debug!("Clipboard watcher already stopped");
                }
            }
        }
    }

    async fn recopy(
        &mut self,
        key: DisplayKey,
        reply: tokio::sync::oneshot::Sender<Result<String, HistoryError>>,
    ) {
        let result = self.store.recopy(&key);
        let removed = match &result {
            Ok(_) => {
                debug!(key = %key.redacted(), mode = %self.store.recopy_mode(), "Recopy served");
                self.store.recopy_mode().removes_entry()
            }
            Err(err) => {
                warn!(key = %key.redacted(), error = %err, "Recopy failed");
                false
            }
        };

        if reply.send(result).is_err() {
            warn!(key = %key.redacted(), "Recopy requester went away before the reply");
        }
        if removed {
            self.notify(ChangeCause::RecopyRemoved { key }).await;
        }
    }

    async fn notify(&self, cause: ChangeCause) {
        let Some(handler) = &self.change_handler else {
            debug!("History changed but no handler registered");
            return;
        };

        let change = HistoryChanged {
            snapshot: self.store.snapshot(),
            cause,
        };
        if let Err(e) = handler.on_history_changed(change).await {
            error!(error = %e, "Failed to handle history change");
        }
    }
}
