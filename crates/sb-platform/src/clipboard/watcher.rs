//! Clipboard watcher.
//!
//! The watcher is the capture half of the runtime: on every tick it samples
//! the system clipboard once, asks the core capture rules what to do with the
//! sample, and inserts new text into the history store.
//!
//! ```text
//! System Clipboard
//!      ↓
//! SystemClipboardPort
//!      ↓
//! ClipboardWatcher::check_once   (this module)
//!      ↓
//! HistoryStore::insert
//!      ↓
//! TickOutcome → PlatformRuntime → HistoryChangeHandler
//! ```
//!
//! The watcher never owns the store. The runtime lends it for the duration of
//! one tick, which keeps every mutation on the runtime task.
//!
//! Read failures are treated as "nothing to capture". The first failure of a
//! streak is logged, then every tenth, so a clipboard that stays unreadable
//! does not flood the log at the polling rate.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, trace, warn};

use sb_core::clipboard::decide;
use sb_core::ports::SystemClipboardPort;
use sb_core::{CaptureDecision, DisplayKey, HistoryError, HistoryStore, Insertion, SkipReason};

const FAILURE_LOG_EVERY: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Idle,
    Sampling,
}

/// Result of a single watcher tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing usable on the clipboard.
    Skipped(SkipReason),
    /// The clipboard holds text already recorded under this key.
    Known(DisplayKey),
    /// The sample reached the store.
    Captured(Insertion),
    /// The store refused the sample.
    Rejected(HistoryError),
}

impl TickOutcome {
    /// Returns true when the tick changed the visible history.
    pub fn changed_history(&self) -> bool {
        matches!(self, TickOutcome::Captured(Insertion::Inserted { .. }))
    }
}

pub struct ClipboardWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    state: WatcherState,
    consecutive_failures: u32,
}

impl ClipboardWatcher {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self {
            clipboard,
            state: WatcherState::Idle,
            consecutive_failures: 0,
        }
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Reads the clipboard once without touching any history.
    pub fn probe(&self) -> Result<()> {
        self.clipboard.read_text().map(|_| ())
    }

    /// Samples the clipboard and records it in `store` when it is new text.
    pub fn check_once(&mut self, store: &mut HistoryStore) -> TickOutcome {
        self.state = WatcherState::Sampling;
        let sample = self.sample();

        let outcome = match decide(sample.as_deref(), store) {
            CaptureDecision::Skip(reason) => TickOutcome::Skipped(reason),
            CaptureDecision::Known(key) => TickOutcome::Known(key),
            CaptureDecision::Capture { text, key } => match store.insert(&text) {
                Ok(insertion) => {
                    debug!(key = %key.redacted(), entries = store.len(), "captured clipboard text");
                    TickOutcome::Captured(insertion)
                }
                Err(err) => {
                    warn!(key = %key.redacted(), error = %err, "history rejected clipboard text");
                    TickOutcome::Rejected(err)
                }
            },
        };

        self.state = WatcherState::Idle;
        trace!(?outcome, "watcher tick finished");
        outcome
    }

    fn sample(&mut self) -> Option<String> {
        match self.clipboard.read_text() {
            Ok(text) => {
                if self.consecutive_failures > 0 {
                    debug!(
                        failures = self.consecutive_failures,
                        "clipboard readable again"
                    );
                    self.consecutive_failures = 0;
                }
                text
            }
            Err(err) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                if self.consecutive_failures == 1
                    || self.consecutive_failures % FAILURE_LOG_EVERY == 0
                {
                    warn!(
                        error = %err,
                        failures = self.consecutive_failures,
                        "failed to read clipboard"
                    );
                }
                None
            }
        }
    }
}
