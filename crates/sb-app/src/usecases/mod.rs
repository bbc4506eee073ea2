//! Business logic use cases
//!
//! [ClipboardWatcher]
//        ↓
// HistoryStore (owned by the runtime)
//        ↓
// ---------------------------------
//        ↓
// ListClipboardEntries   → rendered list
// RecopyClipboardEntry   → store recopy, then system clipboard write
// ---------------------------------
// Start/StopClipboardWatcher → pause / resume capture

pub mod clipboard;
pub mod watcher;

pub use watcher::{StartClipboardWatcher, StopClipboardWatcher, WatcherUseCaseError};
