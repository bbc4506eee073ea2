//! # Platform Adapters
//!
//! Implementations of the core ports that live next to the runtime.
//!
//! - `in_memory_clipboard` - Process-local clipboard, used when the OS clipboard is unavailable
//! - `in_memory_history` - `HistoryPort` over the runtime command channel
//! - `in_memory_watcher_control` - `WatcherControlPort` over the runtime command channel

pub mod in_memory_clipboard;
pub mod in_memory_history;
pub mod in_memory_watcher_control;

pub use in_memory_clipboard::InMemoryClipboard;
pub use in_memory_history::InMemoryHistory;
pub use in_memory_watcher_control::InMemoryWatcherControl;
