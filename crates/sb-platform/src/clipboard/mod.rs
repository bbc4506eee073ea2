mod system;
pub mod watcher;

pub use system::ArboardClipboard;
pub use watcher::{ClipboardWatcher, TickOutcome, WatcherState};
