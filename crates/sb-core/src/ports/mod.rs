//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the platform
//! implementations. The domain stays free of clipboard APIs, channels and
//! file systems; the platform crate implements these traits and the binary
//! wires them together.

pub mod app_dirs;
pub mod clipboard;
pub mod history;
mod history_change_handler;
pub mod watcher_control;

pub use app_dirs::{AppDirsError, AppDirsPort};
pub use clipboard::SystemClipboardPort;
pub use history::{HistoryPort, HistoryPortError};
pub use history_change_handler::HistoryChangeHandler;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
