//! snipboard application layer
//!
//! Use cases that sit between the front-end and the runtime. They only see
//! ports from `sb-core`, never the runtime itself.

pub mod usecases;

pub use usecases::clipboard::{EntryView, ListClipboardEntries, RecopyClipboardEntry};
pub use usecases::{StartClipboardWatcher, StopClipboardWatcher};
