pub mod list_clipboard_entries;
pub mod recopy_clipboard_entry;

pub use list_clipboard_entries::{entry_views, EntryView, ListClipboardEntries, ListEntriesError};
pub use recopy_clipboard_entry::{RecopyClipboardEntry, RecopyError};
