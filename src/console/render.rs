use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sb_app::usecases::clipboard::entry_views;
use sb_app::EntryView;
use sb_core::ports::HistoryChangeHandler;
use sb_core::{ChangeCause, DisplayKey, HistoryChanged};

/// The list as the user last saw it.
///
/// Numbers typed at the prompt resolve against this list, so a selection
/// always names the key that was on screen even if the history has moved on
/// since.
#[derive(Debug, Clone, Default)]
pub struct RenderedList {
    entries: Arc<Mutex<Vec<EntryView>>>,
}

impl RenderedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, entries: Vec<EntryView>) -> Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| anyhow!("rendered list mutex poisoned"))?;
        *guard = entries;
        Ok(())
    }

    /// Key shown at 1-based position `index`.
    pub fn key_at(&self, index: usize) -> Result<Option<DisplayKey>> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| anyhow!("rendered list mutex poisoned"))?;
        Ok(guard.iter().find(|e| e.index == index).map(|e| e.key.clone()))
    }
}

pub fn format_entries(entries: &[EntryView]) -> String {
    if entries.is_empty() {
        return "  (history is empty)\n".to_string();
    }
    let width = entries.len().to_string().len();
    entries
        .iter()
        .map(|e| {
            let marker = if e.is_current { '*' } else { '-' };
            format!("{marker} {:>width$}  {}\n", e.index, e.key)
        })
        .collect()
}

fn describe(cause: &ChangeCause) -> String {
    match cause {
        ChangeCause::Captured {
            key,
            evicted: Some(evicted),
        } => format!("captured {key} (dropped {evicted})"),
        ChangeCause::Captured { key, evicted: None } => format!("captured {key}"),
        ChangeCause::RecopyRemoved { key } => format!("took {key}"),
    }
}

/// Prints the history to a terminal-like writer.
pub struct ConsoleRenderer {
    out: Mutex<Box<dyn Write + Send>>,
    rendered: RenderedList,
}

impl ConsoleRenderer {
    pub fn new(out: Box<dyn Write + Send>, rendered: RenderedList) -> Self {
        Self {
            out: Mutex::new(out),
            rendered,
        }
    }

    /// Print `entries` and remember them for the next selection.
    pub fn render(&self, header: Option<&str>, entries: Vec<EntryView>) -> Result<()> {
        let mut text = String::new();
        if let Some(header) = header {
            text.push_str(&format!("[{header}]\n"));
        }
        text.push_str(&format_entries(&entries));
        self.rendered.replace(entries)?;
        self.write(&text)
    }

    /// Print a one-line message.
    pub fn say(&self, message: &str) -> Result<()> {
        self.write(&format!("{message}\n"))
    }

    fn write(&self, text: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("console output mutex poisoned"))?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl HistoryChangeHandler for ConsoleRenderer {
    async fn on_history_changed(&self, change: HistoryChanged) -> Result<()> {
        tracing::debug!(version = change.snapshot.version, "Rendering history");
        self.render(
            Some(&describe(&change.cause)),
            entry_views(&change.snapshot),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::HistorySnapshot;

    /// Writer that appends into a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn snapshot(keys: &[&str]) -> HistorySnapshot {
        HistorySnapshot {
            version: 1,
            keys: keys.iter().map(|k| DisplayKey::from(*k)).collect(),
        }
    }

    #[test]
    fn head_is_marked_current() {
        let text = format_entries(&entry_views(&snapshot(&["new", "old"])));
        assert_eq!(text, "* 1  new\n- 2  old\n");
    }

    #[test]
    fn indices_are_right_aligned() {
        let keys: Vec<String> = (0..10).map(|i| format!("k{i}")).collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let text = format_entries(&entry_views(&snapshot(&refs)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "*  1  k0");
        assert_eq!(lines[9], "- 10  k9");
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert_eq!(format_entries(&[]), "  (history is empty)\n");
    }

    #[tokio::test]
    async fn change_notification_renders_and_remembers_keys() {
        let buf = SharedBuf::default();
        let rendered = RenderedList::new();
        let renderer = ConsoleRenderer::new(Box::new(buf.clone()), rendered.clone());

        renderer
            .on_history_changed(HistoryChanged {
                snapshot: snapshot(&["beta", "alpha"]),
                cause: ChangeCause::Captured {
                    key: DisplayKey::from("beta"),
                    evicted: None,
                },
            })
            .await
            .unwrap();

        assert!(buf.text().starts_with("[captured beta]\n* 1  beta\n"));
        assert_eq!(rendered.key_at(2).unwrap(), Some(DisplayKey::from("alpha")));
        assert_eq!(rendered.key_at(3).unwrap(), None);
    }
}
