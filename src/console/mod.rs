//! Line-oriented terminal front-end.
//!
//! The console renders the history whenever the runtime reports a change and
//! turns typed lines into use-case calls. Stdin is read on a plain thread so
//! a pending read never holds up shutdown.

pub mod command;
pub mod render;

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use sb_app::usecases::clipboard::RecopyError;
use sb_app::{ListClipboardEntries, RecopyClipboardEntry, StartClipboardWatcher, StopClipboardWatcher};

pub use command::{ConsoleCommand, ParseCommandError, HELP};
pub use render::{ConsoleRenderer, RenderedList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console {
    list: ListClipboardEntries,
    recopy: RecopyClipboardEntry,
    start: StartClipboardWatcher,
    stop: StopClipboardWatcher,
    renderer: Arc<ConsoleRenderer>,
    rendered: RenderedList,
}

impl Console {
    pub fn new(
        list: ListClipboardEntries,
        recopy: RecopyClipboardEntry,
        start: StartClipboardWatcher,
        stop: StopClipboardWatcher,
        renderer: Arc<ConsoleRenderer>,
        rendered: RenderedList,
    ) -> Self {
        Self {
            list,
            recopy,
            start,
            stop,
            renderer,
            rendered,
        }
    }

    pub async fn show_history(&self) -> Result<()> {
        let entries = self.list.execute().await?;
        self.renderer.render(None, entries)
    }

    pub async fn handle_line(&self, line: &str) -> Result<Flow> {
        match line.parse::<ConsoleCommand>() {
            Ok(command) => self.handle(command).await,
            Err(ParseCommandError::Empty) => Ok(Flow::Continue),
            Err(err) => {
                self.renderer.say(&err.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub async fn handle(&self, command: ConsoleCommand) -> Result<Flow> {
        debug!(?command, "Console command");
        match command {
            ConsoleCommand::Select(index) => self.select(index).await?,
            ConsoleCommand::List => self.show_history().await?,
            ConsoleCommand::Pause => {
                self.stop.execute().await?;
                self.renderer.say("paused")?;
            }
            ConsoleCommand::Resume => {
                self.start.execute().await?;
                self.renderer.say("recording")?;
            }
            ConsoleCommand::Help => self.renderer.say(HELP)?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn select(&self, index: usize) -> Result<()> {
        let Some(key) = self.rendered.key_at(index)? else {
            return self
                .renderer
                .say(&format!("no entry {index} in the list shown"));
        };

        match self.recopy.execute(&key).await {
            Ok(()) => self.renderer.say(&format!("copied {key}")),
            Err(RecopyError::NotFound(_)) => self
                .renderer
                .say(&format!("{key} is no longer in the history")),
            Err(RecopyError::ClipboardWrite(reason)) => self
                .renderer
                .say(&format!("could not write the clipboard: {reason}")),
            Err(err @ RecopyError::HistoryUnavailable(_)) => Err(err.into()),
        }
    }
}

/// Feed `lines` to the console until `quit` or end of input.
pub async fn run(console: &Console, mut lines: mpsc::Receiver<String>) -> Result<()> {
    console.show_history().await?;
    console.renderer.say("type 'help' for commands")?;

    while let Some(line) = lines.recv().await {
        if console.handle_line(&line).await? == Flow::Quit {
            debug!("Quit requested");
            break;
        }
    }
    Ok(())
}

/// Read stdin on its own thread and forward each line.
pub fn spawn_stdin_reader() -> Result<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::Builder::new()
        .name("snipboard-stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "Failed to read stdin");
                        break;
                    }
                }
            }
        })
        .context("Failed to spawn stdin reader")?;
    Ok(rx)
}
