use anyhow::Context;
use sb_core::config::AppConfig;
use sb_platform::ipc::PlatformCommand;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::wiring::{open_system_clipboard, wire_app, AppWiring};
use crate::console;

/// Run snipboard against the system clipboard and the terminal.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let wiring = wire_app(&config, open_system_clipboard(), Box::new(std::io::stdout()))?;
    let lines = console::spawn_stdin_reader()?;
    serve(wiring, lines).await
}

/// Drive an assembled app until the console quits, input ends, or Ctrl-C.
pub async fn serve(wiring: AppWiring, lines: mpsc::Receiver<String>) -> anyhow::Result<()> {
    let AppWiring {
        runtime,
        console,
        start_watcher,
        command_tx,
    } = wiring;

    let runtime_task = tokio::spawn(runtime.start());
    start_watcher.execute().await?;

    let result = tokio::select! {
        result = console::run(&console, lines) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            Ok(())
        }
    };

    if command_tx.send(PlatformCommand::Shutdown).await.is_err() {
        debug!("Platform runtime already stopped");
    }
    runtime_task
        .await
        .context("Platform runtime task failed")?;

    result
}
