//! Tracing configuration for snipboard
//!
//! - **Environment filter**: respects `RUST_LOG`, with per-crate defaults
//! - **stderr layer**: always on, ANSI colours only when stderr is a terminal.
//!   stdout belongs to the console list and never carries log lines.
//! - **file layer**: `<logs dir>/snipboard.log`, dropped with a note on stderr
//!   when the directory cannot be created
//!
//! `log` records from dependencies (arboard) reach the subscriber through
//! the `tracing-log` bridge that `try_init` installs.

use std::{
    fs,
    io::{self, IsTerminal},
    path::Path,
    sync::OnceLock,
};

use sb_core::app_dirs::AppDirs;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    fmt, fmt::writer::MakeWriter, prelude::*, registry, registry::LookupSpan, Layer,
};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, used when `RUST_LOG` is unset or invalid.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("snipboard={level}"),
        format!("sb_platform={level}"),
        format!("sb_app={level}"),
        "arboard=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once, before anything logs. `logs_dir` is where the file layer
/// writes; pass `None` to log to stderr only.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_writer = match logs_dir.map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
        None => None,
    };

    let stderr_layer = fmt_layer(io::stderr, io::stderr().is_terminal());
    let file_layer = file_writer.map(|writer| fmt_layer(writer, false));

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
fn fmt_layer<S, W>(writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer)
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, AppDirs::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
