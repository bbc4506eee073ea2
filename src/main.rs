use sb_core::ports::AppDirsPort;
use sb_platform::app_dirs::DirsAppDirsAdapter;
use snipboard::bootstrap::{init_tracing_subscriber, resolve_config, run_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs();
    let logs_dir = app_dirs.as_ref().ok().map(|dirs| dirs.logs_dir.clone());
    init_tracing_subscriber(logs_dir.as_deref())?;

    let app_dirs = match app_dirs {
        Ok(dirs) => Some(dirs),
        Err(err) => {
            tracing::warn!(error = %err, "App directories unavailable");
            None
        }
    };

    let config = resolve_config(app_dirs.as_ref())?;
    run_app(config).await
}
