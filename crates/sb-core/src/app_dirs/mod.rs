use std::path::PathBuf;

/// Resolved per-user directories for snipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppDirs {
    pub const CONFIG_FILE_NAME: &'static str = "config.toml";
    pub const LOG_FILE_NAME: &'static str = "snipboard.log";

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(Self::CONFIG_FILE_NAME)
    }
}
