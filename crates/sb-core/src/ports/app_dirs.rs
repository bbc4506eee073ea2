use crate::app_dirs::AppDirs;

#[derive(Debug, thiserror::Error)]
pub enum AppDirsError {
    #[error("system config directory is unavailable")]
    ConfigDirUnavailable,

    #[error("system data directory is unavailable")]
    DataDirUnavailable,
}

/// Resolves where configuration and logs live on this machine.
pub trait AppDirsPort: Send + Sync {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError>;
}
