use std::path::PathBuf;

use sb_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "snipboard";
const PROFILE_ENV: &str = "SNIPBOARD_PROFILE";

fn app_dir_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves snipboard's directories from the platform conventions in `dirs`.
///
/// Configuration goes under the user config dir, logs under the local data
/// dir. Setting `SNIPBOARD_PROFILE` suffixes the directory name so several
/// instances can run side by side.
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
    profile: Option<String>,
}

impl DirsAppDirsAdapter {
    /// Adapter for the platform dirs, with the profile read from the environment.
    pub fn new() -> Self {
        Self {
            base_override: None,
            profile: std::env::var(PROFILE_ENV).ok(),
        }
    }

    /// Test-only adapter that resolves both roots under `base`.
    #[cfg(test)]
    fn with_base_dir(base: PathBuf, profile: Option<&str>) -> Self {
        Self {
            base_override: Some(base),
            profile: profile.map(str::to_string),
        }
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.join("config"));
        }
        dirs::config_dir()
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_override {
            return Some(base.join("data"));
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataDirUnavailable)?;
        let app_dir_name = app_dir_name(self.profile.as_deref());

        Ok(AppDirs {
            config_dir: base_config.join(&app_dir_name),
            logs_dir: base_data.join(&app_dir_name).join("logs"),
        })
    }
}
