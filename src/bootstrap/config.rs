//! # Configuration Loader
//!
//! - Read the TOML configuration file
//! - Parse it into the `AppConfig` DTO
//! - Report I/O and parsing errors with context
//!
//! Range checks live on the DTO itself (`AppConfig::validate`); this module
//! only decides which file to read and runs the check once at startup.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sb_core::app_dirs::AppDirs;
use sb_core::config::AppConfig;
use tracing::info;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SNIPBOARD_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - A known key has the wrong type or sign (mapping error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the config file: `SNIPBOARD_CONFIG` first, then the app config dir.
pub fn resolve_config_path(
    env_override: Option<PathBuf>,
    app_dirs: Option<&AppDirs>,
) -> Option<PathBuf> {
    env_override
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| app_dirs.map(AppDirs::config_file))
}

/// Load and validate the startup configuration.
///
/// A missing file is not an error: snipboard runs on defaults until the user
/// writes one.
pub fn resolve_config(app_dirs: Option<&AppDirs>) -> anyhow::Result<AppConfig> {
    let env_override = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    load_startup_config(resolve_config_path(env_override, app_dirs))
}

fn load_startup_config(path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) if path.exists() => {
            let config = load_config(&path)?;
            info!(path = %path.display(), "Loaded configuration");
            config
        }
        Some(path) => {
            info!(path = %path.display(), "No config file, using defaults");
            AppConfig::default()
        }
        None => {
            info!("No config location available, using defaults");
            AppConfig::default()
        }
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::RecopyMode;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_temp(
            r#"
            [history]
            capacity = 12
            max_display_chars = 40
            recopy_mode = "non-consuming"

            [watcher]
            poll_interval_ms = 500
        "#,
        );

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.history.capacity, 12);
        assert_eq!(config.history.max_display_chars, 40);
        assert_eq!(config.history.recopy_mode, RecopyMode::NonConsuming);
        assert_eq!(config.watcher.poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_load_config_fills_missing_values_with_defaults() {
        let temp_file = write_temp(
            r#"
            [history]
            capacity = 5
        "#,
        );

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.history.capacity, 5);
        assert_eq!(config.history.max_display_chars, 55);
        assert_eq!(config.history.recopy_mode, RecopyMode::Consuming);
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let temp_file = write_temp("[history\ncapacity = ");

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_error_on_missing_file() {
        let err = load_config(Path::new("/nonexistent/path/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_startup_config(Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());

        assert_eq!(load_startup_config(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_out_of_range_values_fail_validation() {
        let temp_file = write_temp(
            r#"
            [history]
            capacity = 0
        "#,
        );

        let err = load_startup_config(Some(temp_file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));

        let temp_file = write_temp(
            r#"
            [watcher]
            poll_interval_ms = 1
        "#,
        );
        assert!(load_startup_config(Some(temp_file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_unknown_recopy_mode_is_rejected() {
        let temp_file = write_temp(
            r#"
            [history]
            recopy_mode = "sometimes"
        "#,
        );

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_env_override_wins_over_app_dirs() {
        let dirs = AppDirs {
            config_dir: PathBuf::from("/tmp/snipboard"),
            logs_dir: PathBuf::from("/tmp/snipboard/logs"),
        };

        let chosen = resolve_config_path(Some(PathBuf::from("/etc/custom.toml")), Some(&dirs));
        assert_eq!(chosen, Some(PathBuf::from("/etc/custom.toml")));

        let chosen = resolve_config_path(Some(PathBuf::new()), Some(&dirs));
        assert_eq!(chosen, Some(PathBuf::from("/tmp/snipboard/config.toml")));

        assert_eq!(resolve_config_path(None, None), None);
    }
}
