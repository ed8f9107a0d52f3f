//! Utility functions for the config module
//! Creates the default settings directory from the bundled template and loads the settings file.
use std::path::{Path, PathBuf};

use tracing::info;

use super::settings::Settings;
use crate::error::RpcError;

pub const SETTINGS_FILE: &str = "settings.toml";

/// Initialize the settings directory and create a settings file from the template if it doesn't exist.
/// If a custom config path is provided, it uses that instead of the default `~/.member-rpc` directory.
pub fn init_default_dir(config_path: Option<String>) -> Result<PathBuf, RpcError> {
    let settings_dir = if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let home = dirs::home_dir()
            .ok_or_else(|| RpcError::Io("home directory not found".to_string()))?;
        home.join(".member-rpc")
    };

    if !settings_dir.exists() {
        std::fs::create_dir_all(&settings_dir)?;

        let config_path = settings_dir.join(SETTINGS_FILE);
        std::fs::write(&config_path, include_bytes!("../../settings.tpl.toml"))?;

        info!(
            "Created settings file from template at {}",
            config_path.display()
        );
    }

    Ok(settings_dir)
}

/// Read `settings.toml` from the settings directory
pub fn load_settings(settings_dir: &Path) -> Result<Settings, RpcError> {
    let contents = std::fs::read_to_string(settings_dir.join(SETTINGS_FILE))?;
    Settings::from_toml(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("member-rpc-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_creates_dir_from_template() {
        let dir = scratch_dir();
        let created = init_default_dir(Some(dir.display().to_string())).unwrap();
        assert_eq!(created, dir);
        assert!(dir.join(SETTINGS_FILE).exists());

        let settings = load_settings(&dir).unwrap();
        assert_eq!(settings, Settings::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_existing_dir_is_left_alone() {
        let dir = scratch_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SETTINGS_FILE), "[client]\nport = 4242\n").unwrap();

        init_default_dir(Some(dir.display().to_string())).unwrap();
        let settings = load_settings(&dir).unwrap();
        assert_eq!(settings.client.port, 4242);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_settings_file_is_io_error() {
        let dir = scratch_dir();
        let result = load_settings(&dir);
        assert!(matches!(result, Err(RpcError::Io(_))));
    }
}
