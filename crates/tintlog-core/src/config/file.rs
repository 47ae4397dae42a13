//! YAML persistence for `LoggerConfig`

use std::fs;
use std::path::{Path, PathBuf};

use super::LoggerConfig;
use crate::error::LogResult;

impl LoggerConfig {
    /// User-level config path (`~/.config/tintlog/config.yaml` on Linux)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("tintlog").join("config.yaml")
    }

    /// Load config from a YAML file
    ///
    /// A missing file yields the defaults; keys absent from the file keep
    /// their default values.
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load the user-level config
    pub fn load_user() -> LogResult<Self> {
        Self::load(Self::user_path())
    }

    /// Save config to a YAML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
