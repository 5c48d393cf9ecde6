//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;
use crate::fs_util;

impl Config {
    /// Get the global config directory path (~/.streakboard/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".streakboard")
    }

    /// Get the global config file path (~/.streakboard/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The parent directory is created if needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.save_to_file_with_header(path, "")
    }

    /// Save configuration preceded by a comment block (each line starting with `#`)
    pub fn save_to_file_with_header(&self, path: &Path, header: &str) -> Result<()> {
        let body = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        let content = format!("{header}{body}");

        let _lock = fs_util::lock_exclusive(path)
            .with_context(|| format!("Failed to acquire config lock: {}", path.display()))?;
        fs_util::write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
