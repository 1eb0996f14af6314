use crate::constants::{DAILY_QUOTA, DRAG_SENSITIVITY, SETTLE_DURATION};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// TOML configuration for the data directory and feature tuning
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub flip: FlipConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the persisted slots; empty means the platform-local
    /// data directory.
    #[serde(default)]
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ChatConfig {
    #[serde(default = "default_daily_quota")]
    pub daily_quota: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FlipConfig {
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

// Default value functions
fn default_daily_quota() -> u32 { DAILY_QUOTA }
fn default_sensitivity() -> f64 { DRAG_SENSITIVITY }
fn default_settle_ms() -> u64 { SETTLE_DURATION.as_millis() as u64 }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            daily_quota: default_daily_quota(),
        }
    }
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            settle_ms: default_settle_ms(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Load from `path` when it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Settle animation length as a duration.
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.flip.settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_config_when_saving_then_writes_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let config = Config::default();
        config.save(&config_path).unwrap();

        assert!(config_path.exists());
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[storage]"));
        assert!(content.contains("[chat]"));
        assert!(content.contains("[flip]"));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[storage]
data_dir = "/var/lib/wellpal"

[chat]
daily_quota = 25

[flip]
sensitivity = 0.5
settle_ms = 250
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.storage.data_dir, "/var/lib/wellpal");
        assert_eq!(config.chat.daily_quota, 25);
        assert_eq!(config.flip.sensitivity, 0.5);
        assert_eq!(config.settle_duration(), Duration::from_millis(250));
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        let toml_content = r#"
[chat]
daily_quota = 3
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        // Specified value
        assert_eq!(config.chat.daily_quota, 3);
        // Default values
        assert_eq!(config.storage.data_dir, "");
        assert_eq!(config.flip.sensitivity, DRAG_SENSITIVITY);
        assert_eq!(config.flip.settle_ms, 400);
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        let result = Config::load("/nonexistent/path/wellpal.toml");

        assert!(result.is_err());
    }

    #[test]
    fn given_nonexistent_file_when_loading_or_default_then_returns_defaults() {
        let config = Config::load_or_default("/nonexistent/path/wellpal.toml").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.chat.daily_quota, DAILY_QUOTA);
    }

    #[test]
    fn given_round_trip_when_saving_and_loading_then_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");

        let original = Config {
            storage: StorageConfig {
                data_dir: "/test/data".to_string(),
            },
            chat: ChatConfig { daily_quota: 7 },
            flip: FlipConfig {
                sensitivity: 1.5,
                settle_ms: 600,
            },
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded, original);
    }
}
