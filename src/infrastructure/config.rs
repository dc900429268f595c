//! Configuration management

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Version of the stored entry format. The entries slot itself stays a bare
/// JSON array; the version lives here so a future format change can detect
/// what it is reading.
pub const STORED_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    pub format_version: u32,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            format_version: STORED_FORMAT_VERSION,
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir_all(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.format_version, STORED_FORMAT_VERSION);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".moodlog").exists());
        assert!(temp.path().join(".moodlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.format_version, config.format_version);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            MoodlogError::NotMoodlogDirectory(_) => {}
            _ => panic!("Expected NotMoodlogDirectory error"),
        }
    }
}
