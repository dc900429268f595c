//! Config inspection use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for reading journal configuration. All keys are read-only;
/// config is written once at init.
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "created" => Ok(config.created.to_rfc3339()),
            "format_version" => Ok(config.format_version.to_string()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: created, format_version",
                key
            ))),
        }
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init;
    use crate::infrastructure::STORED_FORMAT_VERSION;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        init::init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_format_version() {
        let (_temp, service) = service();
        assert_eq!(
            service.get("format_version").unwrap(),
            STORED_FORMAT_VERSION.to_string()
        );
    }

    #[test]
    fn test_get_created_is_rfc3339() {
        let (_temp, service) = service();
        let created = service.get("created").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&created).is_ok());
    }

    #[test]
    fn test_get_unknown_key_fails() {
        let (_temp, service) = service();
        match service.get("editor").unwrap_err() {
            MoodlogError::Config(msg) => assert!(msg.contains("Unknown config key")),
            _ => panic!("Expected Config error"),
        }
    }
}
