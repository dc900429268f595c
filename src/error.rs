//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No entry with id: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored journal data error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Media error: {0}")]
    Media(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidDate(_) => 3,
            MoodlogError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Accepted formats:\n\
                    • Calendar dates: YYYY-MM-DD (e.g., 2024-05-01)\n\
                    • Full timestamps: RFC 3339 (e.g., 2024-05-01T10:00:00Z)\n\n\
                    Examples:\n\
                    moodlog show 2024-05-01\n\
                    moodlog stats 2024-05-01 2024-05-31",
                    date
                )
            }
            MoodlogError::EntryNotFound(id) => {
                format!(
                    "No entry with id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodlog show <date>' to list entries and their ids\n\
                    • The id printed by 'moodlog add' is the one to pass here",
                    id
                )
            }
            MoodlogError::Media(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the attachment file exists and is readable\n\
                    • Paths are resolved relative to the current directory",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
