//! File system repository
//!
//! A moodlog workspace is a directory holding a `.moodlog/` subtree:
//! config, the entries slot, and imported media. Discovery mirrors version
//! control tools: an env var override, then a walk up from the current
//! directory.

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileStore, JournalStore, MediaStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal workspace operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .moodlog directory. Idempotent.
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the workspace root. Checks the MOODLOG_ROOT environment
    /// variable first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific starting
    /// directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodlog directory
    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }

    fn moodlog_dir(&self) -> PathBuf {
        self.root.join(".moodlog")
    }

    /// The journal store over this workspace's entries slot
    pub fn entry_store(&self) -> JournalStore<FileStore> {
        JournalStore::new(FileStore::new(self.moodlog_dir()))
    }

    /// The media store over this workspace's attachment tree
    pub fn media_store(&self) -> MediaStore {
        MediaStore::new(self.moodlog_dir().join("media"))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.moodlog_dir())?;
        Ok(())
    }
}
