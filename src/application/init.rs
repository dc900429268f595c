//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a moodlog journal at the specified path.
///
/// Safe to run on an already-initialized directory: existing config and
/// entries are left alone, missing pieces are created.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    let already_initialized = repo.is_initialized();

    repo.initialize()?;

    if repo.load_config().is_err() {
        repo.save_config(&Config::new())?;
    }

    // Never clobbers a populated entries slot.
    repo.entry_store().initialize()?;
    repo.media_store().init_dirs()?;

    if already_initialized {
        info!("init on already-initialized workspace {}", path.display());
        println!("Journal already initialized at {}", path.display());
    } else {
        println!("Initialized moodlog journal at {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JournalEntry;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_workspace_layout() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();

        assert!(temp.path().join(".moodlog/config.toml").exists());
        assert!(temp.path().join(".moodlog/journal_entries.json").exists());
        assert!(temp.path().join(".moodlog/media/audio").is_dir());
        assert!(temp.path().join(".moodlog/media/images").is_dir());
        assert!(temp.path().join(".moodlog/media/drawings").is_dir());
    }

    #[test]
    fn test_init_creates_missing_target_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("journals").join("mine");

        init(&target).unwrap();

        assert!(target.join(".moodlog").is_dir());
    }

    #[test]
    fn test_reinit_preserves_entries() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.entry_store()
            .save(JournalEntry::new("1", "2024-05-01"))
            .unwrap();

        init(temp.path()).unwrap();

        let entries = repo.entry_store().entries_by_date("2024-05-01").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_reinit_preserves_config() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let first = repo.load_config().unwrap();

        init(temp.path()).unwrap();
        let second = repo.load_config().unwrap();

        assert_eq!(first.created, second.created);
    }
}
