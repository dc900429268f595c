//! Media attachment storage
//!
//! Attachments are copied into a managed tree under `.moodlog/media/` and
//! referenced from journal entries by the returned path string. The journal
//! core never touches the bytes.

use crate::error::{MoodlogError, Result};
use chrono::Utc;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of attachment, deciding which subtree a file lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
    Drawing,
}

impl MediaKind {
    pub fn subdir(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Image => "images",
            MediaKind::Drawing => "drawings",
        }
    }

    /// Extension used when the source file has none
    fn default_extension(&self) -> &'static str {
        match self {
            MediaKind::Audio => "m4a",
            MediaKind::Image => "jpg",
            MediaKind::Drawing => "png",
        }
    }
}

/// File store for entry attachments
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: PathBuf) -> Self {
        MediaStore { root }
    }

    /// Create the media directory tree. Idempotent.
    pub fn init_dirs(&self) -> Result<()> {
        for kind in [MediaKind::Audio, MediaKind::Image, MediaKind::Drawing] {
            fs::create_dir_all(self.root.join(kind.subdir()))?;
        }
        Ok(())
    }

    /// Copy `source` into the subtree for `kind` under a timestamp-derived
    /// name, returning the destination path as the URI to store on the
    /// entry.
    pub fn import(&self, kind: MediaKind, source: &Path) -> Result<String> {
        if !source.is_file() {
            return Err(MoodlogError::Media(format!(
                "Cannot import missing file: {}",
                source.display()
            )));
        }

        let dir = self.root.join(kind.subdir());
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_else(|| kind.default_extension());

        let stamp = Utc::now().timestamp_millis();
        let mut destination = dir.join(format!("{}.{}", stamp, extension));
        // Same-millisecond imports get a numeric suffix.
        let mut attempt = 0;
        while destination.exists() {
            attempt += 1;
            destination = dir.join(format!("{}-{}.{}", stamp, attempt, extension));
        }

        fs::copy(source, &destination)?;

        Ok(destination.to_string_lossy().into_owned())
    }

    /// Delete a previously imported attachment. A missing file is tolerated:
    /// the referencing entry may already have been cleaned up elsewhere.
    pub fn remove(&self, uri: &str) -> Result<()> {
        let path = Path::new(uri);

        if !path.exists() {
            warn!("attachment already gone: {}", uri);
            return Ok(());
        }

        fs::remove_file(path)?;
        Ok(())
    }
}
