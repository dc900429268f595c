//! Edit entry use case

use crate::domain::{date, JournalEntry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::FileSystemRepository;

/// Field changes to apply to an existing entry. `None` leaves a field
/// untouched.
#[derive(Debug, Default)]
pub struct EntryPatch {
    pub date: Option<String>,
    pub content: Option<String>,
    pub mood: Option<String>,
    pub mood_note: Option<String>,
    pub sentiment: Option<String>,
    pub add_tags: Vec<String>,
}

/// Apply the patch to the entry with the given id and persist the result.
///
/// The store's update replaces the record wholesale, so the patch is merged
/// into the loaded entry here first. Unknown ids fail with
/// [`MoodlogError::EntryNotFound`] and leave storage untouched.
pub fn edit_entry(
    repository: &FileSystemRepository,
    id: &str,
    patch: EntryPatch,
) -> Result<JournalEntry> {
    if let Some(date) = &patch.date {
        date::validate_date_filter(date)?;
    }

    let journal = repository.entry_store();

    let mut entry = journal
        .entry_by_id(id)?
        .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))?;

    if let Some(date) = patch.date {
        entry.date = date;
    }
    if let Some(content) = patch.content {
        entry.content = content;
    }
    if let Some(mood) = patch.mood {
        entry.mood = mood;
    }
    if let Some(mood_note) = patch.mood_note {
        entry.mood_note = Some(mood_note);
    }
    if let Some(sentiment) = patch.sentiment {
        entry.sentiment = Some(sentiment);
    }
    entry.tags.extend(patch.add_tags);

    journal.update(entry.clone())?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::add_entry::{add_entry, EntryDraft};
    use crate::application::init;
    use tempfile::TempDir;

    fn workspace_with_entry() -> (TempDir, FileSystemRepository, String) {
        let temp = TempDir::new().unwrap();
        init::init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let draft = EntryDraft {
            date: Some("2024-05-01".to_string()),
            content: "original".to_string(),
            mood: Some("neutral".to_string()),
            tags: vec!["one".to_string()],
            ..Default::default()
        };
        let entry = add_entry(&repo, draft).unwrap();
        (temp, repo, entry.id)
    }

    #[test]
    fn test_edit_changes_only_patched_fields() {
        let (_temp, repo, id) = workspace_with_entry();

        let patch = EntryPatch {
            mood: Some("happy".to_string()),
            add_tags: vec!["two".to_string()],
            ..Default::default()
        };

        let edited = edit_entry(&repo, &id, patch).unwrap();

        assert_eq!(edited.mood, "happy");
        assert_eq!(edited.content, "original");
        assert_eq!(edited.tags, vec!["one".to_string(), "two".to_string()]);

        let stored = repo.entry_store().entry_by_id(&id).unwrap().unwrap();
        assert_eq!(stored, edited);
    }

    #[test]
    fn test_edit_unknown_id_fails() {
        let (_temp, repo, _id) = workspace_with_entry();

        let result = edit_entry(&repo, "missing-id", EntryPatch::default());
        match result.unwrap_err() {
            MoodlogError::EntryNotFound(id) => assert_eq!(id, "missing-id"),
            _ => panic!("Expected EntryNotFound error"),
        }
    }

    #[test]
    fn test_edit_rejects_bad_date_before_touching_storage() {
        let (_temp, repo, id) = workspace_with_entry();

        let patch = EntryPatch {
            date: Some("not a date".to_string()),
            mood: Some("sad".to_string()),
            ..Default::default()
        };

        assert!(edit_entry(&repo, &id, patch).is_err());

        let stored = repo.entry_store().entry_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.mood, "neutral");
    }
}
