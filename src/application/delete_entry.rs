//! Delete entry use case

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use log::warn;

/// Delete the entry with the given id, cleaning up any attachments it
/// referenced. Deleting a missing id succeeds and does nothing.
pub fn delete_entry(repository: &FileSystemRepository, id: &str) -> Result<()> {
    let journal = repository.entry_store();

    // Attachment cleanup is best effort: a failed media delete must not
    // leave the entry half-removed from the journal itself.
    if let Some(entry) = journal.entry_by_id(id)? {
        let media = repository.media_store();
        let uris = entry
            .voice_note
            .iter()
            .chain(entry.images.iter())
            .chain(entry.drawings.iter());
        for uri in uris {
            if let Err(e) = media.remove(uri) {
                warn!("failed to remove attachment {}: {}", uri, e);
            }
        }
    }

    journal.delete(id)
}
