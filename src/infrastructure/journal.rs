//! Journal entry store
//!
//! All entries live as one JSON array under a single slot key. Every
//! mutation is a full read-modify-write of that array; a mutex serializes
//! writers within the process, so the last completed write always reflects
//! every earlier one. Multi-process access is not supported.

use crate::domain::{JournalEntry, MoodPoint};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::KeyValueStore;
use log::debug;
use std::sync::Mutex;

/// Slot key holding the serialized entry array
pub const ENTRIES_KEY: &str = "journal_entries";

/// Durable, local, single-device storage of journal entries with simple
/// lookup and aggregation.
#[derive(Debug)]
pub struct JournalStore<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> JournalStore<S> {
    /// Create a journal store over the given slot storage
    pub fn new(store: S) -> Self {
        JournalStore {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Ensure the entries slot exists, writing an empty array if absent.
    /// Never overwrites a populated slot.
    pub fn initialize(&self) -> Result<()> {
        let _guard = self.lock_writes();

        if self.store.get(ENTRIES_KEY)?.is_none() {
            debug!("creating empty entries slot '{}'", ENTRIES_KEY);
            self.persist_entries(&[])?;
        }

        Ok(())
    }

    /// Insert or replace an entry.
    ///
    /// An entry with the same id replaces the stored one in place; a new id
    /// is inserted at the front, so untouched collections read back
    /// most-recent-first.
    pub fn save(&self, entry: JournalEntry) -> Result<()> {
        let _guard = self.lock_writes();

        let mut entries = self.load_entries()?;
        match entries.iter().position(|e| e.id == entry.id) {
            Some(index) => entries[index] = entry,
            None => entries.insert(0, entry),
        }

        self.persist_entries(&entries)
    }

    /// All entries whose `date` starts with the given string. A bare day
    /// like `2024-05-01` matches entries stamped with any timestamp on that
    /// day. Empty result is not an error.
    pub fn entries_by_date(&self, date: &str) -> Result<Vec<JournalEntry>> {
        let entries = self.load_entries()?;
        Ok(entries
            .into_iter()
            .filter(|e| e.date.starts_with(date))
            .collect())
    }

    /// Look up a single entry by id
    pub fn entry_by_id(&self, id: &str) -> Result<Option<JournalEntry>> {
        let entries = self.load_entries()?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }

    /// Replace an existing entry wholesale.
    ///
    /// Returns [`MoodlogError::EntryNotFound`] and leaves storage untouched
    /// when no stored entry has the given id.
    pub fn update(&self, entry: JournalEntry) -> Result<()> {
        let _guard = self.lock_writes();

        let mut entries = self.load_entries()?;
        let Some(index) = entries.iter().position(|e| e.id == entry.id) else {
            return Err(MoodlogError::EntryNotFound(entry.id));
        };

        entries[index] = entry;
        self.persist_entries(&entries)
    }

    /// Remove the entry with the given id. Missing id is a no-op, not an
    /// error.
    pub fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.lock_writes();

        let mut entries = self.load_entries()?;
        entries.retain(|e| e.id != id);
        self.persist_entries(&entries)
    }

    /// Project entries in the inclusive range `[start, end]` that carry a
    /// mood label to `(date, mood)` points, sorted ascending by date
    /// string. Dates compare lexicographically; ISO-8601 strings order
    /// correctly as text.
    pub fn mood_statistics(&self, start: &str, end: &str) -> Result<Vec<MoodPoint>> {
        let entries = self.load_entries()?;

        let mut points: Vec<MoodPoint> = entries
            .iter()
            .filter(|e| e.date.as_str() >= start && e.date.as_str() <= end && e.has_mood())
            .map(|e| MoodPoint::new(e.date.clone(), e.mood.clone()))
            .collect();

        points.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(points)
    }

    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let entries = match self.store.get(ENTRIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        debug!("loaded {} journal entries", entries.len());
        Ok(entries)
    }

    fn persist_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(ENTRIES_KEY, &raw)?;
        debug!("persisted {} journal entries", entries.len());
        Ok(())
    }

    fn lock_writes(&self) -> std::sync::MutexGuard<'_, ()> {
        // A poisoned lock only means a previous writer panicked mid-call;
        // the slot itself is still last-write-wins consistent.
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}
