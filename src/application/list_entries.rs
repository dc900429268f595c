//! List entries use case

use crate::domain::{date, JournalEntry};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Entries whose date starts with the given day or timestamp prefix.
pub fn entries_for_date(
    repository: &FileSystemRepository,
    date_filter: &str,
) -> Result<Vec<JournalEntry>> {
    date::validate_date_filter(date_filter)?;
    repository.entry_store().entries_by_date(date_filter)
}
