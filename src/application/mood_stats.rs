//! Mood statistics use case

use crate::domain::{date, MoodPoint};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Mood points for entries in the inclusive `[start, end]` range, sorted
/// ascending by date.
pub fn mood_statistics(
    repository: &FileSystemRepository,
    start: &str,
    end: &str,
) -> Result<Vec<MoodPoint>> {
    date::validate_date_filter(start)?;
    date::validate_date_filter(end)?;
    repository.entry_store().mood_statistics(start, end)
}
