//! Domain layer - Business logic and domain models

pub mod date;
pub mod entry;
pub mod stats;

pub use entry::{JournalEntry, PromptResponse};
pub use stats::MoodPoint;
