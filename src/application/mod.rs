//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod edit_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod mood_stats;

pub use add_entry::{add_entry, EntryDraft};
pub use delete_entry::delete_entry;
pub use edit_entry::{edit_entry, EntryPatch};
pub use list_entries::entries_for_date;
pub use manage_config::ConfigService;
pub use mood_stats::mood_statistics;
