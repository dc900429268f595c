//! Infrastructure layer - Storage and configuration

pub mod config;
pub mod journal;
pub mod media;
pub mod repository;
pub mod store;

pub use config::{Config, STORED_FORMAT_VERSION};
pub use journal::{JournalStore, ENTRIES_KEY};
pub use media::{MediaKind, MediaStore};
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
