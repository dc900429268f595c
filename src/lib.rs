//! moodlog - Local mood journal store
//!
//! A command-line journal for mood and wellness entries. Entries live as a
//! single JSON array in a per-workspace slot; every mutation is a full
//! read-modify-write of that array, and lookups are linear scans with
//! string-prefix date matching.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
