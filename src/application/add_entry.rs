//! Add entry use case

use crate::domain::{date, JournalEntry, PromptResponse};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{FileSystemRepository, MediaKind};
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;

/// Caller-assembled fields for a new entry. Media fields are paths to
/// source files that get imported into the workspace; the entry stores the
/// resulting URIs.
#[derive(Debug, Default)]
pub struct EntryDraft {
    pub date: Option<String>,
    pub content: String,
    pub mood: Option<String>,
    pub mood_note: Option<String>,
    pub prompts: Vec<PromptResponse>,
    pub tags: Vec<String>,
    pub voice: Option<PathBuf>,
    pub images: Vec<PathBuf>,
    pub drawings: Vec<PathBuf>,
    pub sentiment: Option<String>,
}

/// Create and persist a new entry from the draft, returning the stored
/// record (its generated id included).
pub fn add_entry(repository: &FileSystemRepository, draft: EntryDraft) -> Result<JournalEntry> {
    let date = match draft.date {
        Some(date) => {
            date::validate_date_filter(&date)?;
            date
        }
        None => Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    let mut entry = JournalEntry::new(generate_entry_id(), date);
    entry.content = draft.content;
    entry.mood = draft.mood.unwrap_or_default();
    entry.mood_note = draft.mood_note;
    entry.prompt_responses = draft.prompts;
    entry.tags = draft.tags;
    entry.sentiment = draft.sentiment;

    let media = repository.media_store();
    if let Some(voice) = draft.voice {
        entry.voice_note = Some(media.import(MediaKind::Audio, &voice)?);
    }
    for image in draft.images {
        entry.images.push(media.import(MediaKind::Image, &image)?);
    }
    for drawing in draft.drawings {
        entry
            .drawings
            .push(media.import(MediaKind::Drawing, &drawing)?);
    }

    repository.entry_store().save(entry.clone())?;
    Ok(entry)
}

/// Parse a `QUESTION=ANSWER` prompt argument
pub fn parse_prompt(raw: &str) -> Result<PromptResponse> {
    match raw.split_once('=') {
        Some((question, answer)) if !question.is_empty() => Ok(PromptResponse {
            question: question.to_string(),
            answer: answer.to_string(),
        }),
        _ => Err(MoodlogError::Config(format!(
            "Invalid prompt '{}': expected QUESTION=ANSWER",
            raw
        ))),
    }
}

/// Timestamp-derived opaque id, unique per creation
fn generate_entry_id() -> String {
    Utc::now().timestamp_micros().to_string()
}
