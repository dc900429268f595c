//! Journal entry data model

use serde::{Deserialize, Serialize};

/// A structured reflection answer recorded with an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub question: String,
    pub answer: String,
}

/// One journal record.
///
/// `id` is assigned at creation time and never changes. `date` is an
/// ISO-8601 date or date-time string; by-date lookups match on its prefix,
/// so a bare `2024-05-01` finds entries stamped with a full timestamp for
/// that day. Media fields hold URI strings only; the bytes live wherever
/// the media store put them.
///
/// Field names on the wire keep the camelCase the stored format has always
/// used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub content: String,
    /// Short mood label; empty when the entry records no mood.
    #[serde(default)]
    pub mood: String,
    #[serde(rename = "moodNote", default, skip_serializing_if = "Option::is_none")]
    pub mood_note: Option<String>,
    #[serde(
        rename = "promptResponses",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub prompt_responses: Vec<PromptResponse>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "voiceNote", default, skip_serializing_if = "Option::is_none")]
    pub voice_note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drawings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

impl JournalEntry {
    /// Create an entry with the given identity and date; all other fields
    /// start empty.
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        JournalEntry {
            id: id.into(),
            date: date.into(),
            content: String::new(),
            mood: String::new(),
            mood_note: None,
            prompt_responses: Vec::new(),
            tags: Vec::new(),
            voice_note: None,
            images: Vec::new(),
            drawings: Vec::new(),
            sentiment: None,
        }
    }

    /// Whether this entry carries a mood label
    pub fn has_mood(&self) -> bool {
        !self.mood.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_empty_apart_from_identity() {
        let entry = JournalEntry::new("1714550400000", "2024-05-01T10:00:00Z");
        assert_eq!(entry.id, "1714550400000");
        assert_eq!(entry.date, "2024-05-01T10:00:00Z");
        assert!(entry.content.is_empty());
        assert!(!entry.has_mood());
        assert!(entry.tags.is_empty());
        assert!(entry.images.is_empty());
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let mut entry = JournalEntry::new("1", "2024-05-01");
        entry.mood_note = Some("slept badly".to_string());
        entry.voice_note = Some("file:///audio/1.m4a".to_string());
        entry.prompt_responses.push(PromptResponse {
            question: "What went well?".to_string(),
            answer: "walk in the park".to_string(),
        });

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"moodNote\""));
        assert!(json.contains("\"voiceNote\""));
        assert!(json.contains("\"promptResponses\""));
        assert!(!json.contains("mood_note"));
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let entry = JournalEntry::new("1", "2024-05-01");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("moodNote"));
        assert!(!json.contains("voiceNote"));
        assert!(!json.contains("promptResponses"));
        assert!(!json.contains("images"));
        assert!(!json.contains("drawings"));
        assert!(!json.contains("sentiment"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // Records written before optional fields existed must still load.
        let json = r#"{"id":"1","date":"2024-05-01","content":"hi","mood":"happy","tags":[]}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood, "happy");
        assert_eq!(entry.mood_note, None);
        assert!(entry.prompt_responses.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let mut entry = JournalEntry::new("42", "2024-05-01T08:30:00Z");
        entry.content = "long day".to_string();
        entry.mood = "sad".to_string();
        entry.mood_note = Some("deadline stress".to_string());
        entry.tags = vec!["work".to_string(), "sleep".to_string()];
        entry.images = vec!["file:///images/a.jpg".to_string()];
        entry.drawings = vec!["file:///drawings/b.png".to_string()];
        entry.sentiment = Some("negative".to_string());

        let json = serde_json::to_string(&entry).unwrap();
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
