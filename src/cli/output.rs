//! Output formatting utilities

use crate::domain::{JournalEntry, MoodPoint};

/// Format a list of journal entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        if entry.has_mood() {
            output.push_str(&format!("{}  {}  [{}]\n", entry.date, entry.id, entry.mood));
        } else {
            output.push_str(&format!("{}  {}\n", entry.date, entry.id));
        }
        if !entry.content.is_empty() {
            output.push_str(&format!("    {}\n", entry.content));
        }
        if !entry.tags.is_empty() {
            output.push_str(&format!("    tags: {}\n", entry.tags.join(", ")));
        }
        let attachments = entry.voice_note.iter().len() + entry.images.len() + entry.drawings.len();
        if attachments > 0 {
            output.push_str(&format!("    attachments: {}\n", attachments));
        }
    }
    output
}

/// Format mood statistics for display
pub fn format_mood_stats(points: &[MoodPoint]) -> String {
    if points.is_empty() {
        return "No mood data in range".to_string();
    }

    let mut output = String::new();
    for point in points {
        output.push_str(&format!("{}  {}\n", point.date, point.mood));
    }
    output
}
