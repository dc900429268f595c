//! Mood statistics projection

use serde::{Deserialize, Serialize};

/// One data point in a mood-over-time series: the entry's date string and
/// its mood label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPoint {
    pub date: String,
    pub mood: String,
}

impl MoodPoint {
    pub fn new(date: impl Into<String>, mood: impl Into<String>) -> Self {
        MoodPoint {
            date: date.into(),
            mood: mood.into(),
        }
    }
}
