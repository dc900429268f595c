//! Date string validation
//!
//! Entry dates are stored and compared as ISO-8601 strings; range queries
//! rely on those strings sorting correctly as text. The CLI validates user
//! input here before it ever reaches the store.

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, NaiveDate};

/// Check that a user-supplied date filter is either a calendar date
/// (YYYY-MM-DD) or a full RFC 3339 timestamp.
pub fn validate_date_filter(input: &str) -> Result<()> {
    if NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(input).is_ok()
    {
        Ok(())
    } else {
        Err(MoodlogError::InvalidDate(input.to_string()))
    }
}
