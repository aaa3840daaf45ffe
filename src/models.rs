use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Title shown for notes whose title is blank
pub const UNTITLED: &str = "Untitled";

/// A note as stored by the remote notes API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Note {
    /// Title for list rows and tables, falling back to "Untitled"
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    pub fn created_date(&self) -> Option<NaiveDate> {
        parse_timestamp(&self.created_at).map(|ts| ts.date())
    }

    /// Creation date as "Jan 1, 2024"; the raw value if it cannot be parsed
    pub fn formatted_created_at(&self) -> String {
        match self.created_date() {
            Some(date) => format_date(date),
            None => self.created_at.clone(),
        }
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when both title and content are empty after trimming.
    /// Blank drafts are never sent to the server.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

/// Acknowledgement returned by the delete endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Parse the timestamps the notes API hands out.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`), naive ISO-8601 with optional
/// fractional seconds (`2024-01-01T00:00:00.123456`), and bare dates. Offset
/// timestamps keep the wall-clock time they were written with.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_local());
    }

    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
