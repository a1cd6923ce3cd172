//! Mood entry types and the persisted entry log.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Date key format used throughout the entry log (ISO calendar date).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// The closed set of moods a day can be marked with.
///
/// Serialized as the exact label strings the persisted JSON uses
/// ("Fantastic", "Good", "Average", "Bad").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoodLabel {
    Fantastic,
    Good,
    Average,
    Bad,
}

impl MoodLabel {
    /// All labels in display order.
    pub const ALL: [MoodLabel; 4] = [
        MoodLabel::Fantastic,
        MoodLabel::Good,
        MoodLabel::Average,
        MoodLabel::Bad,
    ];

    /// Canonical label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Fantastic => "Fantastic",
            MoodLabel::Good => "Good",
            MoodLabel::Average => "Average",
            MoodLabel::Bad => "Bad",
        }
    }

    /// Emoji shown next to the label.
    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLabel::Fantastic => "😄",
            MoodLabel::Good => "🙂",
            MoodLabel::Average => "😐",
            MoodLabel::Bad => "😞",
        }
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = CoreError;

    /// Case-insensitive parse of a label string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fantastic" => Ok(MoodLabel::Fantastic),
            "good" => Ok(MoodLabel::Good),
            "average" => Ok(MoodLabel::Average),
            "bad" => Ok(MoodLabel::Bad),
            other => Err(CoreError::Custom(format!(
                "unknown mood '{other}' (expected one of: fantastic, good, average, bad)"
            ))),
        }
    }
}

/// A single day's journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodEntry {
    /// Mood recorded for the day.
    pub mood: MoodLabel,

    /// Free-text daily summary (may be empty).
    #[serde(default)]
    pub summary: String,
}

impl MoodEntry {
    pub fn new(mood: MoodLabel, summary: impl Into<String>) -> Self {
        Self {
            mood,
            summary: summary.into(),
        }
    }
}

/// Mapping from ISO `YYYY-MM-DD` date key to the entry recorded that day.
///
/// Grows by upsert on save and never auto-deletes. The streak evaluator
/// only ever reads from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EntryLog {
    entries: BTreeMap<String, MoodEntry>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the entry for a date key, if any.
    pub fn get(&self, date_key: &str) -> Option<&MoodEntry> {
        self.entries.get(date_key)
    }

    /// Insert or overwrite the entry for a date key (last write wins).
    pub fn upsert(&mut self, date_key: impl Into<String>, entry: MoodEntry) {
        self.entries.insert(date_key.into(), entry);
    }

    /// Iterate entries in date-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MoodEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a `YYYY-MM-DD` date key into a calendar date.
///
/// # Errors
/// Returns [`CoreError::InvalidDate`] if the key is not a valid calendar
/// date (e.g. "2025-02-30" or "not-a-date").
pub fn parse_date_key(date_key: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(date_key, DATE_KEY_FORMAT).map_err(|_| CoreError::InvalidDate {
        key: date_key.to_string(),
    })
}

/// Format a calendar date as an entry-log date key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Today's date key in local time.
pub fn today_key() -> String {
    format_date_key(chrono::Local::now().date_naive())
}
