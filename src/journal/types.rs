//! Journal entry records
//!
//! - `JournalEntry`: one entry as rendered by the viewer
//! - `EntryImage`: optional picture attached to an entry
//! - `JournalEntries`: the ordered set of entries, addressed by 1-based number

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::JournalResult;

/// Entries shipped with the application
const BUNDLED_ENTRIES: &str = include_str!("../../data/entries.json");

/// A single journal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub title: String,
    /// Date as written by the author, `M/D/YYYY`
    pub date: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EntryImage>,
}

/// Picture shown alongside an entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryImage {
    pub src: String,
    pub alt: String,
}

impl JournalEntry {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            content: content.into(),
            image: None,
        }
    }

    /// Builder method: attach an image
    pub fn image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(EntryImage {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }

    /// The entry date, if it is a valid `M/D/YYYY` date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%m/%d/%Y").ok()
    }

    /// True when title, date and content are all non-empty
    pub fn is_populated(&self) -> bool {
        !self.title.is_empty() && !self.date.is_empty() && !self.content.is_empty()
    }
}

/// Ordered collection of journal entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JournalEntries {
    entries: Vec<JournalEntry>,
}

impl JournalEntries {
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    /// The entries compiled into the application
    pub fn bundled() -> Self {
        // Embedded at compile time, so parsing cannot fail at runtime
        Self::from_json(BUNDLED_ENTRIES).expect("bundled entries are valid JSON")
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> JournalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON array of entries from a file
    pub fn load(path: &Path) -> JournalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries = Self::from_json(&content)?;
        tracing::debug!("Loaded {} entries from {:?}", entries.len(), path);
        Ok(entries)
    }

    /// Look up an entry by its 1-based number
    pub fn get(&self, number: usize) -> Option<&JournalEntry> {
        number.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries paired with their 1-based number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &JournalEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JournalEntry> {
        self.entries.iter()
    }
}
