//! # Note
//!
//! The only entity in Glass Notes. The serde layout is the persisted schema:
//!
//! ```text
//! { "id": "…", "title": "…", "content": "…", "date": "2024-03-01T09:30:00Z" }
//! ```
//!
//! Field names are pinned here so a collection written by one build always
//! loads in another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used when the user saves a note with content but no title.
pub const DEFAULT_TITLE: &str = "Untitled Note";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation time. Serialized as RFC 3339.
    pub date: DateTime<Utc>,
}

impl Note {
    /// Build a note from raw form input.
    ///
    /// Both fields are trimmed. Returns `None` when nothing is left in either,
    /// otherwise a note with a fresh id stamped at `date`.
    pub fn from_input(title: &str, content: &str, date: DateTime<Utc>) -> Option<Self> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() && content.is_empty() {
            return None;
        }

        Some(Self {
            id: new_note_id(),
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            content: content.to_string(),
            date,
        })
    }

    /// Content split into display lines. Line breaks in the note become
    /// separate lines; an empty note has no lines.
    pub fn content_lines(&self) -> Vec<&str> {
        self.content.lines().collect()
    }
}

/// Generate a new UUID v4 note ID.
pub fn new_note_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_from_input_rejects_blank_fields() {
        assert!(Note::from_input("", "", noon()).is_none());
        assert!(Note::from_input("   ", "\n\t ", noon()).is_none());
    }

    #[test]
    fn test_from_input_uses_default_title() {
        let note = Note::from_input("  ", "hello", noon()).unwrap();
        assert_eq!(note.title, DEFAULT_TITLE);
        assert_eq!(note.content, "hello");
    }

    #[test]
    fn test_from_input_trims_and_keeps_inner_breaks() {
        let note = Note::from_input(" Groceries ", "\nMilk\nEggs\n", noon()).unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "Milk\nEggs");
        assert_eq!(note.content_lines(), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn test_title_only_note_has_empty_content() {
        let note = Note::from_input("Reminder", "", noon()).unwrap();
        assert_eq!(note.title, "Reminder");
        assert!(note.content.is_empty());
        assert!(note.content_lines().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Note::from_input("a", "", noon()).unwrap();
        let b = Note::from_input("a", "", noon()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_schema_field_names() {
        let note = Note {
            id: "1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            date: noon(),
        };
        let value = serde_json::to_value(&note).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["content", "date", "id", "title"]);
        assert_eq!(object["date"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_parses_browser_iso_timestamps() {
        let json = r#"{"id":"1709280000000","title":"t","content":"","date":"2024-03-01T08:00:00.000Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.date, Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());
    }
}
