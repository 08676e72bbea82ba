//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{DateTime, TimeZone, Utc};

use crate::core::note::{Note, new_note_id};
use crate::core::state::App;
use crate::core::storage::MemoryStore;
use crate::core::store::{DEFAULT_STORAGE_KEY, NoteStore};

/// An empty store over an in-memory backend.
pub fn test_store() -> NoteStore<MemoryStore> {
    NoteStore::new(MemoryStore::new(), DEFAULT_STORAGE_KEY)
}

/// Creates a test App with an empty in-memory store.
pub fn test_app() -> App<MemoryStore> {
    App::new(test_store())
}

pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 4, 10, 30, 0).unwrap()
}

/// A note titled `title` with empty content, dated `rfc3339`.
pub fn note_at(title: &str, rfc3339: &str) -> Note {
    Note {
        id: new_note_id(),
        title: title.to_string(),
        content: String::new(),
        date: DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc),
    }
}
