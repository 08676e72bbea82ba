//! # Note Store
//!
//! Owns the authoritative list of notes and the handle to its backing store.
//! Every mutation serializes the *candidate* collection and writes it first;
//! memory is only updated once the write succeeded. A failed write therefore
//! leaves memory and disk agreeing on the previous state.
//!
//! ```text
//! create/delete ──► build next Vec ──► persist(next) ──ok──► self.notes = next
//!                                           │
//!                                          err ──► NoteError::Persistence (no change)
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use thiserror::Error;

use crate::core::note::Note;
use crate::core::storage::{KeyValueStore, StorageError};

/// Name of the storage entry holding the serialized collection.
pub const DEFAULT_STORAGE_KEY: &str = "glass-notes-app-data";

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Please enter a title or some content.")]
    Validation,
    #[error("could not save notes: {0}")]
    Persistence(#[from] StorageError),
}

pub type Clock = fn() -> DateTime<Utc>;

pub struct NoteStore<S: KeyValueStore> {
    backend: S,
    key: String,
    notes: Vec<Note>,
    clock: Clock,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// An empty store over `backend`. Call [`load`](Self::load) to read what
    /// was persisted.
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            notes: Vec::new(),
            clock: Utc::now,
        }
    }

    /// Replace the timestamp source used by `create`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Read the persisted collection into memory.
    ///
    /// Never fails: a missing entry, an unreadable backend, or a malformed
    /// payload all leave the store empty.
    pub fn load(&mut self) {
        self.notes = match self.read() {
            Ok(Some(notes)) => dedupe(notes),
            Ok(None) => {
                debug!("No stored notes under '{}'", self.key);
                Vec::new()
            }
            Err(e) => {
                warn!("Ignoring stored notes under '{}': {}", self.key, e);
                Vec::new()
            }
        };
        info!("Loaded {} notes", self.notes.len());
    }

    fn read(&self) -> Result<Option<Vec<Note>>, StorageError> {
        let Some(payload) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        let notes = serde_json::from_str(&payload).map_err(StorageError::Deserialize)?;
        Ok(Some(notes))
    }

    /// Create and persist a note from raw form input, returning it.
    pub fn create(&mut self, title: &str, content: &str) -> Result<&Note, NoteError> {
        let note = Note::from_input(title, content, (self.clock)()).ok_or(NoteError::Validation)?;

        let mut next = self.notes.clone();
        next.push(note);
        self.persist_collection(&next)?;
        self.notes = next;

        let created = &self.notes[self.notes.len() - 1];
        info!("Created note {} ({:?})", created.id, created.title);
        Ok(created)
    }

    /// Delete the note with `id`. Returns `Ok(false)` without touching the
    /// backend when no such note exists.
    pub fn delete(&mut self, id: &str) -> Result<bool, NoteError> {
        if !self.notes.iter().any(|n| n.id == id) {
            debug!("Delete of unknown note {} ignored", id);
            return Ok(false);
        }

        let next: Vec<Note> = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        self.persist_collection(&next)?;
        self.notes = next;

        info!("Deleted note {}", id);
        Ok(true)
    }

    /// Current collection in insertion order.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Write the full in-memory collection to the backend.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let payload = serialize(&self.notes)?;
        self.backend.set(&self.key, &payload)
    }

    fn persist_collection(&mut self, notes: &[Note]) -> Result<(), StorageError> {
        let payload = serialize(notes)?;
        self.backend.set(&self.key, &payload).inspect_err(|e| {
            warn!("Failed to persist {} notes: {}", notes.len(), e);
        })
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

fn serialize(notes: &[Note]) -> Result<String, StorageError> {
    serde_json::to_string(notes).map_err(StorageError::Serialize)
}

/// Drop repeated ids, keeping the first occurrence.
fn dedupe(notes: Vec<Note>) -> Vec<Note> {
    let total = notes.len();
    let mut seen = HashSet::new();
    let unique: Vec<Note> = notes.into_iter().filter(|n| seen.insert(n.id.clone())).collect();
    if unique.len() != total {
        warn!("Dropped {} notes with duplicate ids", total - unique.len());
    }
    unique
}
