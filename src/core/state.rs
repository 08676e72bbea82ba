//! # Application State
//!
//! Core business state for Glass Notes. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: NoteStore<S>            // notes + backing storage handle
//! ├── surface: Surface               // input form Closed/Open
//! ├── pending_delete: Option<String> // note awaiting confirmation
//! ├── status_message: String         // status bar text
//! └── error: Option<String>          // last failure shown to the user
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::storage::KeyValueStore;
use crate::core::store::NoteStore;
use crate::core::view::{self, ListView};

/// The note input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Closed,
    Open,
}

pub struct App<S: KeyValueStore> {
    pub store: NoteStore<S>,
    pub surface: Surface,
    /// Id of a note whose deletion is waiting on a yes/no answer.
    pub pending_delete: Option<String>,
    pub status_message: String,
    pub error: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    /// Wrap `store` and load whatever it has persisted.
    pub fn new(mut store: NoteStore<S>) -> Self {
        store.load();
        Self {
            store,
            surface: Surface::Closed,
            pending_delete: None,
            status_message: String::from("Welcome to Glass Notes!"),
            error: None,
        }
    }

    /// Current view of the notes. Rebuilt from scratch on every call.
    pub fn list_view(&self) -> ListView {
        view::render(self.store.all())
    }

    pub fn is_surface_open(&self) -> bool {
        self.surface == Surface::Open
    }
}
