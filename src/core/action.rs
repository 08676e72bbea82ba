//! # Actions
//!
//! Everything the user can ask of Glass Notes becomes an `Action`.
//! Pressing `n`? That's `Action::CreateRequested`.
//! Pressing Ctrl+S in the form? That's `Action::SaveRequested { title, content }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what to do next. Each action runs to
//! completion (validate → mutate → persist) before `update` returns, so the
//! next draw never shows a state that was not saved.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Surface};
use crate::core::storage::KeyValueStore;
use crate::core::store::NoteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the input form.
    CreateRequested,
    /// Save the form contents as a new note.
    SaveRequested { title: String, content: String },
    /// Close the form without saving.
    CancelRequested,
    /// Click outside the form. Same as cancel.
    DismissRequested,
    /// Ask to delete the note with this id. Needs confirmation.
    DeleteRequested(String),
    ConfirmDelete,
    DeclineDelete,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// State changed; redraw the list.
    Render,
    /// The form just opened. Clear any stale field values.
    OpenSurface,
    /// The form just closed. Wipe the fields once the close has settled.
    CloseSurface,
    Quit,
}

pub fn update<S: KeyValueStore>(app: &mut App<S>, action: Action) -> Effect {
    debug!("update: {:?}", action);

    match action {
        Action::CreateRequested => {
            if app.surface == Surface::Open {
                return Effect::None;
            }
            app.surface = Surface::Open;
            app.error = None;
            app.status_message = String::from("New note");
            Effect::OpenSurface
        }
        Action::SaveRequested { title, content } => {
            if app.surface != Surface::Open {
                return Effect::None;
            }
            match app.store.create(&title, &content) {
                Ok(note) => {
                    app.status_message = format!("Saved \"{}\"", note.title);
                    app.error = None;
                    app.surface = Surface::Closed;
                    Effect::CloseSurface
                }
                Err(NoteError::Validation) => {
                    // Form stays open with the user's input intact.
                    app.error = Some(NoteError::Validation.to_string());
                    Effect::Render
                }
                Err(e) => {
                    warn!("Save failed: {}", e);
                    app.error = Some(format!("Save failed: {e}"));
                    Effect::Render
                }
            }
        }
        Action::CancelRequested | Action::DismissRequested => {
            if app.surface != Surface::Open {
                return Effect::None;
            }
            app.surface = Surface::Closed;
            app.error = None;
            app.status_message = String::new();
            Effect::CloseSurface
        }
        Action::DeleteRequested(id) => {
            if app.store.get(&id).is_none() {
                debug!("Delete requested for unknown note {}", id);
                return Effect::None;
            }
            app.pending_delete = Some(id);
            Effect::Render
        }
        Action::ConfirmDelete => {
            let Some(id) = app.pending_delete.take() else {
                return Effect::None;
            };
            match app.store.delete(&id) {
                Ok(_) => {
                    info!("Note {} deleted by user", id);
                    app.status_message = String::from("Note deleted");
                    app.error = None;
                }
                Err(e) => {
                    warn!("Delete failed: {}", e);
                    app.error = Some(format!("Delete failed: {e}"));
                }
            }
            Effect::Render
        }
        Action::DeclineDelete => {
            if app.pending_delete.take().is_none() {
                return Effect::None;
            }
            Effect::Render
        }
        Action::Quit => Effect::Quit,
    }
}
