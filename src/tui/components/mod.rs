//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with note count and status/error text
//! - `NoteCardView`: One note as a bordered card
//! - `EmptyState`: Placeholder shown when there are no notes
//! - `ConfirmDialog`: Yes/no overlay before a delete
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `NoteList`: Scrollable, selectable column of cards
//! - `NoteForm`: Two-field input surface
//!
//! Components receive external data as "props" (struct fields or
//! constructor arguments), never by reaching into `App` themselves.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── note_card.rs      (Single card renderer)
//! ├── note_list.rs      (Scrollable card container)
//! ├── empty_state.rs    (No-notes placeholder)
//! ├── confirm_dialog.rs (Delete confirmation)
//! └── note_form/        (Title + content input surface)
//! ```

pub mod confirm_dialog;
pub mod empty_state;
pub mod note_card;
pub mod note_form;
pub mod note_list;
mod title_bar;

pub use confirm_dialog::{ConfirmDialog, ConfirmEvent};
pub use empty_state::EmptyState;
pub use note_form::{FormEvent, NoteForm};
pub use note_list::{NoteList, NoteListState};
pub use title_bar::TitleBar;
