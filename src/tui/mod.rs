//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Events go to exactly one place, checked in this order:
//!
//! 1. Ctrl+C quits from anywhere.
//! 2. A pending delete confirmation swallows everything until answered.
//! 3. An open form takes keys; a click outside it dismisses it.
//! 4. Otherwise the note list handles selection, `n`, `d` and `q`.
//!
//! ## Redraw Strategy
//!
//! Draws only after an event or a pending form clear. While a clear is
//! pending the loop polls every 50ms so the fields are wiped on time;
//! otherwise it sleeps up to 500ms.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::storage::{FileStore, KeyValueStore};
use crate::core::store::NoteStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{ConfirmDialog, ConfirmEvent, FormEvent, NoteForm, NoteListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub note_list: NoteListState,
    pub form: NoteForm,
    /// How long a closed form keeps its text before being wiped
    pub clear_delay: Duration,
}

impl TuiState {
    pub fn new(clear_delay_ms: u64) -> Self {
        Self {
            note_list: NoteListState::new(),
            form: NoteForm::new(),
            clear_delay: Duration::from_millis(clear_delay_ms),
        }
    }

    /// Route one event. Returns the intent it maps to, if any; purely local
    /// events (typing, selection, scrolling) are handled here and return `None`.
    pub fn dispatch<S: KeyValueStore>(
        &mut self,
        app: &App<S>,
        event: &TuiEvent,
        frame_area: Rect,
    ) -> Option<Action> {
        if matches!(event, TuiEvent::ForceQuit) {
            return Some(Action::Quit);
        }
        if matches!(event, TuiEvent::Resize) {
            return None;
        }

        if app.pending_delete.is_some() {
            return match ConfirmDialog::new(String::new()).handle_event(event)? {
                ConfirmEvent::Yes => Some(Action::ConfirmDelete),
                ConfirmEvent::No => Some(Action::DeclineDelete),
            };
        }

        if app.is_surface_open() {
            if let TuiEvent::MouseClick(col, row) = *event {
                let inside = ui::form_area(frame_area).contains(Position::new(col, row));
                return (!inside).then_some(Action::DismissRequested);
            }
            return match self.form.handle_event(event)? {
                FormEvent::Save { title, content } => Some(Action::SaveRequested { title, content }),
                FormEvent::Cancel => Some(Action::CancelRequested),
                FormEvent::ContentChanged => None,
            };
        }

        let view = app.list_view();
        self.note_list.clamp_selection(view.len());

        match event {
            TuiEvent::InputChar('n') => Some(Action::CreateRequested),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('d') | TuiEvent::Delete => {
                let idx = self.note_list.selected?;
                view.cards().get(idx).map(|card| Action::DeleteRequested(card.id.clone()))
            }
            TuiEvent::MouseClick(_, row) => {
                if let Some(idx) = self.note_list.hit_test(*row, ui::list_area(frame_area)) {
                    self.note_list.selected = Some(idx);
                }
                None
            }
            _ => {
                self.note_list.handle_event(event);
                None
            }
        }
    }

    /// Run `action` through `update` and apply its effect. Returns true on quit.
    ///
    /// A successful save puts the new note at the top of the list, so the
    /// selection follows it there.
    pub fn perform<S: KeyValueStore>(&mut self, app: &mut App<S>, action: Action, now: Instant) -> bool {
        let is_save = matches!(action, Action::SaveRequested { .. });
        let effect = update(app, action);
        if is_save && effect == Effect::CloseSurface {
            self.note_list.selected = Some(0);
            self.note_list.scroll_to_selected();
        }
        self.apply_effect(effect, now)
    }

    /// Carry out the presentation side of an effect. Returns true on quit.
    fn apply_effect(&mut self, effect: Effect, now: Instant) -> bool {
        match effect {
            Effect::OpenSurface => self.form.open(),
            Effect::CloseSurface => self.form.schedule_clear(now, self.clear_delay),
            Effect::Quit => return true,
            Effect::Render | Effect::None => {}
        }
        false
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = FileStore::open(&config.data_dir);
    info!(
        "Using note storage at {}",
        backend.entry_path(&config.storage_key).display()
    );
    let mut app = App::new(NoteStore::new(backend, config.storage_key.clone()));
    let mut tui = TuiState::new(config.clear_delay_ms);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Could not enable mouse/paste support: {}", e))
        .ok();

    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.form.tick(Instant::now()) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if tui.form.has_pending_clear() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if let Some(action) = tui.dispatch(&app, &event, frame_area)
                && tui.perform(&mut app, action, Instant::now())
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Glass Notes shutting down with {} notes", app.store.len());
    drop(terminal_mode_guard);
    ratatui::restore();
    Ok(())
}
