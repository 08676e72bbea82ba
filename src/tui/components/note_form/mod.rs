//! # NoteForm Component
//!
//! The input surface: a modal overlay with a title field and a content field.
//!
//! ## Responsibilities
//!
//! - Capture text for both fields (typing, paste, cursor movement)
//! - Switch focus between fields (Tab / Shift+Tab, Enter in the title)
//! - Emit `Save` (Ctrl+S) and `Cancel` (Esc)
//! - Wipe the fields a short while after the form closes
//!
//! ## Clearing
//!
//! Closing does not wipe the fields immediately. `schedule_clear` sets a
//! deadline and `tick` clears once it passes. If the form is reopened before
//! the deadline, `open` clears right away, so stale text never shows in a
//! fresh form. A rejected save keeps everything the user typed.

mod text_field;

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

/// High-level events emitted by the NoteForm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Save { title: String, content: String },
    Cancel,
    ContentChanged,
}

pub struct NoteForm {
    pub title: TextField,
    pub content: TextField,
    pub focus: Field,
    /// Validation or save failure to show under the fields (Prop)
    pub error: Option<String>,
    clear_at: Option<Instant>,
}

impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteForm {
    pub fn new() -> Self {
        Self {
            title: TextField::single_line(),
            content: TextField::multi_line(),
            focus: Field::Title,
            error: None,
            clear_at: None,
        }
    }

    /// Prepare for display: drop stale values if a clear is still pending
    /// and focus the title.
    pub fn open(&mut self) {
        if self.clear_at.take().is_some() {
            self.clear();
        }
        self.focus = Field::Title;
    }

    /// Wipe both fields once `delay` has elapsed from `now`.
    pub fn schedule_clear(&mut self, now: Instant, delay: Duration) {
        self.clear_at = Some(now + delay);
    }

    /// Run a pending clear if its deadline has passed. Returns true if the
    /// fields were cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                self.clear();
                true
            }
            _ => false,
        }
    }

    pub fn has_pending_clear(&self) -> bool {
        self.clear_at.is_some()
    }

    fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.error = None;
    }

    fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Title => Field::Content,
            Field::Content => Field::Title,
        };
    }

    fn render_field(
        frame: &mut Frame,
        area: Rect,
        label: &str,
        field: &TextField,
        focused: bool,
    ) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(label.to_string());

        let inner = block.inner(area);
        let (row, col) = field.cursor_row_col();
        let scroll_y = row.saturating_sub(inner.height.saturating_sub(1));
        let scroll_x = col.saturating_sub(inner.width.saturating_sub(1));

        let paragraph = Paragraph::new(field.buffer.as_str())
            .block(block)
            .scroll((scroll_y, scroll_x));
        frame.render_widget(paragraph, area);

        if focused {
            frame.set_cursor_position((inner.x + col - scroll_x, inner.y + row - scroll_y));
        }
    }
}

impl Component for NoteForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::White))
            .title(" New Note ")
            .title_bottom(Line::from(" Tab switch  Ctrl+S save  Esc cancel ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, content_area, error_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        Self::render_field(frame, title_area, "Title", &self.title, self.focus == Field::Title);
        Self::render_field(
            frame,
            content_area,
            "Content",
            &self.content,
            self.focus == Field::Content,
        );

        if let Some(error) = &self.error {
            let line = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
            frame.render_widget(line, error_area);
        }
    }
}

impl EventHandler for NoteForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let changed = match event {
            TuiEvent::Save => {
                return Some(FormEvent::Save {
                    title: self.title.buffer.clone(),
                    content: self.content.buffer.clone(),
                });
            }
            TuiEvent::Escape => return Some(FormEvent::Cancel),
            TuiEvent::Tab | TuiEvent::BackTab => {
                self.toggle_focus();
                return None;
            }
            TuiEvent::Submit => match self.focus {
                Field::Title => {
                    self.focus = Field::Content;
                    return None;
                }
                Field::Content => {
                    self.content.insert_char('\n');
                    true
                }
            },
            TuiEvent::InputChar(c) => {
                self.focused_mut().insert_char(*c);
                true
            }
            TuiEvent::Paste(text) => {
                self.focused_mut().insert_str(text);
                true
            }
            TuiEvent::Backspace => self.focused_mut().backspace(),
            TuiEvent::Delete => self.focused_mut().delete(),
            TuiEvent::CursorLeft => self.focused_mut().move_left(),
            TuiEvent::CursorRight => self.focused_mut().move_right(),
            TuiEvent::CursorHome => self.focused_mut().move_home(),
            TuiEvent::CursorEnd => self.focused_mut().move_end(),
            TuiEvent::CursorUp => self.focused_mut().move_vertically(-1),
            TuiEvent::CursorDown => self.focused_mut().move_vertically(1),
            _ => false,
        };
        changed.then_some(FormEvent::ContentChanged)
    }
}
