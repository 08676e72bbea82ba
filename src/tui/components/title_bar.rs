//! # TitleBar Component
//!
//! Top status bar: application name, note count, and the latest status or
//! error text. Purely presentational; all data arrives as props.
//!
//! The text changes based on state, most important first:
//!
//! 1. **Error**: `"Glass Notes (3 notes) | Save failed: …"` in red
//! 2. **Status message**: `"Glass Notes (3 notes) | Note deleted"`
//! 3. **Default**: `"Glass Notes (3 notes)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    pub note_count: usize,
    pub status_message: String,
    pub error: Option<String>,
}

impl TitleBar {
    pub fn new(note_count: usize, status_message: String, error: Option<String>) -> Self {
        Self {
            note_count,
            status_message,
            error,
        }
    }

    fn text(&self) -> String {
        let noun = if self.note_count == 1 { "note" } else { "notes" };
        let base = format!("Glass Notes ({} {})", self.note_count, noun);
        match &self.error {
            Some(error) => format!("{base} | {error}"),
            None if self.status_message.is_empty() => base,
            None => format!("{base} | {}", self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
