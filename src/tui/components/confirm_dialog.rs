//! # Confirm Dialog Component
//!
//! Small overlay asking whether to delete a note. `y`/Enter confirms,
//! `n`/Esc declines; every other key is swallowed while it is open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    Yes,
    No,
}

pub struct ConfirmDialog {
    /// Title of the note being deleted (Prop)
    pub note_title: String,
}

impl ConfirmDialog {
    pub fn new(note_title: String) -> Self {
        Self { note_title }
    }
}

impl Component for ConfirmDialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(" Delete note ")
            .title_bottom(Line::from(" y Delete  n Keep ").centered());

        let text = vec![
            Line::from("Are you sure you want to delete this note?"),
            Line::from(Span::styled(
                self.note_title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl EventHandler for ConfirmDialog {
    type Event = ConfirmEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar('y' | 'Y') | TuiEvent::Submit => Some(ConfirmEvent::Yes),
            TuiEvent::InputChar('n' | 'N') | TuiEvent::Escape => Some(ConfirmEvent::No),
            _ => None,
        }
    }
}
