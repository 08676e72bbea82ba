//! # Empty State Component
//!
//! Shown instead of the list when there are no notes.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::view::Placeholder;
use crate::tui::component::Component;

pub struct EmptyState<'a> {
    placeholder: &'a Placeholder,
}

impl<'a> EmptyState<'a> {
    pub fn new(placeholder: &'a Placeholder) -> Self {
        Self { placeholder }
    }
}

impl Component for EmptyState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_lines = vec![
            Line::from(Span::styled(
                "Glass Notes",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.placeholder.message.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(text_lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(text_lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::EMPTY_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_placeholder_message() {
        let placeholder = Placeholder {
            message: EMPTY_MESSAGE.to_string(),
        };
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| EmptyState::new(&placeholder).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(EMPTY_MESSAGE));
    }
}
