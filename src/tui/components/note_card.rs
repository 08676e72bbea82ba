use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::view::NoteCard;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Top + bottom borders plus the date footer line.
const VERTICAL_OVERHEAD: u16 = 3;

/// A single note rendered as a bordered card: title in the border, content
/// lines inside, short date in the footer.
///
/// Transient: created each frame from a [`NoteCard`] view model. Selection is
/// tracked by the parent `NoteList`.
#[derive(Clone, Copy)]
pub struct NoteCardView<'a> {
    pub card: &'a NoteCard,
    pub is_selected: bool,
}

impl<'a> NoteCardView<'a> {
    pub fn new(card: &'a NoteCard, is_selected: bool) -> Self {
        Self { card, is_selected }
    }

    /// Predict the rendered height at `width` without rendering.
    ///
    /// Uses `textwrap` with options matching `Paragraph`'s word wrapping, so
    /// the parent list can lay out scroll positions up front.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        let content_lines: usize = self
            .card
            .lines
            .iter()
            .map(|line| {
                if line.is_empty() {
                    1
                } else {
                    textwrap::wrap(line, textwrap::Options::new(inner)).len().max(1)
                }
            })
            .sum();
        content_lines as u16 + VERTICAL_OVERHEAD
    }

    fn styles(&self) -> (Style, Style) {
        if self.is_selected {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::DarkGray),
            )
        }
    }

    /// Build the widget. Exposed so the list can draw into a `ScrollView`.
    pub fn paragraph(&self) -> Paragraph<'a> {
        let (text_style, border_style) = self.styles();

        let mut lines: Vec<Line> = self
            .card
            .lines
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();

        let footer = if self.is_selected {
            format!("{}  · d delete", self.card.date)
        } else {
            self.card.date.clone()
        };
        lines.push(
            Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
        );

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.card.title),
                border_style.add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        Paragraph::new(lines)
            .block(block)
            .style(text_style)
            .wrap(Wrap { trim: false })
    }
}

impl Component for NoteCardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.paragraph().render(area, frame.buffer_mut());
    }
}
