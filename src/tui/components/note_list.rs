//! # NoteList Component
//!
//! Scrollable column of note cards, newest first.
//!
//! ## Architecture
//!
//! `NoteList` is a transient component (created each frame) that wraps
//! `&'a mut NoteListState` (persistent state) and the `ListView` (props).
//! The whole list is rebuilt from the view model on every draw; there is no
//! incremental patching.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::ListView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::empty_state::EmptyState;
use crate::tui::components::note_card::NoteCardView;
use crate::tui::event::TuiEvent;

/// Cached card heights from the last render, used for hit testing and
/// keeping the selection in view.
#[derive(Debug, Default, Clone)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    /// Running totals: `prefix_heights[i]` is the bottom edge of card `i`.
    pub prefix_heights: Vec<u16>,
}

impl LayoutCache {
    fn rebuild(&mut self, heights: Vec<u16>) {
        let mut total = 0u16;
        self.prefix_heights = heights
            .iter()
            .map(|h| {
                total = total.saturating_add(*h);
                total
            })
            .collect();
        self.heights = heights;
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }
}

pub struct NoteListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// Index into the sorted cards, if any card is selected.
    pub selected: Option<usize>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for NoteListState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    SelectionChanged(usize),
}

impl NoteListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            selected: None,
            viewport_height: 0,
        }
    }

    /// Keep the selection valid for a list of `len` cards. Selects the first
    /// card when there was no selection.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }

    pub fn select_previous(&mut self) -> Option<usize> {
        let idx = self.selected?.saturating_sub(1);
        self.selected = Some(idx);
        self.scroll_to_selected();
        Some(idx)
    }

    pub fn select_next(&mut self) -> Option<usize> {
        let count = self.layout.heights.len();
        let idx = self.selected?;
        if idx + 1 >= count {
            return None;
        }
        self.selected = Some(idx + 1);
        self.scroll_to_selected();
        Some(idx + 1)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        if idx >= self.layout.prefix_heights.len() {
            return;
        }

        let item_top = if idx == 0 { 0 } else { self.layout.prefix_heights[idx - 1] };
        let item_bottom = self.layout.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom.saturating_sub(self.viewport_height).min(item_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Which card is at screen row `screen_y`, given the list occupies `area`.
    pub fn hit_test(&self, screen_y: u16, area: Rect) -> Option<usize> {
        if screen_y < area.y || screen_y >= area.y + area.height {
            return None;
        }
        let content_y = (screen_y - area.y) + self.scroll_state.offset().y;
        self.layout.prefix_heights.iter().position(|&bottom| content_y < bottom)
    }
}

impl EventHandler for NoteListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.select_previous().map(ListEvent::SelectionChanged)
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.select_next().map(ListEvent::SelectionChanged)
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

pub struct NoteList<'a> {
    state: &'a mut NoteListState,
    view: &'a ListView,
}

impl<'a> NoteList<'a> {
    pub fn new(state: &'a mut NoteListState, view: &'a ListView) -> Self {
        Self { state, view }
    }
}

impl Component for NoteList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cards = match self.view {
            ListView::Empty(placeholder) => {
                self.state.layout.rebuild(Vec::new());
                self.state.selected = None;
                EmptyState::new(placeholder).render(frame, area);
                return;
            }
            ListView::Cards(cards) => cards,
        };

        self.state.clamp_selection(cards.len());
        self.state.viewport_height = area.height;

        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let views: Vec<NoteCardView> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| NoteCardView::new(card, self.state.selected == Some(i)))
            .collect();
        self.state
            .layout
            .rebuild(views.iter().map(|v| v.calculate_height(content_width)).collect());
        self.state.clamp_scroll();

        let total_height = self.state.layout.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0u16;
        for (view, height) in views.iter().zip(&self.state.layout.heights) {
            scroll_view.render_widget(view.paragraph(), Rect::new(0, y, content_width, *height));
            y = y.saturating_add(*height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
