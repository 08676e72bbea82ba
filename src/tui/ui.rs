use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::core::storage::KeyValueStore;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ConfirmDialog, NoteList, TitleBar};

const LIST_HELP: &str = " n New  d Delete  ↑/↓ Select  q Quit ";

/// Split the frame into title bar, note list, and help line.
fn split(frame_area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area)
}

/// Area occupied by the note list.
pub fn list_area(frame_area: Rect) -> Rect {
    split(frame_area)[1]
}

/// Area occupied by the input surface overlay.
pub fn form_area(frame_area: Rect) -> Rect {
    centered_rect(70, 70, frame_area)
}

fn confirm_area(frame_area: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Fill(1),
    ])
    .areas(frame_area);
    centered_rect(60, 100, row)
}

pub fn draw_ui<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, tui: &mut TuiState) {
    let frame_area = frame.area();
    let [title_area, main_area, help_area] = split(frame_area);

    TitleBar::new(app.store.len(), app.status_message.clone(), app.error.clone())
        .render(frame, title_area);

    let view = app.list_view();
    NoteList::new(&mut tui.note_list, &view).render(frame, main_area);

    frame.render_widget(
        Span::styled(LIST_HELP, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if app.is_surface_open() {
        tui.form.error = app.error.clone();
        tui.form.render(frame, form_area(frame_area));
    }

    if let Some(note) = app.pending_delete.as_deref().and_then(|id| app.store.get(id)) {
        ConfirmDialog::new(note.title.clone()).render(frame, confirm_area(frame_area));
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::view::EMPTY_MESSAGE;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    fn draw<S: KeyValueStore>(app: &App<S>, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_empty_app() {
        let app = test_app();
        let mut tui = TuiState::new(0);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Glass Notes (0 notes)"));
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_draw_with_form_open() {
        let mut app = test_app();
        update(&mut app, Action::CreateRequested);
        let mut tui = TuiState::new(0);
        let text = draw(&app, &mut tui);
        assert!(text.contains("New Note"));
    }

    #[test]
    fn test_draw_confirmation() {
        let mut app = test_app();
        let id = app.store.create("Groceries", "Milk").unwrap().id.clone();
        update(&mut app, Action::DeleteRequested(id));
        let mut tui = TuiState::new(0);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Are you sure you want to delete this note?"));
    }

    #[test]
    fn test_form_area_is_inside_frame() {
        let frame = Rect::new(0, 0, 80, 24);
        let form = form_area(frame);
        assert!(form.width < frame.width && form.height < frame.height);
        assert!(form.contains(Position::new(40, 12)));
        assert!(!form.contains(Position::new(0, 0)));
    }
}
