//! # Note List View Model
//!
//! Pure derivation of what the note list should show. Knows nothing about
//! terminals: an adapter walks the returned [`ListView`] and draws it.
//!
//! Ordering is newest first. The sort is stable, so notes sharing a date keep
//! their insertion order.

use chrono::{DateTime, Local, Utc};

use crate::core::note::Note;

/// Text shown in place of the list when there are no notes.
pub const EMPTY_MESSAGE: &str = "No notes yet. Press n to add one!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// No notes: exactly one placeholder, never a card list.
    Empty(Placeholder),
    /// One card per note, newest first.
    Cards(Vec<NoteCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    /// Delete key for this card.
    pub id: String,
    pub title: String,
    /// Content split on line breaks.
    pub lines: Vec<String>,
    /// Short local date, e.g. "Mar 1".
    pub date: String,
}

impl ListView {
    pub fn cards(&self) -> &[NoteCard] {
        match self {
            ListView::Empty(_) => &[],
            ListView::Cards(cards) => cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}

/// Build the view for `notes`.
pub fn render(notes: &[Note]) -> ListView {
    if notes.is_empty() {
        return ListView::Empty(Placeholder {
            message: EMPTY_MESSAGE.to_string(),
        });
    }

    ListView::Cards(sorted_newest_first(notes).into_iter().map(NoteCard::from).collect())
}

/// Notes ordered by date descending; equal dates keep insertion order.
pub fn sorted_newest_first(notes: &[Note]) -> Vec<&Note> {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

impl From<&Note> for NoteCard {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            lines: note.content_lines().into_iter().map(str::to_string).collect(),
            date: format_short_date(note.date),
        }
    }
}

/// Format a timestamp as "Jan 5" in local time.
pub fn format_short_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::note_at;

    #[test]
    fn test_empty_collection_renders_single_placeholder() {
        let view = render(&[]);
        assert_eq!(
            view,
            ListView::Empty(Placeholder {
                message: EMPTY_MESSAGE.to_string()
            })
        );
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_render_orders_newest_first() {
        let notes = vec![
            note_at("jan", "2024-01-01T00:00:00Z"),
            note_at("mar", "2024-03-01T00:00:00Z"),
            note_at("feb", "2024-02-01T00:00:00Z"),
        ];
        let view = render(&notes);
        let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["mar", "feb", "jan"]);
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let notes = vec![
            note_at("first", "2024-01-01T00:00:00Z"),
            note_at("second", "2024-01-01T00:00:00Z"),
            note_at("newer", "2024-06-01T00:00:00Z"),
        ];
        let titles: Vec<&str> = sorted_newest_first(&notes).iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "first", "second"]);
    }

    #[test]
    fn test_render_does_not_reorder_source() {
        let notes = vec![
            note_at("old", "2023-01-01T00:00:00Z"),
            note_at("new", "2024-01-01T00:00:00Z"),
        ];
        let _ = render(&notes);
        assert_eq!(notes[0].title, "old");
    }

    #[test]
    fn test_card_splits_content_lines() {
        let mut note = note_at("Groceries", "2024-01-01T12:00:00Z");
        note.content = "Milk\nEggs".to_string();
        let card = NoteCard::from(&note);
        assert_eq!(card.id, note.id);
        assert_eq!(card.lines, vec!["Milk", "Eggs"]);
    }

    #[test]
    fn test_short_date_has_month_and_day() {
        let note = note_at("x", "2024-03-15T12:00:00Z");
        let date = format_short_date(note.date);
        // Local offset may move the day by one either way.
        assert!(date.starts_with("Mar "), "got {date}");
        assert!(["Mar 14", "Mar 15", "Mar 16"].contains(&date.as_str()));
    }
}
