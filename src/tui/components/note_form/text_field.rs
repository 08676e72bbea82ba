//! Editable text buffer with a byte-offset cursor.
//!
//! No soft wrapping: each `\n` starts a new row, and the field scrolls to
//! keep the cursor visible.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default, Clone)]
pub struct TextField {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    multiline: bool,
}

impl TextField {
    pub fn single_line() -> Self {
        Self::default()
    }

    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pos = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        self.buffer.insert(self.pos, c);
        self.pos += c.len_utf8();
    }

    /// Insert pasted text. Line breaks are flattened to spaces in a
    /// single-line field.
    pub fn insert_str(&mut self, text: &str) {
        let text = if self.multiline {
            text.replace("\r\n", "\n")
        } else {
            text.replace("\r\n", " ").replace('\n', " ")
        };
        self.buffer.insert_str(self.pos, &text);
        self.pos += text.len();
    }

    pub fn backspace(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        let prev = prev_char_boundary(&self.buffer, self.pos);
        self.buffer.drain(prev..self.pos);
        self.pos = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.pos >= self.buffer.len() {
            return false;
        }
        let next = next_char_boundary(&self.buffer, self.pos);
        self.buffer.drain(self.pos..next);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(&self.buffer, self.pos);
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.pos >= self.buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(&self.buffer, self.pos);
        true
    }

    pub fn move_home(&mut self) -> bool {
        let start = self.line_start(self.pos);
        let moved = start != self.pos;
        self.pos = start;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.line_end(self.pos);
        let moved = end != self.pos;
        self.pos = end;
        moved
    }

    /// Move to the previous (`-1`) or next (`1`) line, keeping the column
    /// in characters where the target line is long enough.
    pub fn move_vertically(&mut self, direction: i8) -> bool {
        let start = self.line_start(self.pos);
        let column = self.buffer[start..self.pos].chars().count();

        let target_start = if direction < 0 {
            if start == 0 {
                return false;
            }
            self.line_start(start - 1)
        } else {
            let end = self.line_end(self.pos);
            if end >= self.buffer.len() {
                return false;
            }
            end + 1
        };

        let target_end = self.line_end(target_start);
        let offset = self.buffer[target_start..target_end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(target_end - target_start);
        self.pos = target_start + offset;
        true
    }

    /// Cursor row and display column, counted from the top-left of the text.
    pub fn cursor_row_col(&self) -> (u16, u16) {
        let before = &self.buffer[..self.pos];
        let row = before.matches('\n').count();
        let line = &before[self.line_start(self.pos)..];
        (row as u16, line.width() as u16)
    }

    fn line_start(&self, pos: usize) -> usize {
        self.buffer[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.buffer[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.buffer.len())
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str, pos: usize) -> TextField {
        let mut f = TextField::multi_line();
        f.buffer = text.to_string();
        f.pos = pos;
        f
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut f = TextField::single_line();
        f.insert_char('a');
        f.insert_char('\n');
        f.insert_str("b\nc");
        assert_eq!(f.buffer, "ab c");
    }

    #[test]
    fn test_multi_line_keeps_newline() {
        let mut f = TextField::multi_line();
        f.insert_str("Milk\r\nEggs");
        assert_eq!(f.buffer, "Milk\nEggs");
        assert_eq!(f.cursor_row_col(), (1, 4));
    }

    #[test]
    fn test_backspace_and_delete_respect_char_boundaries() {
        let mut f = field("héllo", 3); // after 'é'
        assert!(f.backspace());
        assert_eq!(f.buffer, "hllo");
        assert_eq!(f.pos, 1);
        assert!(f.delete());
        assert_eq!(f.buffer, "hlo");

        let mut empty = TextField::single_line();
        assert!(!empty.backspace());
        assert!(!empty.delete());
    }

    #[test]
    fn test_home_end_stay_on_line() {
        let mut f = field("ab\ncd", 4);
        assert!(f.move_home());
        assert_eq!(f.pos, 3);
        assert!(f.move_end());
        assert_eq!(f.pos, 5);
        assert!(!f.move_end());
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut f = field("abcd\nxy\nlonger", 3);
        assert!(f.move_vertically(1));
        assert_eq!(f.pos, 7); // end of "xy"
        assert!(f.move_vertically(1));
        assert_eq!(f.pos, 10); // column 2 of "longer"
        assert!(!f.move_vertically(1));
        assert!(f.move_vertically(-1));
        assert_eq!(f.pos, 7);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut f = field("text", 4);
        f.clear();
        assert!(f.buffer.is_empty());
        assert_eq!(f.pos, 0);
    }
}
