//! UTF-8 safe single-line text input state with cursor management.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        let input = text.into();
        let cursor = input.len();
        Self { input, cursor }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> u16 {
        u16::try_from(self.input[..self.cursor].width()).unwrap_or(u16::MAX)
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            let start = self.cursor - prev.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            let end = self.cursor + next.len_utf8();
            self.input.drain(self.cursor..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::with_text("h🌵llo");
        st.move_home();
        st.move_right();
        st.insert_char('e');
        assert_eq!(st.input(), "he🌵llo");
        st.move_right();
        st.backspace();
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn delete_and_home_end() {
        let mut st = TextInputState::with_text("Kemangi");
        st.move_home();
        st.delete();
        assert_eq!(st.input(), "emangi");
        st.move_end();
        st.delete();
        assert_eq!(st.input(), "emangi");
        assert_eq!(st.cursor_column(), 6);
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut st = TextInputState::with_text("日本a");
        assert_eq!(st.cursor_column(), 5);
        st.move_left();
        assert_eq!(st.cursor_column(), 4);
    }

    #[test]
    fn moves_step_over_whole_characters() {
        let mut st = TextInputState::with_text("🌵x");
        st.move_left();
        st.move_left();
        assert_eq!(st.cursor_column(), 0);
        st.move_right();
        assert_eq!(st.cursor_column(), 2);
        st.backspace();
        assert_eq!(st.input(), "x");
    }
}
