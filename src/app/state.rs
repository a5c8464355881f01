//! Application state definitions

use crate::session::{Completion, SessionController};

/// Which part of the Generate tab receives keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Editing the article URL
    #[default]
    UrlInput,
    /// Navigating the loaded quiz
    Quiz,
}

/// Cursor and scroll position within a list of rows
#[derive(Debug, Clone, Default)]
pub struct ListCursor {
    /// Currently selected row
    pub selected: usize,
    /// Scroll offset in lines
    pub scroll_offset: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
}

impl ListCursor {
    /// Move the selection by `delta` rows, clamped to `len`
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Jump to the first row
    pub fn top(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last row
    pub fn bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Back to the top of a freshly loaded list
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Half a page, for paging keys
    pub fn page(&self) -> isize {
        (self.visible_height / 2).max(1) as isize
    }

    /// Adjust the scroll offset so `line` is on screen
    pub fn ensure_line_visible(&mut self, line: usize) {
        if line < self.scroll_offset {
            self.scroll_offset = line;
        }
        if self.visible_height > 0 && line >= self.scroll_offset + self.visible_height {
            self.scroll_offset = line + 1 - self.visible_height;
        }
    }
}

/// State for the URL line editor
#[derive(Debug, Clone, Default)]
pub struct UrlInputState {
    /// Input buffer
    pub input: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl UrlInputState {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Insert pasted text at cursor, dropping line breaks
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !matches!(c, '\n' | '\r')) {
            self.insert_char(c);
        }
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Clear the whole input
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The quiz session
    pub session: SessionController,

    /// Focused part of the Generate tab
    pub focus: Focus,

    /// URL editor
    pub url_input: UrlInputState,

    /// The editor was used after the last generate request
    pub editing_since_generate: bool,

    /// Cursor over the current quiz
    pub quiz_cursor: ListCursor,

    /// Cursor over the history table
    pub history_cursor: ListCursor,

    /// Cursor over the history detail overlay
    pub detail_cursor: ListCursor,
}

impl AppState {
    /// Push the edited URL into the session
    pub fn sync_url(&mut self) {
        self.session.set_url(self.url_input.input.clone());
    }

    /// Apply a finished request and move cursors to match
    pub fn apply(&mut self, completion: Completion) {
        let loaded_quiz = matches!(completion, Completion::Generate(Ok(_)));
        let loaded_detail = matches!(completion, Completion::HistoryDetail(Ok(_)));

        self.session.complete(completion);

        if loaded_quiz {
            // Keep keys in the editor if the user went back to typing
            if !self.editing_since_generate {
                self.focus = Focus::Quiz;
            }
            self.quiz_cursor.reset();
        }
        if loaded_detail {
            self.detail_cursor.reset();
        }
        self.history_cursor.clamp(self.session.state().history_list.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QuizDocument;

    #[test]
    fn cursor_moves_within_bounds() {
        let mut cursor = ListCursor::default();
        cursor.move_by(-1, 5);
        assert_eq!(cursor.selected, 0);
        cursor.move_by(3, 5);
        assert_eq!(cursor.selected, 3);
        cursor.move_by(10, 5);
        assert_eq!(cursor.selected, 4);
        cursor.move_by(1, 0);
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn cursor_scrolls_to_line() {
        let mut cursor = ListCursor { visible_height: 10, ..Default::default() };
        cursor.ensure_line_visible(15);
        assert_eq!(cursor.scroll_offset, 6);
        cursor.ensure_line_visible(3);
        assert_eq!(cursor.scroll_offset, 3);
    }

    #[test]
    fn url_input_edits_multibyte_text() {
        let mut input = UrlInputState::default();
        input.insert_str("https://en.wikipedia.org/wiki/Gödel\n");
        assert_eq!(input.input, "https://en.wikipedia.org/wiki/Gödel");

        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_char();
        assert_eq!(input.input, "https://en.wikipedia.org/wiki/Gdel");

        input.move_start();
        input.delete_char_forward();
        assert!(input.input.starts_with("ttps"));

        input.clear();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn generated_quiz_moves_focus() {
        let mut state = AppState::default();
        state.quiz_cursor.selected = 7;

        state.apply(Completion::Generate(Ok(QuizDocument::default())));

        assert_eq!(state.focus, Focus::Quiz);
        assert_eq!(state.quiz_cursor.selected, 0);
    }

    #[test]
    fn generated_quiz_leaves_busy_editor_focused() {
        let mut state = AppState::default();
        state.editing_since_generate = true;

        state.apply(Completion::Generate(Ok(QuizDocument::default())));

        assert_eq!(state.focus, Focus::UrlInput);
        assert!(state.session.state().current_quiz.is_some());
    }
}
