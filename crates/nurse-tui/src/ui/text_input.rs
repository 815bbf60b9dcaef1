//! Single-line text editing for the form fields
//!
//! The field value lives in the record; this only tracks where the cursor is.
//! - Ctrl+A / Home: Move to start
//! - Ctrl+E / End: Move to end
//! - Ctrl+U: Kill from cursor to start
//! - Ctrl+K: Kill from cursor to end

use unicode_width::UnicodeWidthStr;

/// Cursor into the focused field's text, as a byte offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    pub offset: usize,
}

impl TextCursor {
    /// Cursor placed after the last character of `text`
    pub fn at_end(text: &str) -> Self {
        Self { offset: text.len() }
    }

    /// Insert a character. Control characters are ignored; fields are single-line.
    /// Returns whether text changed.
    pub fn insert_char(&mut self, text: &mut String, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.clamp(text);
        text.insert(self.offset, c);
        self.offset += c.len_utf8();
        true
    }

    /// Insert pasted text, dropping line breaks and other control characters
    pub fn insert_str(&mut self, text: &mut String, pasted: &str) -> bool {
        let filtered: String = pasted.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return false;
        }
        self.clamp(text);
        text.insert_str(self.offset, &filtered);
        self.offset += filtered.len();
        true
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char_before(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.offset == 0 {
            return false;
        }
        let prev_boundary = text[..self.offset]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        text.remove(prev_boundary);
        self.offset = prev_boundary;
        true
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_at(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.offset >= text.len() {
            return false;
        }
        text.remove(self.offset);
        true
    }

    pub fn move_left(&mut self, text: &str) {
        self.clamp(text);
        if self.offset > 0 {
            self.offset = text[..self.offset]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self, text: &str) {
        self.clamp(text);
        if self.offset < text.len() {
            self.offset = text[self.offset..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.offset + i)
                .unwrap_or(text.len());
        }
    }

    pub fn move_to_start(&mut self) {
        self.offset = 0;
    }

    pub fn move_to_end(&mut self, text: &str) {
        self.offset = text.len();
    }

    /// Kill from cursor to start (Ctrl+U)
    pub fn kill_to_start(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.offset == 0 {
            return false;
        }
        text.drain(..self.offset);
        self.offset = 0;
        true
    }

    /// Kill from cursor to end (Ctrl+K)
    pub fn kill_to_end(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.offset >= text.len() {
            return false;
        }
        text.truncate(self.offset);
        true
    }

    /// Terminal columns between the start of `text` and the cursor.
    /// Full-width characters count as two.
    pub fn display_column(&self, text: &str) -> usize {
        let end = self.offset.min(text.len());
        text.get(..end).map(|s| s.width()).unwrap_or(0)
    }

    /// Keep the offset on a char boundary inside `text`
    fn clamp(&mut self, text: &str) {
        if self.offset > text.len() {
            self.offset = text.len();
        }
        while !text.is_char_boundary(self.offset) {
            self.offset -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_editing() {
        let mut text = String::new();
        let mut cursor = TextCursor::default();
        for c in "120/80".chars() {
            assert!(cursor.insert_char(&mut text, c));
        }
        assert_eq!(text, "120/80");
        assert_eq!(cursor.offset, 6);
    }

    #[test]
    fn test_full_width_input_is_kept() {
        let mut text = String::from("36");
        let mut cursor = TextCursor::at_end(&text);
        assert!(cursor.insert_char(&mut text, '．'));
        assert!(cursor.insert_str(&mut text, "５5"));
        assert_eq!(text, "36．５5");
        assert_eq!(cursor.offset, text.len());
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let mut text = String::new();
        let mut cursor = TextCursor::default();
        assert!(!cursor.insert_char(&mut text, '\n'));
        assert!(!cursor.insert_str(&mut text, "\r\n"));
        assert!(cursor.insert_str(&mut text, "発熱\nなし"));
        assert_eq!(text, "発熱なし");
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut text = String::from("頭痛");
        let mut cursor = TextCursor::at_end(&text);
        cursor.move_left(&text);
        assert_eq!(cursor.offset, "頭".len());
        assert_eq!(cursor.display_column(&text), 2);
        cursor.insert_char(&mut text, 'と');
        assert_eq!(text, "頭と痛");
        assert!(cursor.delete_char_before(&mut text));
        assert!(cursor.delete_char_before(&mut text));
        assert_eq!(text, "痛");
        assert!(!cursor.delete_char_before(&mut text));
        cursor.move_right(&text);
        assert_eq!(cursor.offset, text.len());
    }

    #[test]
    fn test_delete_at_and_kills() {
        let mut text = String::from("abcdef");
        let mut cursor = TextCursor { offset: 3 };
        assert!(cursor.delete_char_at(&mut text));
        assert_eq!(text, "abcef");
        assert!(cursor.kill_to_end(&mut text));
        assert_eq!(text, "abc");
        assert!(!cursor.kill_to_end(&mut text));
        cursor.move_left(&text);
        assert!(cursor.kill_to_start(&mut text));
        assert_eq!(text, "c");
        assert_eq!(cursor.offset, 0);
    }

    #[test]
    fn test_stale_cursor_is_clamped() {
        let mut text = String::from("ab");
        let mut cursor = TextCursor { offset: 10 };
        cursor.insert_char(&mut text, 'c');
        assert_eq!(text, "abc");
        assert_eq!(cursor.offset, 3);
    }
}
