//! Composing text buffer with cursor and selection.
//!
//! All positions are character indices; Arabic text makes byte offsets
//! useless to callers.

/// The string currently being composed.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
    /// Cursor position as a char index into `content`.
    cursor: usize,
    /// Selection anchor; a selection spans `anchor..cursor` in either order.
    anchor: Option<usize>,
    /// Maximum length in chars; 0 means unlimited.
    max_len: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }

    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Active selection as a normalized `(start, end)` char range.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    /// Selects the given char range; out-of-range positions are clamped.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_count();
        self.anchor = Some(start.min(len));
        self.cursor = end.min(len);
    }

    pub fn collapse_selection(&mut self) {
        self.anchor = None;
    }

    /// Moves the cursor, clearing any selection; clamped to the text length.
    pub fn move_cursor_to(&mut self, pos: usize) {
        self.cursor = pos.min(self.char_count());
        self.anchor = None;
    }

    /// Byte offset of a char index, for splicing into the backing string.
    fn byte_at(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.content.len())
    }

    /// Inserts text at the cursor, replacing the selection when one is
    /// active. Input that would push the buffer past `max_len` is truncated.
    /// Returns the number of characters actually inserted.
    pub fn insert(&mut self, text: &str) -> usize {
        if let Some((start, end)) = self.selection() {
            self.remove_range(start, end);
            self.cursor = start;
        }
        self.anchor = None;

        let inserted: String = if self.max_len > 0 {
            let available = self.max_len.saturating_sub(self.char_count());
            text.chars().take(available).collect()
        } else {
            text.to_string()
        };
        if inserted.is_empty() {
            return 0;
        }

        let byte = self.byte_at(self.cursor);
        self.content.insert_str(byte, &inserted);
        let count = inserted.chars().count();
        self.cursor += count;
        count
    }

    /// Deletes the selection, or the character before the cursor.
    /// Returns the number of characters removed.
    pub fn backspace(&mut self) -> usize {
        if let Some((start, end)) = self.selection() {
            let removed = end - start;
            self.remove_range(start, end);
            self.cursor = start;
            self.anchor = None;
            return removed;
        }
        if self.cursor == 0 {
            return 0;
        }
        self.remove_range(self.cursor - 1, self.cursor);
        self.cursor -= 1;
        1
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        let start_byte = self.byte_at(start);
        let end_byte = self.byte_at(end);
        self.content.replace_range(start_byte..end_byte, "");
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.anchor = None;
    }

    /// Replaces the content, placing the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor = self.char_count();
        self.anchor = None;
    }

    /// Takes the content, leaving an empty buffer.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.anchor = None;
        std::mem::take(&mut self.content)
    }
}
