//! Rope-backed reference editor surface.

use ropey::Rope;

use super::{EditorInitError, EditorSurface};
use crate::host::EditorNode;

/// A plain-text editor surface backed by a rope.
///
/// Stands in for the embedded rich-text editor in headless contexts and
/// tests: content is held as its markdown serialization directly, with a
/// char-index cursor for simulating local typing.
pub struct EditorBuffer {
    rope: Rope,
    /// Char index of the insertion point.
    cursor: usize,
}

impl EditorBuffer {
    /// Create a buffer from serialized content, cursor at the end.
    pub fn from_markdown(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let cursor = rope.len_chars();
        Self { rope, cursor }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_markdown("")
    }

    /// Total content length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Whether the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The insertion point as a char index.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the insertion point, clamped to the content length.
    pub fn move_to(&mut self, char_idx: usize) {
        self.cursor = char_idx.min(self.rope.len_chars());
    }

    /// Insert a character at the insertion point.
    pub fn insert_char(&mut self, ch: char) {
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    /// Insert a string at the insertion point.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.rope.insert(self.cursor, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the insertion point.
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.rope.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        true
    }
}

impl EditorSurface for EditorBuffer {
    fn instantiate(node: &EditorNode) -> Result<Self, EditorInitError> {
        Ok(Self::from_markdown(node.initial_markdown()))
    }

    fn markdown(&self) -> String {
        self.rope.to_string()
    }

    fn set_markdown(&mut self, value: &str) {
        self.rope = Rope::from_str(value);
        self.cursor = self.rope.len_chars();
    }

    fn destroy(&mut self) {
        self.rope = Rope::new();
        self.cursor = 0;
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} chars)", self.rope.len_chars()),
            )
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let buf = EditorBuffer::empty();
        assert!(buf.is_empty());
        assert_eq!(buf.markdown(), "");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_from_markdown_places_cursor_at_end() {
        let buf = EditorBuffer::from_markdown("hello");
        assert_eq!(buf.markdown(), "hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_instantiate_picks_up_initial_content() {
        let node = EditorNode::with_markdown("# Title");
        let buf = EditorBuffer::instantiate(&node).unwrap();
        assert_eq!(buf.markdown(), "# Title");
    }

    #[test]
    fn test_insert_str_at_cursor() {
        let mut buf = EditorBuffer::from_markdown("hello");
        buf.insert_str(" world");
        assert_eq!(buf.markdown(), "hello world");
        assert_eq!(buf.cursor(), 11);
    }

    #[test]
    fn test_insert_str_in_middle() {
        let mut buf = EditorBuffer::from_markdown("hd");
        buf.move_to(1);
        buf.insert_str("ello worl");
        assert_eq!(buf.markdown(), "hello world");
    }

    #[test]
    fn test_insert_empty_str_is_noop() {
        let mut buf = EditorBuffer::from_markdown("hello");
        buf.insert_str("");
        assert_eq!(buf.markdown(), "hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_insert_multibyte_char_advances_by_one_char() {
        let mut buf = EditorBuffer::from_markdown("caf");
        buf.insert_char('é');
        assert_eq!(buf.markdown(), "café");
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = EditorBuffer::from_markdown("hello");
        buf.move_to(0);
        assert!(!buf.delete_back());
        assert_eq!(buf.markdown(), "hello");
    }

    #[test]
    fn test_delete_back_removes_char_before_cursor() {
        let mut buf = EditorBuffer::from_markdown("hello");
        assert!(buf.delete_back());
        assert_eq!(buf.markdown(), "hell");
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn test_move_to_clamps_to_length() {
        let mut buf = EditorBuffer::from_markdown("hi");
        buf.move_to(100);
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_set_markdown_replaces_content() {
        let mut buf = EditorBuffer::from_markdown("old");
        buf.set_markdown("new content");
        assert_eq!(buf.markdown(), "new content");
        assert_eq!(buf.cursor(), 11);
    }

    #[test]
    fn test_destroy_releases_content() {
        let mut buf = EditorBuffer::from_markdown("hello");
        buf.destroy();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }
}
