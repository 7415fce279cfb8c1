//! Contiguous-string buffer.
//!
//! [`FlatStringBuffer`] keeps the whole text in one `String` and rebuilds it
//! on every edit. It is the naive baseline the other strategies are checked
//! against.
//!
//! Alongside the text it keeps the byte offset where each cluster starts.
//! Inserted text is segmented on its own and its boundaries are spliced into
//! that table, so a fragment that would fuse with a neighbour (a lone
//! combining mark, `\n` after `\r`) stays a separate cluster, exactly as in
//! the slot-based strategies.

use crate::error::Result;
use crate::text::options::BufferOptions;
use crate::text::position::{resolve_delete, resolve_insert};
use crate::text::{Strategy, TextBuffer};
use crate::unicode::grapheme_indices;

/// Text stored as a single contiguous `String`.
///
/// Every edit is O(n) in the total text length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatStringBuffer {
    text: String,
    /// Byte offset of the first byte of each cluster, ascending.
    starts: Vec<usize>,
    options: BufferOptions,
}

impl FlatStringBuffer {
    /// Create a buffer holding `text` verbatim.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_options(text, BufferOptions::default())
    }

    /// Create a buffer with custom options.
    #[must_use]
    pub fn with_options(text: &str, options: BufferOptions) -> Self {
        Self {
            text: text.to_owned(),
            starts: grapheme_indices(text).map(|(offset, _)| offset).collect(),
            options,
        }
    }

    /// Borrow the stored text without copying.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset where cluster `index` (0-based) starts; `text.len()` past
    /// the last cluster.
    fn byte_at(&self, index: usize) -> usize {
        self.starts.get(index).copied().unwrap_or(self.text.len())
    }
}

impl TextBuffer for FlatStringBuffer {
    fn insert(&mut self, text: &str, position: usize) -> Result<()> {
        let index = resolve_insert(position, self.len(), self.options.bounds)?;
        if text.is_empty() {
            return Ok(());
        }

        let split = self.byte_at(index);
        let mut rebuilt = String::with_capacity(self.text.len() + text.len());
        rebuilt.push_str(&self.text[..split]);
        rebuilt.push_str(text);
        rebuilt.push_str(&self.text[split..]);
        self.text = rebuilt;

        for offset in &mut self.starts[index..] {
            *offset += text.len();
        }
        self.starts.splice(
            index..index,
            grapheme_indices(text).map(|(offset, _)| split + offset),
        );
        Ok(())
    }

    fn delete(&mut self, start: usize, length: usize) -> Result<()> {
        let Some(range) = resolve_delete(start, length, self.len(), self.options.bounds)? else {
            return Ok(());
        };

        let from = self.byte_at(range.start);
        let to = self.byte_at(range.end);
        self.text.replace_range(from..to, "");

        self.starts.drain(range.clone());
        for offset in &mut self.starts[range.start..] {
            *offset -= to - from;
        }
        Ok(())
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn len(&self) -> usize {
        self.starts.len()
    }

    fn grapheme(&self, position: usize) -> Option<&str> {
        let index = position.checked_sub(1)?;
        let from = *self.starts.get(index)?;
        Some(&self.text[from..self.byte_at(index + 1)])
    }

    fn options(&self) -> BufferOptions {
        self.options
    }

    fn strategy(&self) -> Strategy {
        Strategy::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_rather_than_overwrites() {
        let mut buf = FlatStringBuffer::new("speedy");
        buf.insert("A", 1).unwrap();
        buf.insert(" ", 2).unwrap();
        assert_eq!(buf.as_str(), "A speedy");
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn test_append_and_prepend() {
        let mut buf = FlatStringBuffer::new("dog");
        buf.insert("s", 4).unwrap();
        buf.insert("a ", 1).unwrap();
        assert_eq!(buf.text(), "a dogs");
    }

    #[test]
    fn test_delete_range() {
        let mut buf = FlatStringBuffer::new("the lazy dog");
        buf.delete(4, 5).unwrap();
        assert_eq!(buf.text(), "the dog");
    }

    #[test]
    fn test_delete_to_end_is_clamped() {
        let mut buf = FlatStringBuffer::new("abcdef");
        buf.delete(4, 100).unwrap();
        assert_eq!(buf.text(), "abc");
        buf.delete(10, 1).unwrap();
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_delete_combining_cluster_whole() {
        let mut buf = FlatStringBuffer::new("cafe\u{0301}!");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.grapheme(4), Some("e\u{0301}"));
        buf.delete(4, 1).unwrap();
        assert_eq!(buf.text(), "caf!");
    }

    #[test]
    fn test_grapheme_out_of_range() {
        let buf = FlatStringBuffer::new("ab");
        assert_eq!(buf.grapheme(0), None);
        assert_eq!(buf.grapheme(3), None);
    }

    #[test]
    fn test_inserted_combining_mark_stays_separate() {
        let mut buf = FlatStringBuffer::new("ab");
        buf.insert("\u{0301}", 2).unwrap();
        assert_eq!(buf.text(), "a\u{0301}b");
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.grapheme(1), Some("a"));
        assert_eq!(buf.grapheme(2), Some("\u{0301}"));
        buf.delete(2, 1).unwrap();
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn test_boundaries_follow_edits() {
        let mut buf = FlatStringBuffer::new("a\rb");
        buf.insert("\n", 3).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.grapheme(2), Some("\r"));
        assert_eq!(buf.grapheme(3), Some("\n"));
        assert_eq!(buf.grapheme(4), Some("b"));

        buf.insert("中😀", 1).unwrap();
        buf.delete(3, 2).unwrap();
        assert_eq!(buf.text(), "中😀\nb");
        assert_eq!(buf.grapheme(2), Some("😀"));
        assert_eq!(buf.grapheme(4), Some("b"));
        assert_eq!(buf.grapheme(5), None);
    }
}
