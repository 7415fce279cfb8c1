//! Grapheme-array buffer.

use crate::error::Result;
use crate::text::options::BufferOptions;
use crate::text::position::{resolve_delete, resolve_insert};
use crate::text::{Strategy, TextBuffer};
use crate::unicode::{graphemes, split_graphemes};

/// Text stored as an ordered `Vec` of one-cluster strings.
///
/// Insertion splices new clusters in and shifts the tail right; deletion
/// drains a contiguous range and compacts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharArrayBuffer {
    clusters: Vec<String>,
    options: BufferOptions,
}

impl CharArrayBuffer {
    /// Create a buffer from `text`, segmented into grapheme clusters.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_options(text, BufferOptions::default())
    }

    /// Create a buffer with custom options.
    #[must_use]
    pub fn with_options(text: &str, options: BufferOptions) -> Self {
        Self {
            clusters: split_graphemes(text),
            options,
        }
    }

    /// The stored clusters in order.
    #[must_use]
    pub fn clusters(&self) -> &[String] {
        &self.clusters
    }
}

impl TextBuffer for CharArrayBuffer {
    fn insert(&mut self, text: &str, position: usize) -> Result<()> {
        let index = resolve_insert(position, self.clusters.len(), self.options.bounds)?;
        self.clusters
            .splice(index..index, graphemes(text).map(str::to_owned));
        Ok(())
    }

    fn delete(&mut self, start: usize, length: usize) -> Result<()> {
        if let Some(range) = resolve_delete(start, length, self.clusters.len(), self.options.bounds)?
        {
            self.clusters.drain(range);
        }
        Ok(())
    }

    fn text(&self) -> String {
        self.clusters.concat()
    }

    fn len(&self) -> usize {
        self.clusters.len()
    }

    fn grapheme(&self, position: usize) -> Option<&str> {
        let index = position.checked_sub(1)?;
        self.clusters.get(index).map(String::as_str)
    }

    fn options(&self) -> BufferOptions {
        self.options
    }

    fn strategy(&self) -> Strategy {
        Strategy::Array
    }
}
