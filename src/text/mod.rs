//! Editable text buffers addressed by grapheme position.
//!
//! Three storage strategies implement the same [`TextBuffer`] contract:
//!
//! - [`FlatStringBuffer`]: one contiguous `String`, rebuilt on each edit
//! - [`CharArrayBuffer`]: a `Vec` of one-cluster strings, spliced on each edit
//! - [`GapBuffer`]: cluster slots around a movable gap, for cheap local edits
//!
//! # Positions
//!
//! Positions are 1-based and count extended grapheme clusters. `insert`
//! places text before the cluster at `position`, so `len() + 1` appends.
//! `delete` removes `length` clusters starting at `start`; a length running
//! past the end is clamped. Out-of-range positions are clamped by default,
//! see [`BoundsPolicy`].
//!
//! # Examples
//!
//! ```
//! use grapheme_buffers::{GapBuffer, TextBuffer};
//!
//! let mut buf = GapBuffer::new("The quick brown fox");
//! buf.insert(" speedy", 4).unwrap();
//! assert_eq!(buf.text(), "The speedy quick brown fox");
//!
//! buf.delete(1, 4).unwrap();
//! assert_eq!(buf.text(), "speedy quick brown fox");
//! ```
//!
//! ## Choosing a strategy at runtime
//!
//! ```
//! use grapheme_buffers::{BufferOptions, Strategy, TextBuffer};
//!
//! for strategy in Strategy::ALL {
//!     let mut buf = strategy.build("dog", BufferOptions::default());
//!     buf.insert("s", 4).unwrap();
//!     assert_eq!(buf.text(), "dogs");
//! }
//! ```

mod array;
mod edit;
mod flat;
mod gap;
mod options;
mod position;

use crate::error::Result;
use std::fmt;

pub use array::CharArrayBuffer;
pub use edit::Edit;
pub use flat::FlatStringBuffer;
pub use gap::GapBuffer;
pub use options::{BoundsPolicy, BufferOptions};
pub use position::{resolve_delete, resolve_insert};

/// A mutable text container edited by grapheme position.
///
/// Implementations must agree on `text()` for any sequence of edits applied
/// to the same initial text.
pub trait TextBuffer: fmt::Debug {
    /// Insert `text` before the cluster at 1-based `position`.
    ///
    /// Shifts the following clusters right; never overwrites.
    fn insert(&mut self, text: &str, position: usize) -> Result<()>;

    /// Remove `length` clusters starting at 1-based `start`.
    fn delete(&mut self, start: usize, length: usize) -> Result<()>;

    /// The full current text.
    fn text(&self) -> String;

    /// Number of grapheme clusters.
    fn len(&self) -> usize;

    /// Whether the buffer holds no text.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cluster at 1-based `position`, if any.
    fn grapheme(&self, position: usize) -> Option<&str>;

    /// Options the buffer was built with.
    fn options(&self) -> BufferOptions;

    /// Which storage strategy backs this buffer.
    fn strategy(&self) -> Strategy;
}

/// Storage strategy selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Flat,
    Array,
    Gap,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::Flat, Self::Array, Self::Gap];

    /// Short name used on the command line and in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Array => "array",
            Self::Gap => "gap",
        }
    }

    /// Parse a strategy name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "flat" | "string" => Some(Self::Flat),
            "array" | "chars" => Some(Self::Array),
            "gap" => Some(Self::Gap),
            _ => None,
        }
    }

    /// Build a buffer of this strategy holding `text`.
    #[must_use]
    pub fn build(self, text: &str, options: BufferOptions) -> Box<dyn TextBuffer> {
        match self {
            Self::Flat => Box::new(FlatStringBuffer::with_options(text, options)),
            Self::Array => Box::new(CharArrayBuffer::with_options(text, options)),
            Self::Gap => Box::new(GapBuffer::with_options(text, options)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.text())
                }
            }
        )*
    };
}

impl_display!(FlatStringBuffer, CharArrayBuffer, GapBuffer);
