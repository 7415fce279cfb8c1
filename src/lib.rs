//! Grapheme-aware editable text buffers.
//!
//! A text buffer supports inserting and deleting substrings at positions
//! measured in grapheme clusters. Three storage strategies share one
//! contract, so callers can swap them freely:
//!
//! - [`FlatStringBuffer`]: contiguous `String`, the naive O(n) baseline
//! - [`CharArrayBuffer`]: `Vec` of cluster strings
//! - [`GapBuffer`]: cluster slots with a movable gap for cheap local edits
//!
//! The [`harness`] module runs scripted scenarios against every strategy and
//! reports mismatches.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow text::TextBuffer etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented on the trait
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::len_without_is_empty)] // is_empty lives on the trait
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod error;
pub mod event;
pub mod harness;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{EditKind, Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use text::{
    BoundsPolicy, BufferOptions, CharArrayBuffer, Edit, FlatStringBuffer, GapBuffer, Strategy,
    TextBuffer,
};
