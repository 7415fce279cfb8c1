//! Grapheme segmentation.
//!
//! Every position and length in this crate counts extended grapheme
//! clusters, so all segmentation goes through this module.

mod grapheme;

pub use grapheme::{
    GraphemeIterator, grapheme_count, grapheme_indices, graphemes, is_ascii_only, split_graphemes,
};
