//! Grapheme cluster iteration.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over grapheme clusters in a string.
#[derive(Clone, Debug)]
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterate over extended grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Number of grapheme clusters in `s`.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if is_ascii_only(s) && !s.contains('\r') {
        // Every ASCII char except a CR LF pair is its own cluster.
        return s.len();
    }
    graphemes(s).count()
}

/// Split `s` into owned one-cluster strings.
#[must_use]
pub fn split_graphemes(s: &str) -> Vec<String> {
    graphemes(s).map(str::to_owned).collect()
}

/// Check if a string is ASCII-only.
#[must_use]
pub fn is_ascii_only(s: &str) -> bool {
    s.is_ascii()
}
