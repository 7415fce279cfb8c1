//! Signed edit operations.
//!
//! Scripts and command-line input describe edits with signed integers, so a
//! negative position or length can reach the library. [`Edit`] is the
//! boundary where those values are checked before they become the unsigned
//! arguments of [`TextBuffer`].

use crate::error::{EditKind, Error, Result};
use crate::text::{BoundsPolicy, TextBuffer};

/// An edit operation with signed arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Insert { text: String, position: i64 },
    Delete { start: i64, length: i64 },
}

impl Edit {
    /// An insertion of `text` before 1-based `position`.
    #[must_use]
    pub fn insert(text: impl Into<String>, position: i64) -> Self {
        Self::Insert {
            text: text.into(),
            position,
        }
    }

    /// A deletion of `length` clusters from 1-based `start`.
    #[must_use]
    pub fn delete(start: i64, length: i64) -> Self {
        Self::Delete { start, length }
    }

    /// Apply the edit to `buffer`.
    ///
    /// A negative length is always [`Error::InvalidArgument`]. A negative
    /// position is out of range: clamped to 1, or reported under
    /// [`BoundsPolicy::Strict`].
    pub fn apply(&self, buffer: &mut dyn TextBuffer) -> Result<()> {
        match self {
            Self::Insert { text, position } => {
                let position = to_position(*position, EditKind::Insert, &*buffer)?;
                buffer.insert(text, position)
            }
            Self::Delete { start, length } => {
                let length = usize::try_from(*length).map_err(|_| {
                    Error::InvalidArgument(format!("negative delete length {length}"))
                })?;
                let start = to_position(*start, EditKind::Delete, &*buffer)?;
                buffer.delete(start, length)
            }
        }
    }
}

fn to_position(value: i64, op: EditKind, buffer: &dyn TextBuffer) -> Result<usize> {
    match usize::try_from(value) {
        Ok(position) => Ok(position),
        Err(_) if buffer.options().bounds == BoundsPolicy::Strict => Err(Error::OutOfRange {
            op,
            position: value,
            len: buffer.len(),
        }),
        // Position 0 is below range too; resolution clamps it to 1.
        Err(_) => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{BufferOptions, Strategy};

    #[test]
    fn test_apply_insert_and_delete() {
        for strategy in Strategy::ALL {
            let mut buf = strategy.build("fox", BufferOptions::default());
            Edit::insert("the ", 1).apply(buf.as_mut()).unwrap();
            Edit::delete(5, 1).apply(buf.as_mut()).unwrap();
            assert_eq!(buf.text(), "the ox", "{strategy}");
        }
    }

    #[test]
    fn test_negative_length_is_invalid_argument() {
        for options in [BufferOptions::default(), BufferOptions::strict()] {
            let mut buf = Strategy::Gap.build("abc", options);
            let err = Edit::delete(1, -2).apply(buf.as_mut()).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
            assert_eq!(buf.text(), "abc");
        }
    }

    #[test]
    fn test_negative_position_clamps_by_default() {
        let mut buf = Strategy::Array.build("bc", BufferOptions::default());
        Edit::insert("a", -5).apply(buf.as_mut()).unwrap();
        assert_eq!(buf.text(), "abc");
        Edit::delete(-1, 1).apply(buf.as_mut()).unwrap();
        assert_eq!(buf.text(), "bc");
    }

    #[test]
    fn test_negative_position_strict_reports() {
        let mut buf = Strategy::Flat.build("bc", BufferOptions::strict());
        let err = Edit::insert("a", -5).apply(buf.as_mut()).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                op: EditKind::Insert,
                position: -5,
                len: 2
            }
        );
    }
}
