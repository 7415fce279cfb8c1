//! Error types for buffer editing.

use std::fmt;

/// Result type alias for buffer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which edit produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.write_str("insert"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Error type for buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Position outside the valid range for the edit.
    ///
    /// Only reported under [`BoundsPolicy::Strict`](crate::BoundsPolicy::Strict);
    /// the default policy clamps instead.
    OutOfRange {
        op: EditKind,
        position: i64,
        len: usize,
    },
    /// Argument with no sensible clamped meaning (e.g. a negative length).
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { op, position, len } => {
                write!(
                    f,
                    "{op} position {position} out of range for buffer of {len} graphemes"
                )
            }
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
        }
    }
}

impl std::error::Error for Error {}
