//! Resolution of 1-based grapheme positions into slot ranges.
//!
//! Positions count grapheme clusters starting at 1. An insertion position
//! names the cluster the new text goes *before* (`len + 1` appends); a
//! deletion start names the first cluster removed. Every strategy routes its
//! arguments through these two functions so they agree on edge cases.

use crate::error::{EditKind, Error, Result};
use crate::event::{LogLevel, emit_log, log_enabled};
use crate::text::options::BoundsPolicy;
use std::ops::Range;

fn log_clamp(op: EditKind, from: usize, to: usize, len: usize) {
    if log_enabled() {
        emit_log(
            LogLevel::Debug,
            &format!("{op} position {from} clamped to {to} (len {len})"),
        );
    }
}

fn out_of_range(op: EditKind, position: usize, len: usize) -> Error {
    Error::OutOfRange {
        op,
        position: i64::try_from(position).unwrap_or(i64::MAX),
        len,
    }
}

/// Resolve an insertion position to a 0-based slot index in `0..=len`.
pub fn resolve_insert(position: usize, len: usize, policy: BoundsPolicy) -> Result<usize> {
    let last = len + 1;
    if (1..=last).contains(&position) {
        return Ok(position - 1);
    }
    match policy {
        BoundsPolicy::Strict => Err(out_of_range(EditKind::Insert, position, len)),
        BoundsPolicy::Clamp => {
            let clamped = position.clamp(1, last);
            log_clamp(EditKind::Insert, position, clamped, len);
            Ok(clamped - 1)
        }
    }
}

/// Resolve a deletion to a 0-based slot range, or `None` when nothing is
/// removed.
///
/// `length` is always clamped to the clusters remaining after `start`.
pub fn resolve_delete(
    start: usize,
    length: usize,
    len: usize,
    policy: BoundsPolicy,
) -> Result<Option<Range<usize>>> {
    if length == 0 {
        return Ok(None);
    }

    let start = if (1..=len).contains(&start) {
        start
    } else {
        match policy {
            BoundsPolicy::Strict => return Err(out_of_range(EditKind::Delete, start, len)),
            BoundsPolicy::Clamp if start == 0 && len > 0 => {
                log_clamp(EditKind::Delete, 0, 1, len);
                1
            }
            BoundsPolicy::Clamp => return Ok(None),
        }
    };

    let first = start - 1;
    let end = first.saturating_add(length).min(len);
    Ok(Some(first..end))
}
