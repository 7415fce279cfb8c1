//! Gap buffer over grapheme-cluster slots.
//!
//! The backing store is a `Vec` of slots with a movable run of unused slots,
//! the gap:
//!
//! ```text
//!  [ clusters before gap | gap (unused)        | clusters after gap ]
//!    0..gap_start          gap_start..gap_end    gap_end..capacity
//! ```
//!
//! Before each edit the gap is moved to the edit point, so a run of edits in
//! the same neighbourhood only copies the clusters between consecutive edit
//! points. Insertions write into the head of the gap; deletions widen it.
//! When an insertion needs more slots than the gap holds, the store is
//! reallocated with a gap of at least twice the larger of the old gap and the
//! request, and never smaller than the text itself, so appending n clusters
//! one at a time reallocates O(log n) times.

use crate::error::Result;
use crate::event::{LogLevel, emit_event, emit_log, log_enabled};
use crate::text::options::BufferOptions;
use crate::text::position::{resolve_delete, resolve_insert};
use crate::text::{Strategy, TextBuffer};
use crate::unicode::{graphemes, split_graphemes};

/// Smallest gap created by a reallocation.
const MIN_GAP_GROW: usize = 16;

/// Text stored in grapheme-cluster slots around a movable gap.
#[derive(Clone, Debug, Default)]
pub struct GapBuffer {
    /// Backing slots. Slots inside the gap hold empty strings.
    slots: Vec<String>,
    /// Index of the first unused slot.
    gap_start: usize,
    /// Index one past the last unused slot.
    gap_end: usize,
    /// Number of times the store was reallocated to widen the gap.
    reallocations: usize,
    options: BufferOptions,
}

impl GapBuffer {
    /// Create a buffer from `text` with the gap at the end.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_options(text, BufferOptions::default())
    }

    /// Create a buffer with custom options.
    ///
    /// The store is sized to the initial text plus `options.initial_gap`
    /// free slots, which may be zero.
    #[must_use]
    pub fn with_options(text: &str, options: BufferOptions) -> Self {
        let mut slots = split_graphemes(text);
        let len = slots.len();
        slots.resize_with(len + options.initial_gap, String::new);
        Self {
            gap_start: len,
            gap_end: slots.len(),
            slots,
            reallocations: 0,
            options,
        }
    }

    /// Index of the first gap slot.
    #[inline]
    #[must_use]
    pub fn gap_start(&self) -> usize {
        self.gap_start
    }

    /// Index one past the last gap slot.
    #[inline]
    #[must_use]
    pub fn gap_end(&self) -> usize {
        self.gap_end
    }

    /// Number of free slots.
    #[inline]
    #[must_use]
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Total slots, used and free.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// How many times the gap has been widened by reallocation.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Move the gap so that it sits before the cluster at 1-based
    /// `position`.
    ///
    /// Positions outside `1..=len + 1` are clamped; the gap never resizes.
    pub fn move_gap_to(&mut self, position: usize) {
        let index = position.clamp(1, self.len() + 1) - 1;
        self.move_gap(index);
    }

    /// Move the gap so that `gap_start == index`.
    fn move_gap(&mut self, index: usize) {
        debug_assert!(index <= self.len(), "gap target {index} past end");
        if index == self.gap_start {
            return;
        }

        let gap = self.gap_len();
        if index < self.gap_start {
            // Shift [index, gap_start) right into the tail end of the gap.
            // Walking backwards keeps every source slot ahead of its target.
            let count = self.gap_start - index;
            for i in (0..count).rev() {
                self.slots.swap(index + i, index + i + gap);
            }
        } else {
            // Shift [gap_end, gap_end + count) left into the head end.
            let count = index - self.gap_start;
            for i in 0..count {
                self.slots.swap(self.gap_start + i, self.gap_end + i);
            }
        }
        self.gap_start = index;
        self.gap_end = index + gap;
    }

    /// Ensure the gap holds at least `needed` slots.
    fn ensure_gap(&mut self, needed: usize) {
        let gap = self.gap_len();
        if gap >= needed {
            return;
        }

        let new_gap = gap
            .max(needed)
            .saturating_mul(2)
            .max(self.len())
            .max(MIN_GAP_GROW);
        let grow = new_gap - gap;
        self.slots.reserve_exact(grow);
        self.slots.splice(
            self.gap_end..self.gap_end,
            std::iter::repeat_with(String::new).take(grow),
        );
        self.gap_end += grow;
        self.reallocations += 1;

        emit_event(
            "gap_grow",
            &format!("gap={new_gap} capacity={}", self.slots.len()),
        );
        if log_enabled() {
            emit_log(
                LogLevel::Debug,
                &format!(
                    "gap buffer grew gap {gap} -> {new_gap} for {needed} clusters (capacity {})",
                    self.slots.len()
                ),
            );
        }
    }

    fn logical(&self) -> impl Iterator<Item = &String> {
        self.slots[..self.gap_start]
            .iter()
            .chain(&self.slots[self.gap_end..])
    }
}

impl TextBuffer for GapBuffer {
    fn insert(&mut self, text: &str, position: usize) -> Result<()> {
        let index = resolve_insert(position, self.len(), self.options.bounds)?;
        if text.is_empty() {
            return Ok(());
        }

        let clusters: Vec<&str> = graphemes(text).collect();
        self.move_gap(index);
        self.ensure_gap(clusters.len());
        for (slot, cluster) in self.slots[self.gap_start..].iter_mut().zip(&clusters) {
            // Gap slots are always empty.
            slot.push_str(cluster);
        }
        self.gap_start += clusters.len();
        Ok(())
    }

    fn delete(&mut self, start: usize, length: usize) -> Result<()> {
        let Some(range) = resolve_delete(start, length, self.len(), self.options.bounds)? else {
            return Ok(());
        };

        self.move_gap(range.start);
        let count = range.len();
        // Release the removed clusters; their slots join the gap.
        for slot in &mut self.slots[self.gap_end..self.gap_end + count] {
            *slot = String::new();
        }
        self.gap_end += count;
        Ok(())
    }

    fn text(&self) -> String {
        let bytes = self.logical().map(String::len).sum();
        let mut out = String::with_capacity(bytes);
        for cluster in self.logical() {
            out.push_str(cluster);
        }
        out
    }

    fn len(&self) -> usize {
        self.slots.len() - self.gap_len()
    }

    fn grapheme(&self, position: usize) -> Option<&str> {
        let index = position.checked_sub(1)?;
        if index >= self.len() {
            return None;
        }
        let slot = if index < self.gap_start {
            index
        } else {
            index + self.gap_len()
        };
        Some(self.slots[slot].as_str())
    }

    fn options(&self) -> BufferOptions {
        self.options
    }

    fn strategy(&self) -> Strategy {
        Strategy::Gap
    }
}
