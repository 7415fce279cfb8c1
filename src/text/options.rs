//! Buffer configuration.

/// How out-of-range positions are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Clamp positions to the nearest valid value; deletes past the end are
    /// no-ops.
    #[default]
    Clamp,
    /// Report [`Error::OutOfRange`](crate::Error::OutOfRange) instead of
    /// clamping. Deletion lengths that overrun the end are still clamped.
    Strict,
}

impl BoundsPolicy {
    /// Name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Strict => "strict",
        }
    }
}

/// Options shared by every buffer strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferOptions {
    /// Bounds handling for `insert` and `delete`.
    pub bounds: BoundsPolicy,
    /// Free slots reserved at construction. Only the gap buffer uses this;
    /// the other strategies ignore it.
    pub initial_gap: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            bounds: BoundsPolicy::Clamp,
            initial_gap: 0,
        }
    }
}

impl BufferOptions {
    /// Default options with [`BoundsPolicy::Strict`].
    #[must_use]
    pub fn strict() -> Self {
        Self {
            bounds: BoundsPolicy::Strict,
            ..Self::default()
        }
    }

    /// Return a copy with a different initial gap.
    #[must_use]
    pub fn with_initial_gap(mut self, initial_gap: usize) -> Self {
        self.initial_gap = initial_gap;
        self
    }

    /// Return a copy with a different bounds policy.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }
}
