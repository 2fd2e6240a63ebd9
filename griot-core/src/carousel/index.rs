//! Circular index arithmetic.

/// Wrap any (possibly negative) offset into `[0, len)`.
///
/// Equivalent to `((i % len) + len) % len`; a plain `%` would return a
/// negative remainder for `i < 0` and pick the wrong left card.
///
/// `len` must be non-zero; the engine never calls this without slides.
#[inline]
pub fn normalize(i: isize, len: usize) -> usize {
    debug_assert!(len > 0, "normalize called on an empty list");
    i.rem_euclid(len as isize) as usize
}

/// Position within a non-empty ring of `len` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularIndex {
    current: usize,
    len: usize,
}

impl CircularIndex {
    /// Returns `None` for an empty ring.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Index `delta` slots away from the current one.
    pub fn offset(&self, delta: isize) -> usize {
        normalize(self.current as isize + delta, self.len)
    }

    /// Step forward one slot, wrapping at the end.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }
}
