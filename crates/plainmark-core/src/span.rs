//! Byte ranges into the source buffer.
//!
//! Every node in the tree records the bytes it was parsed from, delimiters
//! included, so that consumers can map nodes back to the input.

/// A byte range in the source text, `[start, end)`.
///
/// # Example
///
/// ```rust
/// use plainmark_core::span::Span;
///
/// let span = Span::new(2, 8);
/// assert_eq!(span.len(), 6);
/// assert!(span.contains(2));
/// assert!(!span.contains(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from cursor offsets.
    ///
    /// Offsets past `u32::MAX` saturate, so spans into inputs larger than
    /// 4 GiB are clamped to the end of the addressable range.
    #[inline]
    pub fn between(start: usize, end: usize) -> Self {
        Self::new(clamp(start), clamp(end))
    }

    /// Length of this span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this span contains a byte offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Slice `source` by this span.
    ///
    /// Returns `None` when the span does not fall on character boundaries of
    /// `source`, which only happens if the span came from a different buffer.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start as usize..self.end as usize)
    }
}

#[inline]
fn clamp(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
