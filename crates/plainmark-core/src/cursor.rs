//! Read position over the immutable source buffer.
//!
//! The cursor owns no parsing logic. It answers "does this pattern start
//! here?" and moves forward; it never moves back.
//!
//! # Invariants
//!
//! - `0 <= pos <= input.len()`
//! - `pos` only increases
//! - `pos` always sits on a UTF-8 character boundary
//!
//! Breaking any of these is a bug in the caller, so the mutating methods
//! assert rather than return errors.

use memchr::memmem;

use crate::pattern::Pattern;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn input(&self) -> &'a str {
        self.input
    }

    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Unconsumed input from the current position.
    #[inline(always)]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline(always)]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Pure lookahead: does `pattern` match at the current position?
    #[inline]
    pub fn matches(&self, pattern: Pattern) -> bool {
        pattern.match_len(self.remaining_bytes()).is_some()
    }

    /// Consume `pattern` if it matches, returning the matched slice.
    #[inline]
    pub fn consume_if(&mut self, pattern: Pattern) -> Option<&'a str> {
        let len = pattern.match_len(self.remaining_bytes())?;
        let start = self.pos;
        self.advance(len);
        Some(&self.input[start..self.pos])
    }

    /// Advance over every character satisfying `pred`; returns bytes skipped.
    #[inline]
    pub fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let start = self.pos;
        let skipped: usize = self
            .remaining()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        self.advance(skipped);
        self.pos - start
    }

    /// Advance by one character, returning it.
    #[inline]
    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.advance(c.len_utf8());
        Some(c)
    }

    /// Advance by `len` bytes.
    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.seek(self.pos + len);
    }

    /// Move forward to an absolute byte offset.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        assert!(
            pos >= self.pos && pos <= self.bytes.len(),
            "cursor moved from {} to {} (input length {})",
            self.pos,
            pos,
            self.bytes.len()
        );
        assert!(
            self.input.is_char_boundary(pos),
            "cursor position {} is not a character boundary",
            pos
        );
        self.pos = pos;
    }

    /// Absolute offset of the next occurrence of `needle` at or after the
    /// current position.
    #[inline]
    pub fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(self.remaining_bytes(), needle.as_bytes()).map(|offset| self.pos + offset)
    }

    /// Slice the input between two absolute offsets.
    #[inline(always)]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }
}
