//! Block parser and parser configuration.
//!
//! The block layer is flat: skip whitespace, then emit a heading, a ruler or
//! a paragraph, and repeat until the input is exhausted. Headings and
//! paragraphs hand their content to the inline parser, bounded by a blank
//! line.

use crate::ast::{Document, Heading, Node, Paragraph};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::inline::InlineParser;
use crate::pattern::{FenceStyle, Pattern};
use crate::span::Span;

/// Default limit on nested bold/italic/link constructs.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Parser configuration.
///
/// A `Parser` holds no per-document state: it can be reused for any number
/// of documents and shared between threads.
///
/// ```rust
/// use plainmark_core::{FenceStyle, Parser};
///
/// let parser = Parser::new()
///     .with_max_nesting(32)
///     .with_fence(FenceStyle::Quotes)
///     .with_italics(true);
/// let doc = parser.parse("*soft* and **loud**").unwrap();
/// assert_eq!(doc.nodes.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_nesting: usize,
    fence: FenceStyle,
    italics: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_nesting: DEFAULT_MAX_NESTING,
            fence: FenceStyle::Backticks,
            italics: false,
        }
    }

    /// Limit how deeply bold, italic and link constructs may nest.
    ///
    /// Input nesting deeper than this fails with
    /// [`ParseErrorKind::MaxNestingExceeded`](crate::ParseErrorKind::MaxNestingExceeded).
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Select the code fence delimiter.
    pub fn with_fence(mut self, fence: FenceStyle) -> Self {
        self.fence = fence;
        self
    }

    /// Recognize single `*` as italics, producing [`Node::Emphasis`].
    pub fn with_italics(mut self, italics: bool) -> Self {
        self.italics = italics;
        self
    }

    #[inline]
    pub const fn max_nesting(&self) -> usize {
        self.max_nesting
    }

    #[inline]
    pub const fn fence(&self) -> FenceStyle {
        self.fence
    }

    #[inline]
    pub const fn italics(&self) -> bool {
        self.italics
    }

    /// Parse a whole document.
    ///
    /// Unterminated constructs are closed at end of input; the only failure
    /// is exceeding the nesting limit, in which case no tree is returned.
    ///
    /// Spans are 32-bit: offsets beyond 4 GiB saturate at `u32::MAX`.
    pub fn parse<'a>(&self, input: &'a str) -> Result<Document<'a>, ParseError> {
        let mut cursor = Cursor::new(input);
        let mut nodes = Vec::with_capacity(16);

        loop {
            cursor.consume_if(Pattern::Whitespace);
            if cursor.at_end() {
                break;
            }
            nodes.push(self.parse_block(&mut cursor)?);
        }

        debug_assert_eq!(cursor.pos(), input.len());
        log::debug!("parsed {} blocks from {} bytes", nodes.len(), input.len());

        Ok(Document {
            nodes,
            span: Span::between(0, cursor.pos()),
        })
    }

    /// Parse `input` as a single inline expression, ignoring block syntax
    /// and blank lines.
    pub fn parse_inline<'a>(&self, input: &'a str) -> Result<Vec<Node<'a>>, ParseError> {
        let mut cursor = Cursor::new(input);
        let run = InlineParser::new(&mut cursor, self).parse(None)?;
        Ok(run.nodes)
    }

    fn parse_block<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Node<'a>, ParseError> {
        let start = cursor.pos();

        if let Some(marker) = cursor.consume_if(Pattern::HeadingMarker) {
            let level = marker.len() as u8;
            let run = InlineParser::new(cursor, self).parse(Some(Pattern::BlankLine))?;
            log::debug!("heading level {} at byte {}", level, start);
            return Ok(Node::Heading(Heading {
                level,
                children: run.nodes,
                span: Span::between(start, run.content_end),
            }));
        }

        if cursor.consume_if(Pattern::Ruler).is_some() {
            log::debug!("ruler at byte {}", start);
            return Ok(Node::Ruler(Span::between(start, cursor.pos())));
        }

        let run = InlineParser::new(cursor, self).parse(Some(Pattern::BlankLine))?;
        log::debug!(
            "paragraph at byte {} with {} inline nodes",
            start,
            run.nodes.len()
        );
        Ok(Node::Paragraph(Paragraph {
            children: run.nodes,
            span: Span::between(start, run.content_end),
        }))
    }
}
