//! Recursive-descent inline parser.
//!
//! Parses from the cursor up to a terminator pattern (or end of input).
//! Bold, italic and link labels recurse with their own closing delimiter as
//! the terminator; code spans and fences are read verbatim. Plain text
//! borrows from the input and only allocates when an escape has to drop its
//! backslash.
//!
//! Matching order at each position:
//! escape, fence, inline code, bold, italic (if enabled), link, plain.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

use crate::ast::{Code, Emphasis, Highlight, Link, Node, Text};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::pattern::{is_whitespace, FenceStyle, Pattern};
use crate::span::Span;

/// Output of one bounded inline run.
pub(crate) struct Run<'a> {
    pub nodes: Vec<Node<'a>>,
    /// End of the last content byte, trailing whitespace excluded.
    pub content_end: usize,
    /// Whether the terminator was found (vs. end of input).
    pub closed: bool,
}

pub(crate) struct InlineParser<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    config: &'c Parser,
    depth: usize,
    /// Enclosing bold runs, so `***` can close an italic before its bold.
    bold_depth: usize,
}

impl<'c, 'a> InlineParser<'c, 'a> {
    #[inline]
    pub fn new(cursor: &'c mut Cursor<'a>, config: &'c Parser) -> Self {
        Self {
            cursor,
            config,
            depth: 0,
            bold_depth: 0,
        }
    }

    /// Parse a bounded inline expression, consume the terminator if present
    /// and skip the whitespace after it.
    pub fn parse(&mut self, terminator: Option<Pattern>) -> Result<Run<'a>, ParseError> {
        let run = self.parse_run(terminator)?;
        self.skip_whitespace(terminator);
        Ok(run)
    }

    fn parse_run(&mut self, terminator: Option<Pattern>) -> Result<Run<'a>, ParseError> {
        let begin = self.cursor.pos();
        self.skip_whitespace(terminator);

        let mut nodes = Vec::with_capacity(4);
        let mut run = PlainRun::at(self.cursor.pos());
        let fence = Pattern::Fence(self.config.fence());

        while !self.cursor.at_end() && !self.at_terminator(terminator) {
            let start = self.cursor.pos();

            if let Some(escape) = self.cursor.consume_if(Pattern::Escape) {
                run.push_escaped(self.cursor.slice(run.segment, start), &escape[1..]);
                run.segment = self.cursor.pos();
                continue;
            }

            let mut skip_after = true;
            let node = if self.cursor.matches(fence) {
                skip_after = false;
                run.flush(self.cursor.input(), start, false, &mut nodes);
                Node::CodeBlock(self.verbatim(fence.name(), self.config.fence().delimiter()))
            } else if self.cursor.matches(Pattern::Code) {
                skip_after = false;
                run.flush(self.cursor.input(), start, false, &mut nodes);
                Node::Code(self.verbatim(Pattern::Code.name(), "`"))
            } else if self.cursor.matches(Pattern::Bold) {
                run.flush(self.cursor.input(), start, false, &mut nodes);
                self.highlight()?
            } else if self.config.italics() && self.cursor.matches(Pattern::Italic) {
                run.flush(self.cursor.input(), start, false, &mut nodes);
                self.emphasis()?
            } else if self.cursor.matches(Pattern::LinkOpen) {
                run.flush(self.cursor.input(), start, false, &mut nodes);
                self.link()?
            } else {
                self.skip_plain();
                continue;
            };

            nodes.push(node);
            if skip_after {
                self.skip_whitespace(terminator);
            }
            run = PlainRun::at(self.cursor.pos());
        }

        run.flush(self.cursor.input(), self.cursor.pos(), true, &mut nodes);
        let content_end = nodes.last().map_or(begin, |n| n.span().end as usize);

        let closed = match terminator {
            Some(t) => self.cursor.consume_if(t).is_some(),
            None => true,
        };

        Ok(Run {
            nodes,
            content_end,
            closed,
        })
    }

    #[inline]
    fn at_terminator(&self, terminator: Option<Pattern>) -> bool {
        match terminator {
            // A `**` inside italics opens bold rather than closing the italic,
            // unless it is the tail of a `***` that also closes a bold.
            Some(Pattern::Italic) => match self.cursor.remaining_bytes() {
                [b'*', b'*', b'*', ..] => self.bold_depth > 0,
                [b'*', b'*', ..] => false,
                [b'*', ..] => true,
                _ => false,
            },
            Some(t) => self.cursor.matches(t),
            None => false,
        }
    }

    /// Skip whitespace inside a run. A block-level run stops short of the
    /// blank line that ends it, so a construct closing at the end of a line
    /// never merges two blocks; everywhere else a blank line is content.
    fn skip_whitespace(&mut self, terminator: Option<Pattern>) {
        let block_level = terminator == Some(Pattern::BlankLine);
        while let Some(&b) = self.cursor.remaining_bytes().first() {
            if !is_whitespace(b) || (block_level && self.cursor.matches(Pattern::BlankLine)) {
                break;
            }
            self.cursor.advance(1);
        }
    }

    /// Consume one plain character, then jump to the next byte that could
    /// start a pattern or terminator.
    #[inline]
    fn skip_plain(&mut self) {
        self.cursor.advance_char();
        let rest = self.cursor.remaining_bytes();
        let common = memchr3(b'\\', b'`', b'*', rest);
        let structural = memchr3(b'[', b']', b'\n', rest);
        let quote = match self.config.fence() {
            FenceStyle::Quotes => memchr(b'\'', rest),
            FenceStyle::Backticks => None,
        };
        let next = [common, structural, quote]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(rest.len());
        self.cursor.advance(next);
    }

    /// Read from the opening delimiter at the cursor to the matching one,
    /// verbatim. An unmatched delimiter runs to end of input.
    fn verbatim(&mut self, name: &str, delimiter: &str) -> Code<'a> {
        let open = self.cursor.pos();
        self.cursor.advance(delimiter.len());
        let content_start = self.cursor.pos();

        let (content_end, closed) = match self.cursor.find(delimiter) {
            Some(close) => {
                self.cursor.seek(close);
                self.cursor.advance(delimiter.len());
                (close, true)
            }
            None => {
                let end = self.cursor.input().len();
                self.cursor.seek(end);
                log::debug!("unterminated {} at byte {} closed at end of input", name, open);
                (end, false)
            }
        };

        Code {
            content: Cow::Borrowed(self.cursor.slice(content_start, content_end)),
            closed,
            span: Span::between(open, self.cursor.pos()),
        }
    }

    fn highlight(&mut self) -> Result<Node<'a>, ParseError> {
        let open = self.cursor.pos();
        self.bold_depth += 1;
        let run = self.nested(open, Pattern::Bold);
        self.bold_depth -= 1;
        let run = run?;
        let span = Span::between(open, self.cursor.pos());
        Ok(Node::Highlight(Highlight {
            children: run.nodes,
            closed: run.closed,
            span,
        }))
    }

    fn emphasis(&mut self) -> Result<Node<'a>, ParseError> {
        let open = self.cursor.pos();
        let run = self.nested(open, Pattern::Italic)?;
        let span = Span::between(open, self.cursor.pos());
        Ok(Node::Emphasis(Emphasis {
            children: run.nodes,
            closed: run.closed,
            span,
        }))
    }

    fn link(&mut self) -> Result<Node<'a>, ParseError> {
        let open = self.cursor.pos();
        let label = self.nested(open, Pattern::LinkClose)?;
        let mut closed = label.closed;

        // The target must follow `]` immediately; whitespace in between
        // leaves a label-only link.
        let target = if self.cursor.consume_if(Pattern::TargetOpen).is_some() {
            let start = self.cursor.pos();
            match memchr(b')', self.cursor.remaining_bytes()) {
                Some(offset) => {
                    self.cursor.seek(start + offset);
                    self.cursor.consume_if(Pattern::TargetClose);
                    self.cursor.slice(start, start + offset)
                }
                None => {
                    let end = self.cursor.input().len();
                    self.cursor.seek(end);
                    log::debug!("unterminated link target at byte {}", start);
                    closed = false;
                    self.cursor.slice(start, end)
                }
            }
        } else {
            ""
        };

        let span = Span::between(open, self.cursor.pos());
        Ok(Node::Link(Link {
            children: label.nodes,
            target: Cow::Borrowed(target),
            closed,
            span,
        }))
    }

    /// Consume the opening delimiter at the cursor and recurse until
    /// `terminator`, enforcing the nesting limit.
    fn nested(&mut self, open: usize, terminator: Pattern) -> Result<Run<'a>, ParseError> {
        let opener = match terminator {
            Pattern::LinkClose => Pattern::LinkOpen,
            other => other,
        };
        let limit = self.config.max_nesting();
        if self.depth >= limit {
            log::warn!(
                "{} at byte {} exceeds maximum nesting depth {}",
                opener.name(),
                open,
                limit
            );
            let width = opener.match_len(self.cursor.remaining_bytes()).unwrap_or(1);
            return Err(ParseError::max_nesting_exceeded(
                limit,
                Some(Span::between(open, open + width)),
            ));
        }

        self.cursor.consume_if(opener);
        log::trace!("open {} at byte {} (depth {})", opener.name(), open, self.depth + 1);

        self.depth += 1;
        let run = self.parse_run(Some(terminator));
        self.depth -= 1;
        let run = run?;

        if !run.closed {
            log::debug!(
                "unterminated {} at byte {} closed at end of input",
                opener.name(),
                open
            );
        }
        Ok(run)
    }
}

/// Pending plain text between constructs.
///
/// `segment` marks the start of the still-borrowed tail. Escapes force the
/// text into `owned`, because the backslash has to go.
struct PlainRun {
    start: usize,
    segment: usize,
    owned: Option<String>,
}

impl PlainRun {
    #[inline]
    fn at(pos: usize) -> Self {
        Self {
            start: pos,
            segment: pos,
            owned: None,
        }
    }

    #[inline]
    fn push_escaped(&mut self, before: &str, literal: &str) {
        let buf = self.owned.get_or_insert_with(String::new);
        buf.push_str(before);
        buf.push_str(literal);
    }

    /// Emit the run ending at `end` as a `Plain` node, if it is non-empty.
    ///
    /// With `trim`, trailing whitespace from the source is dropped; escaped
    /// characters are literal and survive.
    fn flush<'a>(&mut self, input: &'a str, end: usize, trim: bool, nodes: &mut Vec<Node<'a>>) {
        let mut tail = &input[self.segment..end];
        if trim {
            tail = tail.trim_end_matches([' ', '\t', '\n', '\r']);
        }
        let text_end = self.segment + tail.len();

        let content = match self.owned.take() {
            Some(mut buf) => {
                buf.push_str(tail);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(tail),
        };

        if !content.is_empty() {
            nodes.push(Node::Plain(Text {
                content,
                span: Span::between(self.start, text_end),
            }));
        }

        self.start = end;
        self.segment = end;
    }
}
