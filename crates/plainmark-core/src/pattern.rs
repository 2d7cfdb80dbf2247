//! The fixed lexical vocabulary shared by the block and inline parsers.
//!
//! Each [`Pattern`] knows how to match itself against the bytes at the
//! cursor. Matching is pure: it reports the length of the match and never
//! advances anything.

/// Which fence opens and closes a verbatim code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceStyle {
    /// Three backticks.
    #[default]
    Backticks,
    /// Three single quotes.
    Quotes,
}

impl FenceStyle {
    #[inline]
    pub const fn delimiter(self) -> &'static str {
        match self {
            FenceStyle::Backticks => "```",
            FenceStyle::Quotes => "'''",
        }
    }
}

/// Maximum heading level; longer `#` runs are clamped.
pub const MAX_HEADING_LEVEL: usize = 4;

/// Minimum number of `-` characters forming a ruler.
pub const MIN_RULER_LEN: usize = 3;

/// A lexical pattern recognized at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// One or more spaces, tabs, carriage returns or newlines.
    Whitespace,
    /// Two consecutive newlines (a `\r` between them is tolerated).
    BlankLine,
    /// A backslash followed by exactly one character.
    Escape,
    /// Three-character fence for code blocks.
    Fence(FenceStyle),
    /// A single backtick.
    Code,
    /// `**`
    Bold,
    /// A single `*`, only recognized when italics are enabled.
    Italic,
    /// One to four `#` characters.
    HeadingMarker,
    /// Three or more `-` characters.
    Ruler,
    /// `[`
    LinkOpen,
    /// `]`
    LinkClose,
    /// `(`
    TargetOpen,
    /// `)`
    TargetClose,
}

impl Pattern {
    /// Length in bytes of the match at the start of `bytes`, if any.
    pub fn match_len(self, bytes: &[u8]) -> Option<usize> {
        match self {
            Pattern::Whitespace => {
                let n = bytes.iter().take_while(|&&b| is_whitespace(b)).count();
                (n > 0).then_some(n)
            }
            Pattern::BlankLine => match bytes {
                [b'\n', b'\n', ..] => Some(2),
                [b'\n', b'\r', b'\n', ..] => Some(3),
                _ => None,
            },
            Pattern::Escape => match bytes {
                [b'\\', next, ..] => Some(1 + utf8_len(*next)),
                _ => None,
            },
            Pattern::Fence(style) => literal(bytes, style.delimiter().as_bytes()),
            Pattern::Code => literal(bytes, b"`"),
            Pattern::Bold => literal(bytes, b"**"),
            Pattern::Italic => literal(bytes, b"*"),
            Pattern::HeadingMarker => {
                let run = bytes.iter().take_while(|&&b| b == b'#').count();
                (run > 0).then_some(run.min(MAX_HEADING_LEVEL))
            }
            Pattern::Ruler => {
                let run = bytes.iter().take_while(|&&b| b == b'-').count();
                (run >= MIN_RULER_LEN).then_some(run)
            }
            Pattern::LinkOpen => literal(bytes, b"["),
            Pattern::LinkClose => literal(bytes, b"]"),
            Pattern::TargetOpen => literal(bytes, b"("),
            Pattern::TargetClose => literal(bytes, b")"),
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Whitespace => "whitespace",
            Pattern::BlankLine => "blank line",
            Pattern::Escape => "escape",
            Pattern::Fence(_) => "code fence",
            Pattern::Code => "inline code",
            Pattern::Bold => "bold",
            Pattern::Italic => "italic",
            Pattern::HeadingMarker => "heading marker",
            Pattern::Ruler => "ruler",
            Pattern::LinkOpen => "link",
            Pattern::LinkClose => "link close",
            Pattern::TargetOpen => "link target",
            Pattern::TargetClose => "link target close",
        }
    }
}

#[inline(always)]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline(always)]
fn literal(bytes: &[u8], lit: &[u8]) -> Option<usize> {
    bytes.starts_with(lit).then_some(lit.len())
}

/// Width of the UTF-8 sequence introduced by `lead`.
///
/// The cursor only ever sits on character boundaries, so `lead` is never a
/// continuation byte.
#[inline(always)]
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

