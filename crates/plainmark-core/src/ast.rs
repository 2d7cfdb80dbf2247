//! Tree types produced by the parser.
//!
//! The tree is:
//!
//! - **Closed**: [`Node`] is an enum, so consumers match every kind
//! - **Zero-copy**: text borrows from the input unless an escape forced a copy
//! - **Span-tracked**: every node records the bytes it came from
//! - **Owned top-down**: parents own their children, nothing points upward
//!   (see [`ParentIndex`](crate::tree::ParentIndex) for upward navigation)

use crate::span::Span;

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// A parsed document: the synthetic root over the top-level blocks.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document<'a> {
    /// Top-level blocks (`Heading`, `Ruler`, `Paragraph`) in document order.
    pub nodes: Vec<Node<'a>>,
    /// Span covering everything the parser consumed, i.e. the whole input.
    pub span: Span,
}

/// Tag of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    Heading,
    Ruler,
    Paragraph,
    Plain,
    Highlight,
    Emphasis,
    Code,
    CodeBlock,
    Link,
}

impl NodeKind {
    /// Whether nodes of this kind may hold children.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            NodeKind::Heading
                | NodeKind::Paragraph
                | NodeKind::Highlight
                | NodeKind::Emphasis
                | NodeKind::Link
        )
    }

    /// Whether this kind only appears at the top level.
    #[inline]
    pub const fn is_block(self) -> bool {
        matches!(self, NodeKind::Heading | NodeKind::Ruler | NodeKind::Paragraph)
    }
}

/// A single element of the tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Node<'a> {
    /// Heading, levels 1-4.
    Heading(Heading<'a>),
    /// Horizontal ruler. Carries nothing but its position.
    Ruler(Span),
    /// Run of inline content terminated by a blank line.
    Paragraph(Paragraph<'a>),
    /// Literal text with escapes resolved.
    Plain(Text<'a>),
    /// `**bold**`
    Highlight(Highlight<'a>),
    /// `*italic*`, only produced when italics are enabled.
    Emphasis(Emphasis<'a>),
    /// `` `code` ``
    Code(Code<'a>),
    /// Fenced code, verbatim.
    CodeBlock(Code<'a>),
    /// `[label](target)`
    Link(Link<'a>),
}

/// Heading with level and inline content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Heading<'a> {
    /// Heading level (1-4).
    pub level: u8,
    pub children: Vec<Node<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Paragraph<'a> {
    pub children: Vec<Node<'a>>,
    pub span: Span,
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Text<'a> {
    /// The text with escape backslashes removed.
    pub content: CowStr<'a>,
    pub span: Span,
}

/// Bold text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Highlight<'a> {
    pub children: Vec<Node<'a>>,
    /// `false` if end of input closed this instead of a delimiter.
    pub closed: bool,
    pub span: Span,
}

/// Italic text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Emphasis<'a> {
    pub children: Vec<Node<'a>>,
    pub closed: bool,
    pub span: Span,
}

/// Verbatim code, inline or fenced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Code<'a> {
    /// Raw content between the delimiters. Never parsed.
    pub content: CowStr<'a>,
    pub closed: bool,
    pub span: Span,
}

/// Hyperlink with a parsed label and a raw target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Link<'a> {
    /// Link label (may contain nested formatting and links).
    pub children: Vec<Node<'a>>,
    /// Raw target between the parentheses; empty when there is none.
    pub target: CowStr<'a>,
    pub closed: bool,
    pub span: Span,
}

impl<'a> Node<'a> {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Heading(_) => NodeKind::Heading,
            Node::Ruler(_) => NodeKind::Ruler,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Plain(_) => NodeKind::Plain,
            Node::Highlight(_) => NodeKind::Highlight,
            Node::Emphasis(_) => NodeKind::Emphasis,
            Node::Code(_) => NodeKind::Code,
            Node::CodeBlock(_) => NodeKind::CodeBlock,
            Node::Link(_) => NodeKind::Link,
        }
    }

    /// Raw text: leaf content for `Plain`/`Code`/`CodeBlock`, the target for
    /// `Link`, and the empty string for everything else.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Node::Plain(t) => &t.content,
            Node::Code(c) | Node::CodeBlock(c) => &c.content,
            Node::Link(l) => &l.target,
            Node::Heading(_)
            | Node::Ruler(_)
            | Node::Paragraph(_)
            | Node::Highlight(_)
            | Node::Emphasis(_) => "",
        }
    }

    /// Heading level, `None` for every other kind.
    #[inline]
    pub fn level(&self) -> Option<u8> {
        match self {
            Node::Heading(h) => Some(h.level),
            _ => None,
        }
    }

    /// Child nodes; always empty for leaves and rulers.
    #[inline]
    pub fn children(&self) -> &[Node<'a>] {
        match self {
            Node::Heading(h) => &h.children,
            Node::Paragraph(p) => &p.children,
            Node::Highlight(h) => &h.children,
            Node::Emphasis(e) => &e.children,
            Node::Link(l) => &l.children,
            Node::Ruler(_) | Node::Plain(_) | Node::Code(_) | Node::CodeBlock(_) => &[],
        }
    }

    #[inline]
    pub fn span(&self) -> Span {
        match self {
            Node::Heading(h) => h.span,
            Node::Ruler(span) => *span,
            Node::Paragraph(p) => p.span,
            Node::Plain(t) => t.span,
            Node::Highlight(h) => h.span,
            Node::Emphasis(e) => e.span,
            Node::Code(c) | Node::CodeBlock(c) => c.span,
            Node::Link(l) => l.span,
        }
    }

    /// `false` when the node's closing delimiter was missing and end of input
    /// closed it. Nodes without delimiters are always closed.
    #[inline]
    pub fn is_closed(&self) -> bool {
        match self {
            Node::Highlight(h) => h.closed,
            Node::Emphasis(e) => e.closed,
            Node::Code(c) | Node::CodeBlock(c) => c.closed,
            Node::Link(l) => l.closed,
            Node::Heading(_) | Node::Ruler(_) | Node::Paragraph(_) | Node::Plain(_) => true,
        }
    }
}
