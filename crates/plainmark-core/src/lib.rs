//! # Plainmark Core
//!
//! A small, deterministic parser for a constrained markdown-like format.
//!
//! The parser turns an in-memory text buffer into a tree of [`Node`]s:
//! headings, rulers and paragraphs at the top level; plain text, bold
//! highlights, inline code, fenced code blocks and links inside them.
//! Inline constructs nest to any depth up to a configurable limit.
//!
//! ## Quick Start
//!
//! ```rust
//! use plainmark_core::{Node, NodeKind};
//!
//! let input = "# Hello\n\nThis is **bold** and [a link](https://example.com).";
//! let doc = plainmark_core::parse(input).unwrap();
//!
//! assert_eq!(doc.nodes.len(), 2);
//! assert_eq!(doc.nodes[0].level(), Some(1));
//!
//! let links: Vec<&Node> = doc.iter().filter(|n| n.kind() == NodeKind::Link).collect();
//! assert_eq!(links[0].text(), "https://example.com");
//! ```
//!
//! ## Unterminated Constructs
//!
//! Missing closing delimiters never fail a parse. The construct runs to the
//! end of the input and the node reports `is_closed() == false`:
//!
//! ```rust
//! let doc = plainmark_core::parse("**never closed").unwrap();
//! let bold = &doc.nodes[0].children()[0];
//! assert!(!bold.is_closed());
//! ```
//!
//! ## Nesting Limit
//!
//! Recursion is bounded. Nesting past [`Parser::with_max_nesting`] fails
//! with [`ParseErrorKind::MaxNestingExceeded`] and no tree.

pub mod ast;
pub mod cursor;
pub mod error;
mod inline;
pub mod parser;
pub mod pattern;
pub mod span;
pub mod tree;

pub use ast::{Document, Node, NodeKind};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{Parser, DEFAULT_MAX_NESTING};
pub use pattern::FenceStyle;
pub use tree::{Descendants, ParentIndex};

/// Parse `input` with the default configuration.
#[inline]
pub fn parse(input: &str) -> Result<Document<'_>, ParseError> {
    Parser::new().parse(input)
}
