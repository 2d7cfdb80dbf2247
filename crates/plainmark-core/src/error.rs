use crate::span::Span;
use std::fmt;

/// Error kinds for categorizing parse errors.
///
/// Unterminated delimiters are not errors: they are closed at end of input
/// and flagged on the node instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Inline constructs nested deeper than the configured limit.
    MaxNestingExceeded,
}

/// A fatal parse error. No tree is produced alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,
    /// Source location where the error occurred
    pub span: Option<Span>,
    /// Error categorization
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create an error for a construct opened past the nesting limit.
    pub fn max_nesting_exceeded(limit: usize, span: Option<Span>) -> Self {
        Self {
            message: format!("inline nesting exceeds maximum depth of {}", limit),
            span,
            kind: ParseErrorKind::MaxNestingExceeded,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at bytes {}..{}", span.start, span.end)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
