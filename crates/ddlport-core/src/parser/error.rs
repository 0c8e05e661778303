//! Parser error types.

use thiserror::Error;

use crate::lexer::{Span, TokenKind};

/// A parse error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// 1-based line of the span start, 0 until located.
    pub line: usize,
    /// 1-based column of the span start, 0 until located.
    pub column: usize,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            line: 0,
            column: 0,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("Unexpected token: expected {expected}, found {found:?}"),
            expected: Some(expected),
            found: Some(found),
            ..Self::new(String::new(), span)
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("Unexpected end of input: expected {expected}"),
            expected: Some(expected),
            found: Some(TokenKind::Eof),
            ..Self::new(String::new(), span)
        }
    }

    /// Resolves line and column against the parsed input.
    #[must_use]
    pub fn locate(mut self, input: &str) -> Self {
        let (line, column) = self.span.location(input);
        self.line = line;
        self.column = column;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location() {
        let err = ParseError::new("Unknown data type FOO", Span::new(9, 12)).locate("CREATE\n  FOO");
        assert_eq!(err.to_string(), "Unknown data type FOO at line 2, column 3");
    }

    #[test]
    fn test_unexpected_records_found() {
        let err = ParseError::unexpected("')'", TokenKind::Comma, Span::new(0, 1));
        assert_eq!(err.expected.as_deref(), Some("')'"));
        assert_eq!(err.found, Some(TokenKind::Comma));
        assert!(err.message.starts_with("Unexpected token: expected ')'"));
    }

    #[test]
    fn test_unexpected_eof() {
        let err = ParseError::unexpected_eof("TABLE", Span::new(6, 6));
        assert_eq!(err.found, Some(TokenKind::Eof));
        assert_eq!(err.message, "Unexpected end of input: expected TABLE");
    }
}
