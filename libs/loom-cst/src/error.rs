//! Errors that travel with a CST, and errors raised while loading one.
//!
//! The external parser recovers from bad input and records what it skipped
//! in [`Cst::errors`](crate::Cst). The transformer refuses to run while any
//! of them are present.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem the parser recovered from, located in the source.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} at byte {}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub const fn at(span: Span, kind: ParseErrorKind) -> Self {
        Self { kind, span }
    }

    /// Input ended while `expected` was still open.
    ///
    /// ```rust
    /// use loom_cst::{ParseError, Span};
    ///
    /// let error = ParseError::eof(Span::from_bytes(40, 40), "'}'");
    /// assert_eq!(error.to_string(), "unexpected end of file, expected '}' at byte 40");
    /// ```
    pub fn eof(span: Span, expected: impl Into<String>) -> Self {
        Self::at(
            span,
            ParseErrorKind::UnexpectedEof {
                expected: expected.into(),
            },
        )
    }

    pub fn unexpected(span: Span, found: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::at(
            span,
            ParseErrorKind::UnexpectedToken {
                found: found.into(),
                expected: expected.into(),
            },
        )
    }
}

/// What went wrong; serialized with a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParseErrorKind {
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Failure to load a serialized tree.
#[derive(Debug, Error)]
pub enum CstError {
    #[error("invalid serialized CST: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_message() {
        let error = ParseError::unexpected(Span::from_bytes(10, 11), "}", "identifier");
        assert_eq!(
            error.to_string(),
            "unexpected token '}', expected identifier at byte 10"
        );
    }

    #[test]
    fn test_kind_serializes_with_type_tag() {
        let json = serde_json::to_string(&ParseErrorKind::UnterminatedString).unwrap();
        assert_eq!(json, r#"{"type":"unterminated_string"}"#);
    }

    #[test]
    fn test_cst_error_wraps_json_failure() {
        let err = serde_json::from_str::<ParseError>("{").unwrap_err();
        assert!(CstError::from(err).to_string().starts_with("invalid serialized CST"));
    }
}
