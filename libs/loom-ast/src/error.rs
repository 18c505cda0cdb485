//! # Transformation Errors
//!
//! Errors raised while turning a CST into the semantic tree. Apart from
//! `SyntaxErrors`, every variant signals that the parser handed over a tree
//! that breaks the node-shape contract.

use crate::diagnostic::Diagnostic;
use loom_cst::{NodeKind, Span};
use thiserror::Error;

/// Errors that can occur during CST to AST transformation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The parser reported errors or left error nodes in the tree.
    #[error("syntax errors in source ({} found)", .0.len())]
    SyntaxErrors(Vec<Diagnostic>),

    /// A node does not have the shape its kind requires.
    #[error("malformed syntax tree at {span}: {message}")]
    MalformedSyntaxTree { message: String, span: Span },

    /// Literal text the parser accepted but which has no value.
    #[error("invalid {kind:?} '{text}' at {span}")]
    InvalidLiteral {
        kind: NodeKind,
        text: String,
        span: Span,
    },
}

impl TransformError {
    pub(crate) fn malformed(span: Span, message: impl Into<String>) -> Self {
        TransformError::MalformedSyntaxTree {
            message: message.into(),
            span,
        }
    }
}
