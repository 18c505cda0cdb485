//! # Loom CST
//!
//! Concrete Syntax Tree types shared between the external parser and the
//! loom AST transformer. This crate does not parse source text; it only
//! defines the tree shape the parser must produce.
//!
//! ## Pipeline Integration
//!
//! ```text
//! external parser → loom-cst (Cst) → loom-ast (Ast) → later passes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use loom_cst::{CstNode, NodeKind, Span};
//!
//! let name = CstNode::leaf(NodeKind::Identifier, Span::from_bytes(9, 13), "echo");
//! let span = Span::from_bytes(0, 20);
//! let resource = CstNode::branch(NodeKind::ResourceDefinition, span, vec![name]);
//! let found = resource.find_child(NodeKind::Identifier);
//! assert_eq!(found.map(CstNode::text_or_empty), Some("echo"));
//! ```

pub mod cst;
pub mod error;
pub mod span;

// Re-export public API
pub use cst::{Cst, CstNode, NodeKind};
pub use error::{CstError, ParseError, ParseErrorKind};
pub use span::Span;
