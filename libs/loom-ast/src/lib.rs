//! # Loom AST Crate
//!
//! Converts the parser's CST (Concrete Syntax Tree) into the typed semantic
//! tree consumed by later compilation passes. Every node carries its source
//! span for diagnostics.
//!
//! ## Architecture
//!
//! ```text
//! Source → external parser (CST) → loom-ast (Service / Resource nodes)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use loom_ast::transform;
//! use loom_cst::Cst;
//!
//! let cst = Cst::from_json(json)?;
//! let ast = transform(&cst)?;
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: All nodes are strongly typed Rust enums/structs
//! - **Order Preserving**: Children are appended in source order, never reordered
//! - **No Evaluation**: Pure syntax transformation, no semantic analysis

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod visitor;

// Re-exports for convenience
pub use ast::*;
pub use diagnostic::{Diagnostic, Severity};
pub use error::TransformError;
pub use visitor::cst_to_ast::{
    transform, transform_annotation, transform_expression, transform_resource,
    transform_service, transform_statement, transform_variable_declaration,
};
