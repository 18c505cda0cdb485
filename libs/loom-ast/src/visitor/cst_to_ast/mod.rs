//! # CST to AST Transformation
//!
//! Each syntactic category has its own pure transformer
//! `&CstNode -> Result<_, TransformError>`. A transformer first checks that
//! it was handed the node kind it understands, then delegates every child,
//! in source order, to the transformer of that child's category.
//!
//! ## Example
//!
//! ```rust,ignore
//! let cst = Cst::from_json(json)?;
//! let ast = transform(&cst)?;
//! assert_eq!(ast.services.len(), 1);
//! ```

mod annotations;
mod declarations;
mod expressions;
mod resources;
mod statements;

pub use annotations::transform_annotation;
pub use declarations::transform_variable_declaration;
pub use expressions::transform_expression;
pub use resources::transform_resource;
pub use statements::transform_statement;

use crate::ast::{Ast, Service};
use crate::diagnostic::Diagnostic;
use crate::error::TransformError;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use loom_cst::{Cst, CstNode, NodeKind};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Transform a whole CST into an AST.
///
/// Refuses trees that carry parser errors or error nodes, reporting one
/// diagnostic per error.
#[tracing::instrument(level = "debug", skip_all)]
pub fn transform(cst: &Cst) -> Result<Ast, TransformError> {
    let diagnostics = collect_syntax_errors(cst);
    if !diagnostics.is_empty() {
        tracing::debug!(count = diagnostics.len(), "refusing CST with syntax errors");
        return Err(TransformError::SyntaxErrors(diagnostics));
    }

    let root = &cst.root;
    expect_kind(root, NodeKind::CompilationUnit)?;

    let mut services = Vec::new();
    for child in root.significant_children() {
        match child.kind {
            NodeKind::ServiceDefinition => services.push(transform_service(child)?),
            other => {
                return Err(TransformError::malformed(
                    child.span,
                    format!("unexpected {other:?} at top level"),
                ));
            }
        }
    }
    Ok(Ast::with_services(services))
}

/// Transform a service definition and every resource it declares.
///
/// ## CST Structure
///
/// ```text
/// ServiceDefinition
/// ├── Annotation*
/// ├── Identifier (service name)
/// └── ResourceDefinition*
/// ```
pub fn transform_service(node: &CstNode) -> Result<Service, TransformError> {
    expect_kind(node, NodeKind::ServiceDefinition)?;
    let name = identifier_text(node, "service")?;

    let mut annotations = Vec::new();
    let mut resources = Vec::new();
    for child in node.significant_children() {
        match child.kind {
            NodeKind::Annotation => annotations.push(transform_annotation(child)?),
            NodeKind::ResourceDefinition => resources.push(transform_resource(child)?),
            NodeKind::Identifier => {}
            other => {
                return Err(TransformError::malformed(
                    child.span,
                    format!("unexpected {other:?} in service '{name}'"),
                ));
            }
        }
    }

    tracing::debug!(service = %name, resources = resources.len(), "service transformed");
    Ok(Service {
        name,
        annotations,
        resources,
        span: node.span,
    })
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

fn collect_syntax_errors(cst: &Cst) -> Vec<Diagnostic> {
    let reported = cst
        .errors
        .iter()
        .map(|e| Diagnostic::error(e.kind.to_string(), e.span));
    let recovered = cst.root.error_nodes().into_iter().map(|n| {
        let near: String = n.text_or_empty().chars().take(20).collect();
        Diagnostic::error(format!("syntax error near '{near}'"), n.span)
            .with_hint("input skipped by the parser")
    });
    reported.chain(recovered).collect()
}

/// Fails unless `node` has the expected kind.
pub(crate) fn expect_kind(node: &CstNode, kind: NodeKind) -> Result<(), TransformError> {
    if node.kind == kind {
        Ok(())
    } else {
        Err(TransformError::malformed(
            node.span,
            format!("expected {kind:?}, found {:?}", node.kind),
        ))
    }
}

/// First child of `kind`, or a malformed-tree error naming `what`.
pub(crate) fn required_child<'a>(
    node: &'a CstNode,
    kind: NodeKind,
    what: &str,
) -> Result<&'a CstNode, TransformError> {
    node.find_child(kind)
        .ok_or_else(|| TransformError::malformed(node.span, format!("{what} missing {kind:?}")))
}

/// Text of the node's `Identifier` child; must be non-empty.
pub(crate) fn identifier_text(node: &CstNode, what: &str) -> Result<String, TransformError> {
    let ident = required_child(node, NodeKind::Identifier, what)?;
    let text = ident.text_or_empty();
    if text.is_empty() {
        return Err(TransformError::malformed(ident.span, format!("{what} has an empty name")));
    }
    Ok(text.to_string())
}

/// Runs a recursive transformation with enough native stack for deep trees.
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, f)
}

// =============================================================================
// TESTS
// =============================================================================
