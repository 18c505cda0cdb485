//! # Resource Transformation
//!
//! Builds a `Resource` from a `ResourceDefinition` node by delegating each
//! annotation, variable declaration and statement child, in source order,
//! to its own transformer.

use super::{expect_kind, identifier_text};
use super::{transform_annotation, transform_statement, transform_variable_declaration};
use crate::ast::Resource;
use crate::error::TransformError;
use loom_cst::{CstNode, NodeKind};

/// Transform a resource definition node.
///
/// ## CST Structure
///
/// ```text
/// ResourceDefinition
/// ├── Annotation*
/// ├── Identifier (resource name)
/// └── FunctionBody
///     ├── VariableDeclaration*
///     └── Statement*
/// ```
///
/// Anything else among the resource's children, a second name or a second
/// body is a malformed tree. Declarations must precede the first statement;
/// anything else in the body besides comments is malformed too.
pub fn transform_resource(node: &CstNode) -> Result<Resource, TransformError> {
    expect_kind(node, NodeKind::ResourceDefinition)?;
    let mut resource = Resource::new(identifier_text(node, "resource")?, node.span);

    let mut seen_name = false;
    let mut seen_body = false;
    for child in node.significant_children() {
        match child.kind {
            NodeKind::Annotation => {
                resource.add_annotation(transform_annotation(child)?);
            }
            NodeKind::Identifier if !seen_name => seen_name = true,
            NodeKind::FunctionBody if !seen_body => {
                seen_body = true;
                transform_body(&mut resource, child)?;
            }
            NodeKind::Identifier | NodeKind::FunctionBody => {
                return Err(TransformError::malformed(
                    child.span,
                    format!(
                        "resource '{}' has a second {:?}",
                        resource.name(),
                        child.kind
                    ),
                ));
            }
            other => {
                return Err(TransformError::malformed(
                    child.span,
                    format!("unexpected {other:?} in resource '{}'", resource.name()),
                ));
            }
        }
    }
    if !seen_body {
        return Err(TransformError::malformed(
            node.span,
            format!("resource missing {:?}", NodeKind::FunctionBody),
        ));
    }

    tracing::debug!(
        resource = resource.name(),
        annotations = resource.annotations().len(),
        variables = resource.local_variables().len(),
        statements = resource.statements().len(),
        "resource transformed"
    );
    Ok(resource)
}

fn transform_body(resource: &mut Resource, body: &CstNode) -> Result<(), TransformError> {
    let mut seen_statement = false;
    for child in body.significant_children() {
        match child.kind {
            NodeKind::VariableDeclaration if !seen_statement => {
                resource.add_variable(transform_variable_declaration(child)?);
            }
            NodeKind::VariableDeclaration => {
                return Err(TransformError::malformed(
                    child.span,
                    "variable declaration after the first statement",
                ));
            }
            NodeKind::Statement => {
                seen_statement = true;
                resource.add_statement(transform_statement(child)?);
            }
            other => {
                return Err(TransformError::malformed(
                    child.span,
                    format!(
                        "unexpected {other:?} in body of resource '{}'",
                        resource.name()
                    ),
                ));
            }
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
