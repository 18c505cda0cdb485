//! # Annotation Transformation
//!
//! Annotations are stored as written; their meaning is assigned later.

use super::expressions::string_literal_value;
use super::{expect_kind, identifier_text, required_child};
use crate::ast::{Annotation, AnnotationAttribute};
use crate::error::TransformError;
use loom_cst::{CstNode, NodeKind};

/// Transform an annotation node.
///
/// ## CST Structure
///
/// ```text
/// Annotation
/// ├── Identifier (name, leading '@' optional)
/// ├── StringLiteral? (single value)
/// └── AnnotationAttribute*
///     ├── Identifier (key)
///     └── StringLiteral (value)
/// ```
///
/// ## Example
///
/// ```text
/// @GET
/// @Path("/users")
/// @Consumes(type = "application/json")
/// ```
pub fn transform_annotation(node: &CstNode) -> Result<Annotation, TransformError> {
    expect_kind(node, NodeKind::Annotation)?;
    let raw = identifier_text(node, "annotation")?;
    let name = raw.strip_prefix('@').unwrap_or(&raw).to_string();
    if name.is_empty() {
        return Err(TransformError::malformed(node.span, "annotation has an empty name"));
    }
    tracing::trace!(annotation = %name, "annotation");

    let mut value = None;
    let mut attributes = Vec::new();
    for child in node.significant_children() {
        match child.kind {
            NodeKind::Identifier => {}
            NodeKind::StringLiteral if value.is_none() => {
                value = Some(string_literal_value(child)?);
            }
            NodeKind::AnnotationAttribute => attributes.push(transform_attribute(child)?),
            other => {
                return Err(TransformError::malformed(
                    child.span,
                    format!("unexpected {other:?} in annotation '@{name}'"),
                ));
            }
        }
    }

    Ok(Annotation {
        name,
        value,
        attributes,
        span: node.span,
    })
}

fn transform_attribute(node: &CstNode) -> Result<AnnotationAttribute, TransformError> {
    let key = identifier_text(node, "annotation attribute")?;
    let value = string_literal_value(required_child(
        node,
        NodeKind::StringLiteral,
        "annotation attribute",
    )?)?;
    Ok(AnnotationAttribute { key, value })
}
