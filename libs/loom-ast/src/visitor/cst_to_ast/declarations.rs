//! # Declaration Transformation
//!
//! Transforms local variable declarations of a resource body.

use super::{expect_kind, identifier_text, required_child};
use crate::ast::{TypeRef, VariableDecl};
use crate::error::TransformError;
use loom_cst::{CstNode, NodeKind};

/// Transform a variable declaration node.
///
/// ## CST Structure
///
/// ```text
/// VariableDeclaration
/// ├── TypeName
/// └── Identifier (variable name)
/// ```
///
/// ## Example
///
/// ```text
/// message msg;
/// int[] ids;
/// ```
pub fn transform_variable_declaration(node: &CstNode) -> Result<VariableDecl, TransformError> {
    expect_kind(node, NodeKind::VariableDeclaration)?;
    let type_node = required_child(node, NodeKind::TypeName, "variable declaration")?;
    let var_type = TypeRef::parse(type_node.text_or_empty()).ok_or_else(|| {
        TransformError::malformed(
            type_node.span,
            format!("invalid type name '{}'", type_node.text_or_empty()),
        )
    })?;
    let name = identifier_text(node, "variable declaration")?;
    tracing::trace!(variable = %name, ty = %var_type.name, "declaration");

    Ok(VariableDecl {
        name,
        var_type,
        span: node.span,
    })
}
