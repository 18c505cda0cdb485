//! # Expression Transformation
//!
//! Transforms CST expression nodes to AST expressions.

use super::{expect_kind, identifier_text, with_stack};
use crate::ast::{BinaryOp, Expression, FunctionCall, UnaryOp};
use crate::error::TransformError;
use loom_cst::{CstNode, NodeKind};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Transform a CST node to an AST expression.
pub fn transform_expression(node: &CstNode) -> Result<Expression, TransformError> {
    with_stack(|| match node.kind {
        // Literals
        NodeKind::IntegerLiteral => transform_integer(node),
        NodeKind::FloatLiteral => transform_float(node),
        NodeKind::StringLiteral => string_literal_value(node).map(Expression::String),
        NodeKind::BooleanLiteral => transform_boolean(node),
        NodeKind::NullLiteral => Ok(Expression::Null),

        // References
        NodeKind::VariableReference => Ok(Expression::Variable {
            name: identifier_text(node, "variable reference")?,
            span: node.span,
        }),
        NodeKind::ArrayElementReference => transform_array_element(node),

        // Compound expressions
        NodeKind::FunctionInvocation => Ok(Expression::FunctionInvocation {
            call: transform_function_call(node)?,
            span: node.span,
        }),
        NodeKind::BinaryExpression => transform_binary(node),
        NodeKind::UnaryExpression => transform_unary(node),
        NodeKind::ParenthesizedExpression => match operands(node)[..] {
            [inner] => transform_expression(inner),
            _ => Err(TransformError::malformed(
                node.span,
                "parenthesized expression needs exactly one operand",
            )),
        },

        other => Err(TransformError::malformed(
            node.span,
            format!("{other:?} is not an expression"),
        )),
    })
}

/// Transform a `FunctionInvocation` node into its call target and arguments.
///
/// ## CST Structure
///
/// ```text
/// FunctionInvocation
/// ├── Identifier ("name" or "package:name")
/// └── ArgumentList?
///     └── expression*
/// ```
pub(crate) fn transform_function_call(node: &CstNode) -> Result<FunctionCall, TransformError> {
    expect_kind(node, NodeKind::FunctionInvocation)?;
    let qualified = identifier_text(node, "function invocation")?;
    let (package, name) = match qualified.split_once(':') {
        Some((package, name)) if !package.is_empty() && !name.is_empty() => {
            (Some(package.to_string()), name.to_string())
        }
        Some(_) => {
            return Err(TransformError::malformed(
                node.span,
                format!("invalid qualified name '{qualified}'"),
            ));
        }
        None => (None, qualified),
    };

    let args = match node.find_child(NodeKind::ArgumentList) {
        Some(list) => list
            .significant_children()
            .map(transform_expression)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(FunctionCall {
        package,
        name,
        args,
    })
}

/// Decode a string literal token, quotes included.
pub(crate) fn string_literal_value(node: &CstNode) -> Result<String, TransformError> {
    let text = node.text_or_empty();
    let invalid = || TransformError::InvalidLiteral {
        kind: node.kind,
        text: text.to_string(),
        span: node.span,
    };
    let body = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .ok_or_else(invalid)?;

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('"') => value.push('"'),
            Some('\\') => value.push('\\'),
            _ => return Err(invalid()),
        }
    }
    Ok(value)
}

fn operands(node: &CstNode) -> Vec<&CstNode> {
    node.significant_children()
        .filter(|c| c.kind != NodeKind::Operator)
        .collect()
}

fn operator_text(node: &CstNode) -> Result<&str, TransformError> {
    node.find_child(NodeKind::Operator)
        .map(CstNode::text_or_empty)
        .ok_or_else(|| {
            TransformError::malformed(node.span, format!("{:?} missing Operator", node.kind))
        })
}

// =============================================================================
// LITERALS
// =============================================================================

fn transform_integer(node: &CstNode) -> Result<Expression, TransformError> {
    let text = node.text_or_empty();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map(Expression::Integer).map_err(|_| TransformError::InvalidLiteral {
        kind: node.kind,
        text: text.to_string(),
        span: node.span,
    })
}

fn transform_float(node: &CstNode) -> Result<Expression, TransformError> {
    let text = node.text_or_empty();
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Expression::Float)
        .ok_or_else(|| TransformError::InvalidLiteral {
            kind: node.kind,
            text: text.to_string(),
            span: node.span,
        })
}

fn transform_boolean(node: &CstNode) -> Result<Expression, TransformError> {
    match node.text_or_empty() {
        "true" => Ok(Expression::Boolean(true)),
        "false" => Ok(Expression::Boolean(false)),
        other => Err(TransformError::InvalidLiteral {
            kind: node.kind,
            text: other.to_string(),
            span: node.span,
        }),
    }
}

// =============================================================================
// COMPOUND EXPRESSIONS
// =============================================================================

/// `items[i]`
fn transform_array_element(node: &CstNode) -> Result<Expression, TransformError> {
    let name = identifier_text(node, "array element reference")?;
    let index = node
        .significant_children()
        .find(|c| c.kind.is_expression())
        .ok_or_else(|| {
            TransformError::malformed(node.span, format!("index missing for '{name}'"))
        })?;
    Ok(Expression::ArrayElement {
        name,
        index: Box::new(transform_expression(index)?),
        span: node.span,
    })
}

fn transform_binary(node: &CstNode) -> Result<Expression, TransformError> {
    let symbol = operator_text(node)?;
    let op = BinaryOp::from_symbol(symbol).ok_or_else(|| {
        TransformError::malformed(node.span, format!("unknown binary operator '{symbol}'"))
    })?;
    let (left, right) = match operands(node)[..] {
        [left, right] => (left, right),
        _ => {
            return Err(TransformError::malformed(
                node.span,
                "binary expression needs two operands",
            ));
        }
    };
    Ok(Expression::Binary {
        op,
        left: Box::new(transform_expression(left)?),
        right: Box::new(transform_expression(right)?),
        span: node.span,
    })
}

fn transform_unary(node: &CstNode) -> Result<Expression, TransformError> {
    let symbol = operator_text(node)?;
    let op = UnaryOp::from_symbol(symbol).ok_or_else(|| {
        TransformError::malformed(node.span, format!("unknown unary operator '{symbol}'"))
    })?;
    let operand = match operands(node)[..] {
        [operand] => operand,
        _ => {
            return Err(TransformError::malformed(
                node.span,
                "unary expression needs one operand",
            ));
        }
    };
    Ok(Expression::Unary {
        op,
        operand: Box::new(transform_expression(operand)?),
        span: node.span,
    })
}

// =============================================================================
// TESTS
// =============================================================================
